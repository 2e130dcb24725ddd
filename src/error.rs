// CCAL-IR - Semantic analysis and three-address code for the CCAL language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Diagnostics and error types.
//!
//! Semantic problems are collected as [`Diagnostic`]s and never abort the
//! analyzer. [`CompileError`] is what the pipeline functions return when code
//! generation cannot proceed.

use thiserror::Error;

/// A position in the source code, taken from a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The broad class a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Redeclaration,
    UndeclaredReference,
    NoValueUse,
    TypeMismatch,
    ArityMismatch,
    DuplicateParameter,
    InvalidAssignment,
}

/// Error codes for semantic diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Undeclared references and redeclarations (E200-E204)
    UndeclaredVariable,
    VariableAlreadyDeclared,
    ConstantAlreadyDeclared,
    FunctionAlreadyDeclared,
    UndeclaredFunction,

    // Value tracking (E205)
    VariableHasNoValue,

    // Typing (E210-E214)
    TypeMismatch,
    InvalidConstantValue,
    InvalidOperandType,
    ArgumentTypeMismatch,
    ReturnTypeMismatch,

    // Calls and parameters (E220-E221)
    WrongNumberOfArguments,
    DuplicateParameterName,

    // Assignment targets (E230-E231)
    CannotAssignToConstant,
    CannotAssignToFunction,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UndeclaredVariable => "E200",
            ErrorCode::VariableAlreadyDeclared => "E201",
            ErrorCode::ConstantAlreadyDeclared => "E202",
            ErrorCode::FunctionAlreadyDeclared => "E203",
            ErrorCode::UndeclaredFunction => "E204",
            ErrorCode::VariableHasNoValue => "E205",
            ErrorCode::TypeMismatch => "E210",
            ErrorCode::InvalidConstantValue => "E211",
            ErrorCode::InvalidOperandType => "E212",
            ErrorCode::ArgumentTypeMismatch => "E213",
            ErrorCode::ReturnTypeMismatch => "E214",
            ErrorCode::WrongNumberOfArguments => "E220",
            ErrorCode::DuplicateParameterName => "E221",
            ErrorCode::CannotAssignToConstant => "E230",
            ErrorCode::CannotAssignToFunction => "E231",
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> DiagnosticCategory {
        match self {
            ErrorCode::VariableAlreadyDeclared
            | ErrorCode::ConstantAlreadyDeclared
            | ErrorCode::FunctionAlreadyDeclared => DiagnosticCategory::Redeclaration,
            ErrorCode::UndeclaredVariable | ErrorCode::UndeclaredFunction => {
                DiagnosticCategory::UndeclaredReference
            }
            ErrorCode::VariableHasNoValue => DiagnosticCategory::NoValueUse,
            ErrorCode::TypeMismatch
            | ErrorCode::InvalidConstantValue
            | ErrorCode::InvalidOperandType
            | ErrorCode::ArgumentTypeMismatch
            | ErrorCode::ReturnTypeMismatch => DiagnosticCategory::TypeMismatch,
            ErrorCode::WrongNumberOfArguments => DiagnosticCategory::ArityMismatch,
            ErrorCode::DuplicateParameterName => DiagnosticCategory::DuplicateParameter,
            ErrorCode::CannotAssignToConstant | ErrorCode::CannotAssignToFunction => {
                DiagnosticCategory::InvalidAssignment
            }
        }
    }
}

/// A semantic diagnostic with source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message} (line {line}, column {column})")]
pub struct Diagnostic {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Line of the offending token (1-indexed).
    pub line: usize,
    /// Column of the offending token (1-indexed).
    pub column: usize,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(code: ErrorCode, message: impl Into<String>, position: Position) -> Self {
        Self {
            code,
            message: message.into(),
            line: position.line,
            column: position.column,
            hint: None,
        }
    }

    /// Add a hint to this diagnostic.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// The position this diagnostic points at.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Errors returned by the compilation pipeline.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Semantic analysis reported diagnostics, so no code was generated.
    #[error("semantic analysis reported {} diagnostic(s)", .0.len())]
    Semantic(Vec<Diagnostic>),

    /// A jump referenced a block that never received a label.
    #[error("jump target {0} was never assigned a label")]
    UnresolvedJump(String),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Format a diagnostic with source context.
pub fn format_diagnostic(diagnostic: &Diagnostic, source: &str, filename: Option<&str>) -> String {
    let filename = filename.unwrap_or("<input>");
    let line_content = source
        .lines()
        .nth(diagnostic.line.saturating_sub(1))
        .unwrap_or("");

    let mut output = String::new();

    output.push_str(&format!(
        "error[{}]: {}\n",
        diagnostic.code_str(),
        diagnostic.message
    ));
    output.push_str(&format!(
        "  --> {}:{}:{}\n",
        filename, diagnostic.line, diagnostic.column
    ));

    let line_num_width = diagnostic.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        diagnostic.line,
        line_content,
        width = line_num_width
    ));

    let caret_start = diagnostic.column.saturating_sub(1);
    output.push_str(&format!(
        "{:>width$} | {:>start$}^\n",
        "",
        "",
        width = line_num_width,
        start = caret_start
    ));

    if let Some(hint) = &diagnostic.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// An ordered collection of diagnostics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic to the collection.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Drop repeated diagnostics (same position and message), keeping the first.
    pub fn deduplicate(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.diagnostics
            .retain(|d| seen.insert((d.line, d.column, d.message.clone())));
    }

    /// Check if there are any diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get an iterator over the diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Borrow the diagnostics as a slice.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Convert into a vector of diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(ErrorCode::UndeclaredVariable.code(), "E200");
        assert_eq!(ErrorCode::VariableHasNoValue.code(), "E205");
        assert_eq!(ErrorCode::WrongNumberOfArguments.code(), "E220");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::ConstantAlreadyDeclared.category(),
            DiagnosticCategory::Redeclaration
        );
        assert_eq!(
            ErrorCode::ArgumentTypeMismatch.category(),
            DiagnosticCategory::TypeMismatch
        );
        assert_eq!(
            ErrorCode::DuplicateParameterName.category(),
            DiagnosticCategory::DuplicateParameter
        );
    }

    #[test]
    fn test_diagnostic() {
        let diagnostic = Diagnostic::new(
            ErrorCode::UndeclaredVariable,
            "Variable \"foo\" not declared",
            Position::new(3, 7),
        )
        .with_hint("Declare it with 'var foo: integer;'");

        assert_eq!(diagnostic.code_str(), "E200");
        assert_eq!(diagnostic.position(), Position::new(3, 7));
        assert!(diagnostic.hint.is_some());
        assert_eq!(
            diagnostic.to_string(),
            "[E200] Variable \"foo\" not declared (line 3, column 7)"
        );
    }

    #[test]
    fn test_deduplicate_keeps_first() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::new(
            ErrorCode::TypeMismatch,
            "a",
            Position::new(1, 1),
        ));
        diagnostics.push(Diagnostic::new(
            ErrorCode::TypeMismatch,
            "b",
            Position::new(1, 1),
        ));
        diagnostics.push(Diagnostic::new(
            ErrorCode::TypeMismatch,
            "a",
            Position::new(1, 1),
        ));
        diagnostics.deduplicate();

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn test_format_diagnostic() {
        let source = "main\nbegin\n  x := 5;\nend";
        let diagnostic = Diagnostic::new(
            ErrorCode::UndeclaredVariable,
            "Variable \"x\" not declared",
            Position::new(3, 3),
        );
        let output = format_diagnostic(&diagnostic, source, Some("test.ccl"));

        assert!(output.starts_with("error[E200]: Variable \"x\" not declared\n"));
        assert!(output.contains("--> test.ccl:3:3"));
        assert!(output.contains("3 |   x := 5;"));
        assert!(output.contains("  |   ^"));
    }

    #[test]
    fn test_compile_error_message() {
        let error = CompileError::Semantic(vec![Diagnostic::new(
            ErrorCode::TypeMismatch,
            "x",
            Position::new(1, 1),
        )]);
        assert_eq!(error.to_string(), "semantic analysis reported 1 diagnostic(s)");
    }
}
