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

//! Constructors for AST nodes.
//!
//! [`AstBuilder`] hands out [`NodeId`]s in increasing order and, unless a
//! position is given explicitly, places every token it creates on its own
//! line so that diagnostics for distinct tokens never share a position.

use std::cell::Cell;

use super::{
    Arg, Assignment, BinaryOp, ConstDecl, Declaration, Expr, Function, FunctionCall, IfStatement,
    Main, NodeId, Param, Program, ReturnStatement, Statement, Token, Type, TypeAnnotation,
    VarDecl, WhileStatement,
};

/// Builds AST nodes with fresh ids and synthetic token positions.
#[derive(Debug)]
pub struct AstBuilder {
    next_id: Cell<u32>,
    next_line: Cell<usize>,
}

impl AstBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            next_line: Cell::new(1),
        }
    }

    /// Allocate the next node id.
    pub fn node_id(&self) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeId(id)
    }

    /// Create a token on the next free line.
    pub fn token(&self, image: &str) -> Token {
        let line = self.next_line.get();
        self.next_line.set(line + 1);
        Token::new(image, line, 1)
    }

    /// Create a token at an explicit position.
    pub fn token_at(&self, image: &str, line: usize, column: usize) -> Token {
        Token::new(image, line, column)
    }

    pub fn ty(&self, ty: Type) -> TypeAnnotation {
        TypeAnnotation::new(ty, self.token(ty.name()))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn var(&self, name: &str, ty: Type) -> Declaration {
        self.var_decl(self.token(name), ty)
    }

    pub fn var_decl(&self, name: Token, ty: Type) -> Declaration {
        Declaration::Var(VarDecl {
            name,
            var_type: self.ty(ty),
        })
    }

    pub fn constant(&self, name: &str, ty: Type, literal: &str) -> Declaration {
        self.const_decl(self.token(name), ty, literal)
    }

    pub fn const_decl(&self, name: Token, ty: Type, literal: &str) -> Declaration {
        Declaration::Const(ConstDecl {
            name,
            const_type: self.ty(ty),
            value: self.token(literal),
        })
    }

    pub fn param(&self, name: &str, ty: Type) -> Param {
        Param {
            name: self.token(name),
            param_type: self.ty(ty),
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn variable(&self, name: &str) -> Expr {
        Expr::Variable(self.token(name))
    }

    pub fn digit(&self, value: i64) -> Expr {
        Expr::Digit(self.token(&value.to_string()))
    }

    pub fn boolean(&self, value: bool) -> Expr {
        Expr::Boolean(self.token(if value { "true" } else { "false" }))
    }

    pub fn negate(&self, name: &str) -> Expr {
        Expr::Negate(self.token(name))
    }

    pub fn positive(&self, name: &str) -> Expr {
        Expr::Positive(self.token(name))
    }

    pub fn not(&self, operand: Expr) -> Expr {
        Expr::Not(Box::new(operand))
    }

    pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(&self, name: &str, args: &[&str]) -> FunctionCall {
        let name = self.token(name);
        let args = args
            .iter()
            .map(|arg| Arg {
                name: self.token(arg),
            })
            .collect();
        FunctionCall::new(name, args)
    }

    pub fn call_expr(&self, name: &str, args: &[&str]) -> Expr {
        Expr::Call(self.call(name, args))
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn assign(&self, target: &str, value: Expr) -> Statement {
        self.assign_to(self.token(target), value)
    }

    pub fn assign_to(&self, target: Token, value: Expr) -> Statement {
        Statement::Assignment(Assignment { target, value })
    }

    pub fn call_stmt(&self, name: &str, args: &[&str]) -> Statement {
        Statement::Call(self.call(name, args))
    }

    pub fn skip(&self) -> Statement {
        Statement::Skip(self.token("skip"))
    }

    pub fn block(&self, statements: Vec<Statement>) -> Statement {
        Statement::Block(statements)
    }

    pub fn if_else(
        &self,
        condition: Expr,
        then_block: Vec<Statement>,
        else_block: Vec<Statement>,
    ) -> Statement {
        Statement::If(IfStatement {
            id: self.node_id(),
            condition,
            then_block,
            else_block,
        })
    }

    pub fn while_loop(&self, condition: Expr, body: Vec<Statement>) -> Statement {
        Statement::While(WhileStatement {
            id: self.node_id(),
            condition,
            body,
        })
    }

    // ========================================================================
    // Program structure
    // ========================================================================

    /// Build a function. `value` is the returned expression, if any.
    pub fn function(
        &self,
        return_type: Type,
        name: &str,
        params: Vec<Param>,
        declarations: Vec<Declaration>,
        statements: Vec<Statement>,
        value: Option<Expr>,
    ) -> Function {
        Function {
            id: self.node_id(),
            return_type: self.ty(return_type),
            name: self.token(name),
            params,
            declarations,
            statements,
            return_stmt: ReturnStatement {
                value,
                token: self.token("return"),
            },
        }
    }

    pub fn main(&self, declarations: Vec<Declaration>, statements: Vec<Statement>) -> Main {
        Main {
            id: self.node_id(),
            declarations,
            statements,
        }
    }

    pub fn program(
        &self,
        declarations: Vec<Declaration>,
        functions: Vec<Function>,
        main: Main,
    ) -> Program {
        Program {
            declarations,
            functions,
            main,
        }
    }
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}
