use crate::{
    ast::{
        ast::{DeclId, ExprId, StmtId},
        statements::Stmt,
    },
    errors::errors::Error,
};

use super::builder::Builder;

impl Builder {
    fn push_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.ast_mut().push_stmt(stmt)
    }

    /// Returns the statement `skip`.
    pub fn make_skip(&mut self) -> StmtId {
        self.push_stmt(Stmt::Skip)
    }

    /// Returns the statement `{ s1 s2 ... sn }`.
    pub fn make_block(&mut self, stmts: Vec<StmtId>) -> StmtId {
        self.push_stmt(Stmt::Block(stmts))
    }

    /// Returns the statement `if (e) s1 else s2`.
    pub fn make_if(&mut self, e: ExprId, s1: StmtId, s2: StmtId) -> Result<StmtId, Error> {
        let condition = self.require_bool(e)?;
        Ok(self.push_stmt(Stmt::If {
            condition,
            then_stmt: s1,
            else_stmt: s2,
        }))
    }

    /// Returns the statement `while (e) s1`.
    pub fn make_while(&mut self, e: ExprId, s1: StmtId) -> Result<StmtId, Error> {
        let condition = self.require_bool(e)?;
        Ok(self.push_stmt(Stmt::While {
            condition,
            body: s1,
        }))
    }

    pub fn make_break(&mut self) -> StmtId {
        self.push_stmt(Stmt::Break)
    }

    pub fn make_continue(&mut self) -> StmtId {
        self.push_stmt(Stmt::Continue)
    }

    /// Returns the statement `return e;` for a function whose return object
    /// is `decl`.
    ///
    /// `e` is checked as an initializer of the return object. The checked
    /// expression is kept in the statement, not on the declaration, since a
    /// function may return from several places.
    pub fn make_return(&mut self, decl: DeclId, e: ExprId) -> Result<StmtId, Error> {
        let initializer = self.check_initializer(decl, e)?;
        Ok(self.push_stmt(Stmt::Return(initializer.get_expr())))
    }

    /// Returns the statement `e;`.
    pub fn make_expression(&mut self, e: ExprId) -> StmtId {
        self.push_stmt(Stmt::Expression(e))
    }

    /// Returns the statement `d`.
    pub fn make_declaration(&mut self, d: DeclId) -> StmtId {
        self.push_stmt(Stmt::Declaration(d))
    }
}
