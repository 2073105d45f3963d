use std::fmt::{self, Display};

use super::{declarations::Decl, expressions::Expr, statements::Stmt};

/// Handle to an expression stored in an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub(crate) usize);

/// Handle to a statement stored in an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StmtId(pub(crate) usize);

/// Handle to a declaration stored in an [`Ast`].
///
/// Declaration ids double as the identity of a declaration: the storage model
/// keys objects by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub(crate) usize);

impl Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl Display for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

/// Owns every node of one compilation unit.
///
/// Nodes are only ever appended, and refer to one another by id. The whole
/// tree is released at once when the `Ast` is dropped.
#[derive(Debug, Default)]
pub struct Ast {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    decls: Vec<Decl>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0]
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.0]
    }

    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.0]
    }

    pub(crate) fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.0]
    }

    pub(crate) fn push_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len());
        self.exprs.push(expr);
        id
    }

    pub(crate) fn push_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId(self.stmts.len());
        self.stmts.push(stmt);
        id
    }

    pub(crate) fn push_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId(self.decls.len());
        self.decls.push(decl);
        id
    }

    pub fn num_exprs(&self) -> usize {
        self.exprs.len()
    }

    pub fn num_stmts(&self) -> usize {
        self.stmts.len()
    }

    pub fn num_decls(&self) -> usize {
        self.decls.len()
    }
}
