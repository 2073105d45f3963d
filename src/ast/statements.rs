use super::ast::{DeclId, ExprId, StmtId};

/// Statements of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Skip,
    Block(Vec<StmtId>),
    If {
        condition: ExprId,
        then_stmt: StmtId,
        else_stmt: StmtId,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    Break,
    Continue,
    /// Holds the initializer of the function's return object.
    Return(ExprId),
    Expression(ExprId),
    Declaration(DeclId),
}

impl Stmt {
    pub fn get_kind_name(&self) -> &'static str {
        match self {
            Stmt::Skip => "skip_stmt",
            Stmt::Block(_) => "block_stmt",
            Stmt::If { .. } => "if_stmt",
            Stmt::While { .. } => "while_stmt",
            Stmt::Break => "break_stmt",
            Stmt::Continue => "cont_stmt",
            Stmt::Return(_) => "ret_stmt",
            Stmt::Expression(_) => "expr_stmt",
            Stmt::Declaration(_) => "decl_stmt",
        }
    }

    /// Nested statements, in order.
    pub fn get_children(&self) -> Vec<StmtId> {
        match self {
            Stmt::Block(stmts) => stmts.clone(),
            Stmt::If {
                then_stmt,
                else_stmt,
                ..
            } => vec![*then_stmt, *else_stmt],
            Stmt::While { body, .. } => vec![*body],
            Stmt::Skip
            | Stmt::Break
            | Stmt::Continue
            | Stmt::Return(_)
            | Stmt::Expression(_)
            | Stmt::Declaration(_) => vec![],
        }
    }
}
