use crate::{types::types::Type, values::value::Value};

use super::ast::{DeclId, ExprId};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    pub fn spelling(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-e`
    Neg,
    /// `/e`, the reciprocal.
    Rec,
    /// `!e`
    Not,
}

impl UnaryOp {
    pub fn spelling(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Rec => "/",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A name already resolved to its declaration.
    Id(DeclId),
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// `condition ? then_expr : else_expr`
    Conditional {
        condition: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    Assign {
        target: ExprId,
        value: ExprId,
    },
    Call {
        callee: ExprId,
        arguments: Vec<ExprId>,
    },
    /// Reads the object designated by a reference-typed operand.
    ValueConv(ExprId),
}

/// A typed expression.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
}

impl Expr {
    pub fn get_type(&self) -> &Type {
        &self.ty
    }

    pub fn get_kind_name(&self) -> &'static str {
        match &self.kind {
            ExprKind::Bool(_) => "bool_lit",
            ExprKind::Int(_) => "int_lit",
            ExprKind::Float(_) => "float_lit",
            ExprKind::Id(_) => "id_expr",
            ExprKind::Binary { op, .. } => match op {
                BinaryOp::Add => "add_expr",
                BinaryOp::Sub => "sub_expr",
                BinaryOp::Mul => "mul_expr",
                BinaryOp::Div => "div_expr",
                BinaryOp::Rem => "rem_expr",
                BinaryOp::Eq => "eq_expr",
                BinaryOp::Ne => "ne_expr",
                BinaryOp::Lt => "lt_expr",
                BinaryOp::Gt => "gt_expr",
                BinaryOp::Le => "le_expr",
                BinaryOp::Ge => "ge_expr",
                BinaryOp::And => "and_expr",
                BinaryOp::Or => "or_expr",
            },
            ExprKind::Unary { op, .. } => match op {
                UnaryOp::Neg => "neg_expr",
                UnaryOp::Rec => "rec_expr",
                UnaryOp::Not => "not_expr",
            },
            ExprKind::Conditional { .. } => "cond_expr",
            ExprKind::Assign { .. } => "assign_expr",
            ExprKind::Call { .. } => "call_expr",
            ExprKind::ValueConv(_) => "value_conv",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Float(_)
        )
    }

    /// The value denoted by a literal.
    pub fn get_literal_value(&self) -> Option<Value> {
        match self.kind {
            ExprKind::Bool(b) => Some(Value::from(b)),
            ExprKind::Int(n) => Some(Value::from(n)),
            ExprKind::Float(n) => Some(Value::from(n)),
            _ => None,
        }
    }

    /// Operands in evaluation order. A call lists its callee first.
    pub fn get_children(&self) -> Vec<ExprId> {
        match &self.kind {
            ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::Id(_) => {
                vec![]
            }
            ExprKind::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
            ExprKind::Unary { operand, .. } => vec![*operand],
            ExprKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => vec![*condition, *then_expr, *else_expr],
            ExprKind::Assign { target, value } => vec![*target, *value],
            ExprKind::Call { callee, arguments } => {
                let mut children = Vec::with_capacity(arguments.len() + 1);
                children.push(*callee);
                children.extend(arguments.iter().copied());
                children
            }
            ExprKind::ValueConv(operand) => vec![*operand],
        }
    }
}
