use tracing::debug;

use crate::{
    ast::{
        ast::{DeclId, ExprId},
        declarations::Decl,
        expressions::{BinaryOp, ExprKind, UnaryOp},
    },
    errors::errors::{BindingError, Error, TypeError},
};

use super::builder::Builder;

// Literals
impl Builder {
    /// Returns a new boolean literal.
    pub fn make_bool(&mut self, b: bool) -> ExprId {
        let ty = self.get_bool_type();
        self.push_expr(ExprKind::Bool(b), ty)
    }

    /// Returns the literal `true`.
    pub fn make_true(&mut self) -> ExprId {
        self.make_bool(true)
    }

    /// Returns the literal `false`.
    pub fn make_false(&mut self) -> ExprId {
        self.make_bool(false)
    }

    /// Returns a new integer literal.
    pub fn make_int(&mut self, n: i64) -> ExprId {
        let ty = self.get_int_type();
        self.push_expr(ExprKind::Int(n), ty)
    }

    /// Returns a new floating point literal.
    pub fn make_float(&mut self, n: f64) -> ExprId {
        let ty = self.get_float_type();
        self.push_expr(ExprKind::Float(n), ty)
    }
}

impl Builder {
    /// Returns an id-expression referring to `decl`.
    ///
    /// Naming an object yields a reference to it. A reference variable
    /// already has reference type and a function keeps its function type.
    pub fn make_id(&mut self, decl: DeclId) -> Result<ExprId, Error> {
        let (declared, names_object) = match self.ast().decl(decl) {
            Decl::Variable(var) => (var.ty.clone(), var.ty.is_object()),
            Decl::Function(function) => (function.ty.clone(), false),
            Decl::Program(_) => {
                return Err(BindingError::InvalidDeclaration {
                    decl,
                    expected: "a variable or function",
                }
                .into())
            }
        };
        let ty = if names_object {
            self.get_reference_type(&declared)
        } else {
            declared
        };
        Ok(self.push_expr(ExprKind::Id(decl), ty))
    }

    /// Returns the expression `e1 && e2`.
    pub fn make_and(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_logical(BinaryOp::And, e1, e2)
    }

    /// Returns the expression `e1 || e2`.
    pub fn make_or(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_logical(BinaryOp::Or, e1, e2)
    }

    /// Returns the expression `!e1`.
    pub fn make_not(&mut self, e1: ExprId) -> Result<ExprId, Error> {
        let e1 = self.require_bool(e1)?;
        let ty = self.get_type(e1);
        Ok(self.push_expr(
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand: e1,
            },
            ty,
        ))
    }

    /// Returns the expression `e1 ? e2 : e3`.
    pub fn make_conditional(&mut self, e1: ExprId, e2: ExprId, e3: ExprId) -> Result<ExprId, Error> {
        let e1 = self.require_bool(e1)?;
        let (e2, e3) = self.require_common(e2, e3)?;
        let ty = self.get_type(e2);
        Ok(self.push_expr(
            ExprKind::Conditional {
                condition: e1,
                then_expr: e2,
                else_expr: e3,
            },
            ty,
        ))
    }

    /// Returns the expression `e1 == e2`.
    pub fn make_eq(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_relational(BinaryOp::Eq, e1, e2)
    }

    /// Returns the expression `e1 != e2`.
    pub fn make_ne(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_relational(BinaryOp::Ne, e1, e2)
    }

    /// Returns the expression `e1 < e2`.
    pub fn make_lt(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_relational(BinaryOp::Lt, e1, e2)
    }

    /// Returns the expression `e1 > e2`.
    pub fn make_gt(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_relational(BinaryOp::Gt, e1, e2)
    }

    /// Returns the expression `e1 <= e2`.
    pub fn make_le(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_relational(BinaryOp::Le, e1, e2)
    }

    /// Returns the expression `e1 >= e2`.
    pub fn make_ge(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_relational(BinaryOp::Ge, e1, e2)
    }

    /// Returns the expression `e1 + e2`.
    pub fn make_add(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_arithmetic(BinaryOp::Add, e1, e2)
    }

    /// Returns the expression `e1 - e2`.
    pub fn make_sub(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_arithmetic(BinaryOp::Sub, e1, e2)
    }

    /// Returns the expression `e1 * e2`.
    pub fn make_mul(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_arithmetic(BinaryOp::Mul, e1, e2)
    }

    /// Returns the expression `e1 / e2`.
    pub fn make_div(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_arithmetic(BinaryOp::Div, e1, e2)
    }

    /// Returns the expression `e1 % e2`.
    pub fn make_rem(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        self.make_arithmetic(BinaryOp::Rem, e1, e2)
    }

    /// Returns the expression `-e1`.
    pub fn make_neg(&mut self, e1: ExprId) -> Result<ExprId, Error> {
        self.make_unary_arithmetic(UnaryOp::Neg, e1)
    }

    /// Returns the expression `/e1`.
    pub fn make_rec(&mut self, e1: ExprId) -> Result<ExprId, Error> {
        self.make_unary_arithmetic(UnaryOp::Rec, e1)
    }

    /// Returns the expression `e1 = e2`.
    ///
    /// The value is converted first; the target must then be a reference to
    /// an object of exactly the value's type. The result is the target.
    pub fn make_assign(&mut self, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        let e2 = self.convert_to_value(e2);
        let value_type = self.get_type(e2);
        let e1 = self.require_reference_to(e1, &value_type)?;
        let ty = self.get_type(e1);
        Ok(self.push_expr(
            ExprKind::Assign {
                target: e1,
                value: e2,
            },
            ty,
        ))
    }

    /// Returns the expression `callee(arguments...)`.
    ///
    /// Each argument initializes its parameter from left to right and the
    /// first one that does not fit is reported.
    pub fn make_call(&mut self, callee: ExprId, arguments: &[ExprId]) -> Result<ExprId, Error> {
        let (callee, function) = self.require_function_type(callee)?;

        if function.get_num_parameters() != arguments.len() {
            debug!(
                expected = function.get_num_parameters(),
                received = arguments.len(),
                "call arity mismatch"
            );
            return Err(TypeError::ArityMismatch {
                expected: function.get_num_parameters(),
                received: arguments.len(),
            }
            .into());
        }

        let mut converted = Vec::with_capacity(arguments.len());
        for (parameter, argument) in function.parameters.iter().zip(arguments.iter()) {
            converted.push(self.require_type(*argument, parameter)?);
        }

        Ok(self.push_expr(
            ExprKind::Call {
                callee,
                arguments: converted,
            },
            function.return_type.clone(),
        ))
    }

    fn make_logical(&mut self, op: BinaryOp, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        let e1 = self.require_bool(e1)?;
        let e2 = self.require_bool(e2)?;
        let ty = self.get_type(e1);
        Ok(self.push_expr(ExprKind::Binary { op, lhs: e1, rhs: e2 }, ty))
    }

    fn make_relational(&mut self, op: BinaryOp, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        let (e1, e2) = self.require_same_value(e1, e2)?;
        let ty = self.get_bool_type();
        Ok(self.push_expr(ExprKind::Binary { op, lhs: e1, rhs: e2 }, ty))
    }

    fn make_arithmetic(&mut self, op: BinaryOp, e1: ExprId, e2: ExprId) -> Result<ExprId, Error> {
        let (e1, e2) = self.require_same_arithmetic(e1, e2)?;
        let ty = self.get_type(e1);
        Ok(self.push_expr(ExprKind::Binary { op, lhs: e1, rhs: e2 }, ty))
    }

    fn make_unary_arithmetic(&mut self, op: UnaryOp, e1: ExprId) -> Result<ExprId, Error> {
        let e1 = self.require_arithmetic(e1)?;
        let ty = self.get_type(e1);
        Ok(self.push_expr(ExprKind::Unary { op, operand: e1 }, ty))
    }
}
