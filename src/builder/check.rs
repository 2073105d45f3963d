use tracing::debug;

use crate::{
    ast::{ast::ExprId, expressions::ExprKind},
    errors::errors::{TypeCategory, TypeError},
    types::types::{FunctionType, Type},
};

use super::builder::Builder;

fn rejected(rule: &'static str, error: TypeError) -> TypeError {
    debug!(rule, %error, "operand rejected");
    error
}

impl Builder {
    /// Converts a reference to a value.
    ///
    /// Returns `e` unchanged when it already has object type, so applying
    /// the conversion twice adds a single node.
    pub fn convert_to_value(&mut self, e: ExprId) -> ExprId {
        let t = self.get_type(e);
        match t.get_object_type() {
            Some(object) => {
                let object = object.clone();
                self.push_expr(ExprKind::ValueConv(e), object)
            }
            None => e,
        }
    }

    /// Returns `e` converted to a value of type `bool`.
    pub fn require_bool(&mut self, e: ExprId) -> Result<ExprId, TypeError> {
        let c = self.convert_to_value(e);
        let t = self.get_type(c);
        if t.is_bool() {
            return Ok(c);
        }
        Err(rejected(
            "require_bool",
            TypeError::NotBoolean {
                category: TypeCategory::of(&t),
                found: t,
            },
        ))
    }

    /// Returns `e` converted to a value of arithmetic type.
    pub fn require_arithmetic(&mut self, e: ExprId) -> Result<ExprId, TypeError> {
        let c = self.convert_to_value(e);
        let t = self.get_type(c);
        if t.is_arithmetic() {
            return Ok(c);
        }
        Err(rejected(
            "require_arithmetic",
            TypeError::NotArithmetic {
                category: TypeCategory::of(&t),
                found: t,
            },
        ))
    }

    /// Returns `e` converted to a value of function type.
    pub fn require_function(&mut self, e: ExprId) -> Result<ExprId, TypeError> {
        self.require_function_type(e).map(|(c, _)| c)
    }

    /// As [`Builder::require_function`], also returning the function type.
    pub(crate) fn require_function_type(
        &mut self,
        e: ExprId,
    ) -> Result<(ExprId, FunctionType), TypeError> {
        let c = self.convert_to_value(e);
        let t = self.get_type(c);
        if let Some(function) = t.as_function() {
            return Ok((c, function.clone()));
        }
        Err(rejected(
            "require_function",
            TypeError::NotFunction {
                category: TypeCategory::of(&t),
                found: t,
            },
        ))
    }

    /// Returns `e` checked against `t`: a reference of exactly type `t` when
    /// `t` is a reference type, otherwise a value of type `t`.
    pub fn require_type(&mut self, e: ExprId, t: &Type) -> Result<ExprId, TypeError> {
        match t.get_object_type() {
            Some(object) => self.require_reference_to(e, object),
            None => self.require_value_of(e, t),
        }
    }

    /// Returns `e` converted to a value of type `t`.
    pub fn require_value_of(&mut self, e: ExprId, t: &Type) -> Result<ExprId, TypeError> {
        let c = self.convert_to_value(e);
        let found = self.get_type(c);
        if found.is_same_as(t) {
            return Ok(c);
        }
        Err(rejected(
            "require_value_of",
            TypeError::OperandTypeMismatch {
                expected: t.clone(),
                found,
            },
        ))
    }

    /// Returns `e` if it is a reference to an object of type `t`. No
    /// conversion is applied.
    pub fn require_reference_to(&mut self, e: ExprId, t: &Type) -> Result<ExprId, TypeError> {
        let found = self.get_type(e);
        if found.is_reference_to(t) {
            return Ok(e);
        }
        Err(rejected(
            "require_reference_to",
            TypeError::NotReferenceTo {
                expected: t.clone(),
                found,
            },
        ))
    }

    /// Returns `(e1, e2)` if they have the same type.
    pub fn require_same(&self, e1: ExprId, e2: ExprId) -> Result<(ExprId, ExprId), TypeError> {
        let t1 = self.get_type(e1);
        let t2 = self.get_type(e2);
        if t1.is_same_as(&t2) {
            return Ok((e1, e2));
        }
        Err(rejected(
            "require_same",
            TypeError::NotSameType {
                left: t1,
                right: t2,
            },
        ))
    }

    /// Returns `(e1, e2)` converted to values of the same type.
    pub fn require_same_value(
        &mut self,
        e1: ExprId,
        e2: ExprId,
    ) -> Result<(ExprId, ExprId), TypeError> {
        let e1 = self.convert_to_value(e1);
        let e2 = self.convert_to_value(e2);
        self.require_same(e1, e2)
    }

    /// Returns `(e1, e2)` converted to values of the same arithmetic type.
    ///
    /// A non-arithmetic left operand is reported before a mismatch between
    /// the operands, so `true + 1` names `bool` rather than the pair.
    pub fn require_same_arithmetic(
        &mut self,
        e1: ExprId,
        e2: ExprId,
    ) -> Result<(ExprId, ExprId), TypeError> {
        let e1 = self.require_arithmetic(e1)?;
        let e2 = self.require_arithmetic(e2)?;

        let t1 = self.get_type(e1);
        let t2 = self.get_type(e2);
        if t1.is_same_as(&t2) {
            return Ok((e1, e2));
        }
        Err(rejected(
            "require_same_arithmetic",
            TypeError::OperandTypeMismatch {
                expected: t1,
                found: t2,
            },
        ))
    }

    /// Returns `(e1, e2)` if they can be converted to a common type.
    ///
    /// Two references must refer to the same object type; otherwise both
    /// operands are converted to values of the same type.
    pub fn require_common(
        &mut self,
        e1: ExprId,
        e2: ExprId,
    ) -> Result<(ExprId, ExprId), TypeError> {
        if self.get_type(e1).is_reference() && self.get_type(e2).is_reference() {
            return self.require_same(e1, e2);
        }
        self.require_same_value(e1, e2)
    }
}
