//! Static type system.
//!
//! This module defines the types of the language and the rules that relate
//! them:
//!
//! - Primitive types (`bool`, `int`, `float`)
//! - Reference types (`ref t`) that name storage holding an object
//! - Function types (`(t1, ..., tn) -> r`)
//! - Structural equality and reference containment
//!
//! All types of a compilation unit are interned by a [`types::TypeContext`],
//! so structurally equal types share one handle.

pub mod types;

#[cfg(test)]
mod tests;
