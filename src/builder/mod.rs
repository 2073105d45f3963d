//! Semantic builder.
//!
//! The builder is the only way to construct nodes. Each constructor checks
//! its operands against the typing rules, inserts value conversions where a
//! reference is read, and only then appends the node to the [`crate::ast::ast::Ast`]:
//!
//! - `check`: the `require_*` rules and value conversion
//! - `expr`: literals, id-expressions, operators, assignment and calls
//! - `stmt`: statements
//! - `decl`: variables, functions, programs and initialization
//!
//! A rejected rule leaves the tree unchanged apart from any conversion nodes
//! it had already appended.

pub mod builder;
pub mod check;
pub mod decl;
pub mod expr;
pub mod stmt;
