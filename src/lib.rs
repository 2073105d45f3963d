#![allow(clippy::module_inception)]

//! Semantic core of a small imperative expression language.
//!
//! The crate provides the static type system, the [`builder::builder::Builder`]
//! that type-checks nodes while constructing them, and the storage model
//! (values, objects, stores and the call stack) that gives well-typed programs
//! their run-time layout.

pub mod ast;
pub mod builder;
pub mod errors;
pub mod storage;
pub mod types;
pub mod values;
