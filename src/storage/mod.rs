//! Run-time storage model.
//!
//! This module lays out objects during execution:
//!
//! - [`store::MonotonicStore`] allocates objects for one activation (or for
//!   static storage) and releases them all at once
//! - [`frame::Frame`] owns the automatic store of one function activation
//! - [`frame::CallStack`] chains frames, owns the static store and binds
//!   parameters when a function is activated
//!
//! Declarations name objects either by allocation or by aliasing an object
//! that already exists, which is how reference binding is implemented.

pub mod frame;
pub mod store;

#[cfg(test)]
mod tests;
