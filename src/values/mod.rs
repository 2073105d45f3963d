//! Run-time values and typed storage cells.
//!
//! - [`value::Value`] is the closed set of values an expression can compute.
//! - [`object::Object`] is a region of storage holding one value, written
//!   once by initialization and afterwards only by stores.

pub mod object;
pub mod value;

#[cfg(test)]
mod tests;
