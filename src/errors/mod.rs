//! Error types shared by the type system, the builder and the storage model.
//!
//! This module defines the error taxonomy of the crate:
//!
//! - [`errors::TypeError`] for violations of the typing rules
//! - [`errors::BindingError`] for misuse of declarations and storage
//! - [`errors::ValueError`] for misuse of values and objects
//!
//! Every error carries the offending types or declarations so that a host
//! can render its own diagnostics.

pub mod errors;
