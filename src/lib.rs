//! Black-box merit function evaluation
//!
//! Example evaluators invoked by an external optimization driver via
//! file-based or pipe-based I/O. See module [`driver`] for the evaluator
//! entry points. The other modules are (public) helper modules.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod driver;
pub mod error;
pub mod merit;
pub mod params;
pub mod record;
pub mod surface;

pub use driver::*;
