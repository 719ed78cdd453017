//! Application layer: invocation dispatch
//!
//! This layer orchestrates domain validation and depends on I/O boundary traits.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{DispatchOutcome, Dispatcher};
