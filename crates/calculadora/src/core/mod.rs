//! Core calculator state machine
//!
//! Split into the operator vocabulary, the display formatting rules, and the
//! engine itself. Everything here is synchronous and self-contained: one key
//! event is handled to completion before the next is accepted, and no event
//! ever returns an error to the host.

use thiserror::Error;

pub mod engine;
pub mod format;
mod operator;

pub use engine::{Engine, Snapshot};
pub use operator::Operator;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculation errors
///
/// Division by zero is the only way a calculation can fail. Malformed
/// operand text is not an error anywhere in the engine: it resolves to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
}
