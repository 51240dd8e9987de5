//! Error types for polynomial and field arithmetic.

use thiserror::Error;

/// Reasons a polynomial cannot serve as the modulus of GF(p^k).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModulusError {
    /// The polynomial is zero or constant, so nothing can be reduced by it.
    #[error("modulus must have degree at least 1")]
    ZeroDegree,
    /// The polynomial's degree does not match the extension degree `k`.
    #[error("wrong modulus degree: expected {expected}, got {got:?}")]
    WrongDegree { expected: usize, got: Option<usize> },
    /// The polynomial factors over F_p.
    #[error("modulus is not irreducible")]
    NotIrreducible,
}

/// Errors raised by polynomial and field-element operations.
///
/// Every error is reported at the call that caused it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid modulus: {0}")]
    InvalidModulus(#[from] ModulusError),

    /// Two operands belong to different fields (p, k, or modulus differ).
    #[error("operands belong to different fields")]
    FieldMismatch,

    /// Inverse of zero, or of a non-unit modulo a reducible modulus.
    #[error("element is not invertible")]
    NotInvertible,

    #[error("negative exponent {0}")]
    InvalidExponent(i64),

    /// Polynomial division by the zero polynomial.
    #[error("polynomial division by zero")]
    DivisionError,

    /// The trace sum did not land in F_p. Only happens with a reducible modulus.
    #[error("trace has degree {degree}, expected an element of the prime field")]
    TraceNotInBaseField { degree: usize },

    #[error("no irreducible polynomial of degree {k} found over F_{p}")]
    NoIrreducible { p: u64, k: usize },

    #[error("irreducible polynomial search was cancelled")]
    Cancelled,
}
