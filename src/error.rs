//! Error taxonomy for the rule engine.

use thiserror::Error;

/// User-input validation failures for balance-rule bounds.
///
/// Always recoverable by resubmitting corrected input. The sub-kind is part
/// of the contract: the surrounding API surfaces it to the end user rather
/// than collapsing everything into a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither `from` nor `to` was supplied for a balance rule.
    #[error("at least one of `from` or `to` must be provided")]
    MissingBound,
    /// Both bounds supplied but `from` exceeds `to`.
    #[error("invalid range: `from` ({from}) exceeds `to` ({to})")]
    RangeInverted { from: String, to: String },
    /// A bound falls outside the representable range (0..=100 for
    /// percentages, below 2^128 for yocto amounts).
    #[error("value {value} is out of range (expected {expected})")]
    OutOfRange { value: String, expected: &'static str },
    /// A yocto amount is not a canonical decimal integer.
    #[error("invalid amount {value:?}: expected a decimal integer without leading zeros")]
    InvalidFormat { value: String },
}

/// Top-level engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// Comparator string outside the public or internal vocabulary. A
    /// client/server protocol mismatch, surfaced as a client error and
    /// never retried automatically.
    #[error("unsupported comparator {0:?}")]
    UnsupportedComparator(String),
    /// A stored matching rule carries an impossible tag/status/comparator
    /// combination or unreadable JSON. Fatal to the single read, not to
    /// the process: other alerts may still deserialize fine.
    #[error("corrupt matching rule: {0}")]
    CorruptMatchingRule(String),
}
