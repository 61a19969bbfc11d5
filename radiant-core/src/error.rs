//! Structured conversion errors
//!
//! Errors are values that propagate to the caller; nothing in the core
//! terminates the process. Every variant carries enough detail (offending
//! symbol, missing parameter name) to act on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for unit conversion operations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ConvertError {
    /// The symbol is not present in the registry (neither unit nor alias)
    #[error("unknown unit: {symbol}")]
    UnknownUnit { symbol: String },

    /// Source and target kinds differ and no cross-kind transform is registered
    #[error("cannot convert {from} ({from_kind}) to {to} ({to_kind}): no conversion path")]
    IncompatibleUnits {
        from: String,
        to: String,
        from_kind: String,
        to_kind: String,
    },

    /// A required auxiliary parameter was not supplied
    #[error("missing required context parameter: {param}")]
    MissingContext { param: String },

    /// A supplied auxiliary parameter is non-finite, non-positive, or
    /// mutually inconsistent with another
    #[error("invalid context parameter {param}: {reason}")]
    InvalidContext { param: String, reason: String },

    /// Raised only during registry population, never during conversion
    #[error("duplicate unit symbol: {symbol}")]
    DuplicateUnit { symbol: String },
}

impl ConvertError {
    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        ConvertError::UnknownUnit { symbol: symbol.into() }
    }

    pub fn missing_context(param: impl Into<String>) -> Self {
        ConvertError::MissingContext { param: param.into() }
    }

    pub fn invalid_context(param: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidContext {
            param: param.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_unit(symbol: impl Into<String>) -> Self {
        ConvertError::DuplicateUnit { symbol: symbol.into() }
    }
}
