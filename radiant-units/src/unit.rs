//! Unit representation and the canonical quantity model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::QuantityKind;

/// Relationship between a unit and the canonical unit of its kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    /// Multiplicative: canonical = value * factor
    Linear(f64),
    /// Pogson logarithmic relation for magnitudes:
    /// canonical (linear flux ratio) = 10^(-0.4 * value)
    Pogson,
}

/// A radiation unit: a symbol tied to one quantity kind and a scale or
/// transform relationship to that kind's canonical unit.
///
/// Units are created once at registry population and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "Jy", "erg/s/cm^2/Hz")
    pub symbol: String,
    /// The unit name (e.g., "jansky")
    pub name: String,
    /// The owning quantity kind
    pub kind: QuantityKind,
    /// Relationship to the canonical unit of `kind`
    pub scale: Scale,
}

impl Unit {
    /// Create a unit with a multiplicative relation to its canonical unit
    pub fn linear(symbol: &str, name: &str, kind: QuantityKind, factor: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            kind,
            scale: Scale::Linear(factor),
        }
    }

    /// Create a magnitude unit (Pogson relation to the linear ratio pivot)
    pub fn pogson(symbol: &str, name: &str) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            kind: QuantityKind::Magnitude,
            scale: Scale::Pogson,
        }
    }

    /// Whether this is the canonical unit of its kind
    pub fn is_canonical(&self) -> bool {
        self.symbol == self.kind.canonical_symbol()
    }

    /// Express a value of this unit in the canonical unit of its kind
    pub fn to_canonical(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear(factor) => value * factor,
            Scale::Pogson => 10f64.powf(-0.4 * value),
        }
    }

    /// Express a canonical value of this unit's kind in this unit
    pub fn from_canonical(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear(factor) => value / factor,
            Scale::Pogson => -2.5 * value.log10(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
