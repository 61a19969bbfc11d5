//! Unit registry
//!
//! Read-only catalog of known units, populated once at startup. Symbols
//! and aliases share one namespace; registering a taken name fails with
//! `DuplicateUnit`, looking up an absent one with `UnknownUnit`.

use std::collections::HashMap;

use radiant_core::ConvertError;

use crate::{QuantityKind, Unit};

/// Registry of all known units
#[derive(Debug, Default)]
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        UnitRegistry::default()
    }

    /// Add a unit to the catalog
    pub fn register(&mut self, unit: Unit) -> Result<(), ConvertError> {
        if self.is_taken(&unit.symbol) {
            return Err(ConvertError::duplicate_unit(&unit.symbol));
        }
        self.units.insert(unit.symbol.clone(), unit);
        Ok(())
    }

    /// Register an alternative spelling for an existing unit symbol
    pub fn alias(&mut self, alias: &str, symbol: &str) -> Result<(), ConvertError> {
        if self.is_taken(alias) {
            return Err(ConvertError::duplicate_unit(alias));
        }
        if !self.units.contains_key(symbol) {
            return Err(ConvertError::unknown_unit(symbol));
        }
        self.aliases.insert(alias.to_string(), symbol.to_string());
        Ok(())
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(symbol) {
            return self.units.get(canonical);
        }
        None
    }

    /// Resolve a symbol or alias, failing with `UnknownUnit`
    pub fn lookup(&self, symbol: &str) -> Result<&Unit, ConvertError> {
        self.get(symbol)
            .ok_or_else(|| ConvertError::unknown_unit(symbol))
    }

    /// All units of a given kind
    pub fn by_kind(&self, kind: QuantityKind) -> Vec<&Unit> {
        self.units.values().filter(|u| u.kind == kind).collect()
    }

    /// All registered unit symbols (aliases excluded)
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered units (aliases excluded)
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn is_taken(&self, name: &str) -> bool {
        self.units.contains_key(name) || self.aliases.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jansky() -> Unit {
        Unit::linear("Jy", "jansky", QuantityKind::FluxDensityFreq, 1e-26)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut reg = UnitRegistry::new();
        reg.register(jansky()).unwrap();

        assert!(reg.get("Jy").is_some());
        assert!(reg.lookup("Jy").is_ok());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let mut reg = UnitRegistry::new();
        reg.register(jansky()).unwrap();

        let err = reg.register(jansky()).unwrap_err();
        assert!(matches!(err, ConvertError::DuplicateUnit { .. }));
    }

    #[test]
    fn test_alias_resolution() {
        let mut reg = UnitRegistry::new();
        reg.register(jansky()).unwrap();
        reg.alias("Jansky", "Jy").unwrap();

        assert_eq!(reg.lookup("Jansky").unwrap().symbol, "Jy");
    }

    #[test]
    fn test_alias_to_unknown_target() {
        let mut reg = UnitRegistry::new();
        assert!(matches!(
            reg.alias("Jansky", "Jy"),
            Err(ConvertError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_alias_name_collision() {
        let mut reg = UnitRegistry::new();
        reg.register(jansky()).unwrap();
        assert!(matches!(
            reg.alias("Jy", "Jy"),
            Err(ConvertError::DuplicateUnit { .. })
        ));
    }

    #[test]
    fn test_unknown_lookup() {
        let reg = UnitRegistry::new();
        match reg.lookup("frobs") {
            Err(ConvertError::UnknownUnit { symbol }) => assert_eq!(symbol, "frobs"),
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_by_kind() {
        let mut reg = UnitRegistry::new();
        reg.register(jansky()).unwrap();
        reg.register(Unit::linear("W", "watt", QuantityKind::Luminosity, 1.0))
            .unwrap();

        let flux = reg.by_kind(QuantityKind::FluxDensityFreq);
        assert_eq!(flux.len(), 1);
        assert_eq!(flux[0].symbol, "Jy");
    }
}
