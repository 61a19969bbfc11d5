//! Conversion engine
//!
//! Resolves the conversion path between a source and a target unit:
//! same-kind conversions pivot through the kind's canonical unit and
//! never consult the context; cross-kind conversions go through a
//! registered transform after its required context is validated.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use radiant_core::ConvertError;

use crate::catalog::UNITS;
use crate::context::AuxContext;
use crate::transform::TransformTable;
use crate::{Unit, UnitRegistry};

/// One conversion call: value, source and target symbols, side context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub context: AuxContext,
}

impl ConversionRequest {
    pub fn new(value: f64, from: &str, to: &str, context: AuxContext) -> Self {
        ConversionRequest {
            value,
            from: from.to_string(),
            to: to.to_string(),
            context,
        }
    }
}

/// The outcome of a conversion: the value and the resolved target unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: Unit,
}

/// The conversion engine over an injected registry
///
/// Holds no mutable state; one engine can serve any number of concurrent
/// callers.
#[derive(Debug)]
pub struct Engine<'r> {
    registry: &'r UnitRegistry,
    transforms: TransformTable,
}

impl Engine<'static> {
    /// Engine over the default catalog
    pub fn new() -> Self {
        Engine {
            registry: &UNITS,
            transforms: TransformTable::new(),
        }
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Engine::new()
    }
}

impl<'r> Engine<'r> {
    /// Engine over an isolated registry (tests, synthetic catalogs)
    pub fn with_registry(registry: &'r UnitRegistry) -> Self {
        Engine {
            registry,
            transforms: TransformTable::new(),
        }
    }

    /// The registry this engine resolves symbols against
    pub fn registry(&self) -> &UnitRegistry {
        self.registry
    }

    /// Resolve and apply the conversion path for a request
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let from = self.registry.lookup(&request.from)?;
        let to = self.registry.lookup(&request.to)?;

        // Identity conversions are exact, not a multiply/divide round trip.
        if from.symbol == to.symbol {
            trace!(unit = %from.symbol, "identity conversion");
            return Ok(ConversionResult {
                value: request.value,
                unit: to.clone(),
            });
        }

        if from.kind == to.kind {
            debug!(from = %from.symbol, to = %to.symbol, kind = %from.kind, "same-kind conversion");
            let canonical = from.to_canonical(request.value);
            return Ok(ConversionResult {
                value: to.from_canonical(canonical),
                unit: to.clone(),
            });
        }

        let transform = self.transforms.get(from.kind, to.kind).ok_or_else(|| {
            ConvertError::IncompatibleUnits {
                from: from.symbol.clone(),
                to: to.symbol.clone(),
                from_kind: from.kind.to_string(),
                to_kind: to.kind.to_string(),
            }
        })?;

        for param in transform.requires {
            request.context.require(*param)?;
        }

        debug!(
            from = %from.symbol,
            to = %to.symbol,
            from_kind = %from.kind,
            to_kind = %to.kind,
            "cross-kind conversion"
        );
        let canonical = from.to_canonical(request.value);
        let mapped = transform.apply(canonical, &request.context)?;
        let value = to.from_canonical(mapped);
        trace!(canonical, mapped, value, "applied cross-kind transform");

        Ok(ConversionResult {
            value,
            unit: to.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuantityKind;
    use approx::assert_relative_eq;

    fn engine() -> Engine<'static> {
        Engine::new()
    }

    #[test]
    fn test_identity_is_exact() {
        let req = ConversionRequest::new(0.1 + 0.2, "Jy", "Jy", AuxContext::new());
        let result = engine().convert(&req).unwrap();
        assert_eq!(result.value, 0.1 + 0.2);
        assert_eq!(result.unit.symbol, "Jy");
    }

    #[test]
    fn test_identity_through_alias() {
        let req = ConversionRequest::new(7.0, "Jansky", "Jy", AuxContext::new());
        let result = engine().convert(&req).unwrap();
        assert_eq!(result.value, 7.0);
    }

    #[test]
    fn test_jansky_to_cgs() {
        let req = ConversionRequest::new(1.0, "Jy", "erg/s/cm^2/Hz", AuxContext::new());
        let result = engine().convert(&req).unwrap();
        assert_relative_eq!(result.value, 1.0e-23, max_relative = 1e-12);
    }

    #[test]
    fn test_same_kind_ignores_context() {
        // An irrelevant (even absurd) context must not change the result.
        let plain = ConversionRequest::new(1.0, "Jy", "mJy", AuxContext::new());
        let noisy = ConversionRequest::new(
            1.0,
            "Jy",
            "mJy",
            AuxContext::new()
                .with_wavelength_nm(500.0)
                .with_distance_pc(42.0)
                .with_zero_point_jy(3631.0),
        );
        let a = engine().convert(&plain).unwrap();
        let b = engine().convert(&noisy).unwrap();
        assert_eq!(a.value, b.value);
        assert_relative_eq!(a.value, 1e3);
    }

    #[test]
    fn test_unknown_unit() {
        let req = ConversionRequest::new(1.0, "Jy", "furlongs", AuxContext::new());
        match engine().convert(&req) {
            Err(ConvertError::UnknownUnit { symbol }) => assert_eq!(symbol, "furlongs"),
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_incompatible_kinds() {
        // No transform between luminosity and magnitude is registered.
        let req = ConversionRequest::new(1.0, "W", "AB_mag", AuxContext::new());
        assert!(matches!(
            engine().convert(&req),
            Err(ConvertError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_missing_context_names_parameter() {
        let req = ConversionRequest::new(10.0, "flux_Wm2", "luminosity_W", AuxContext::new());
        match engine().convert(&req) {
            Err(ConvertError::MissingContext { param }) => assert_eq!(param, "distance_pc"),
            other => panic!("expected MissingContext, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_context_rejected_before_apply() {
        let req = ConversionRequest::new(
            10.0,
            "flux_Wm2",
            "luminosity_W",
            AuxContext::new().with_distance_pc(-4.0),
        );
        assert!(matches!(
            engine().convert(&req),
            Err(ConvertError::InvalidContext { .. })
        ));
    }

    #[test]
    fn test_magnitude_zero_is_zero_point_flux() {
        let req = ConversionRequest::new(
            0.0,
            "AB_mag",
            "Jy",
            AuxContext::new().with_zero_point_jy(3631.0),
        );
        let result = engine().convert(&req).unwrap();
        assert_relative_eq!(result.value, 3631.0, max_relative = 1e-9);
    }

    #[test]
    fn test_synthetic_registry_injection() {
        let mut reg = UnitRegistry::new();
        reg.register(Unit::linear("blob", "blob", QuantityKind::Luminosity, 1.0))
            .unwrap();
        reg.register(Unit::linear("kiloblob", "kiloblob", QuantityKind::Luminosity, 1e3))
            .unwrap();

        let engine = Engine::with_registry(&reg);
        let req = ConversionRequest::new(2500.0, "blob", "kiloblob", AuxContext::new());
        let result = engine.convert(&req).unwrap();
        assert_relative_eq!(result.value, 2.5);

        // The default catalog is not visible through this engine.
        let req = ConversionRequest::new(1.0, "Jy", "mJy", AuxContext::new());
        assert!(matches!(
            engine.convert(&req),
            Err(ConvertError::UnknownUnit { .. })
        ));
    }
}
