//! Radiant Units - Radiation Quantity and Unit Conversion
//!
//! Converts measured or derived radiation quantities between the unit
//! conventions used in astronomy and radiometry (SI, CGS, Jansky,
//! magnitude systems, photon-count systems).
//!
//! Quantity kinds:
//! - Flux density per frequency (W/m^2/Hz, erg/s/cm^2/Hz, Jy, mJy, uJy)
//! - Flux density per wavelength (W/m^2/um, erg/s/cm^2/A, ...)
//! - Photon flux per wavelength (photon/cm^2/s/A, photon/cm^2/s/um)
//! - Bolometric flux (W/m^2, erg/s/cm^2)
//! - Luminosity (W, erg/s, Lsun)
//! - Magnitude (mag, AB_mag, ST_mag)
//! - Wavelength (m, um, nm, A, ...) and frequency (Hz ... THz)
//! - Photon energy (J, erg, eV, keV, MeV)
//! - Surface brightness (Rayleigh family)
//!
//! Same-kind conversions pivot through one canonical unit per kind.
//! Cross-kind conversions (f_nu <-> f_lambda, flux <-> luminosity,
//! magnitude <-> flux density, ...) require auxiliary context —
//! wavelength or frequency, distance, a photometric zero point — and
//! never fall back to silent defaults.
//!
//! ```
//! use radiant_units::{convert_value, AuxContext};
//!
//! let cgs = convert_value(1.0, "Jy", "erg/s/cm^2/Hz", &AuxContext::new()).unwrap();
//! assert!((cgs - 1.0e-23).abs() < 1e-32);
//!
//! let ctx = AuxContext::new().with_distance_pc(10.0);
//! let lum = convert_value(10.0, "flux_Wm2", "luminosity_W", &ctx).unwrap();
//! assert!(lum > 0.0);
//! ```

mod catalog;
mod context;
mod engine;
mod kind;
mod registry;
mod transform;
mod unit;

pub use catalog::{default_registry, UNITS};
pub use context::{AuxContext, Param};
pub use engine::{ConversionRequest, ConversionResult, Engine};
pub use kind::QuantityKind;
pub use registry::UnitRegistry;
pub use transform::{Transform, TransformTable};
pub use unit::{Scale, Unit};

pub use radiant_core::ConvertError;

use std::sync::LazyLock;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        convert, convert_value, AuxContext, ConversionResult, ConvertError, QuantityKind, Unit,
    };
}

static ENGINE: LazyLock<Engine<'static>> = LazyLock::new(Engine::new);

/// Convert a value between two units of the default catalog.
///
/// Stateless and safe to call from any number of concurrent call sites.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    context: &AuxContext,
) -> Result<ConversionResult, ConvertError> {
    let request = ConversionRequest::new(value, from_unit, to_unit, *context);
    ENGINE.convert(&request)
}

/// Like [`convert`], returning only the numeric value
pub fn convert_value(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    context: &AuxContext,
) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, context).map(|r| r.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_top_level_convert() {
        let result = convert(1.0, "Jy", "erg/s/cm^2/Hz", &AuxContext::new()).unwrap();
        assert_relative_eq!(result.value, 1.0e-23, max_relative = 1e-12);
        assert_eq!(result.unit.symbol, "erg/s/cm^2/Hz");
    }

    #[test]
    fn test_top_level_convert_value() {
        let mjy = convert_value(1.0, "Jy", "mJy", &AuxContext::new()).unwrap();
        assert_relative_eq!(mjy, 1e3);
    }

    #[test]
    fn test_errors_surface_through_api() {
        let err = convert_value(1.0, "nope", "Jy", &AuxContext::new()).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownUnit { .. }));
    }
}
