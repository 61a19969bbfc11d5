//! Auxiliary conversion context
//!
//! Side parameters required by conversions that are not pure scale
//! factors: wavelength or frequency for flux-density unit changes,
//! distance for flux-luminosity changes, a photometric zero point for
//! magnitude conversions. A context is built per conversion call and
//! discarded after it; there are no defaults for any parameter.

use serde::{Deserialize, Serialize};

use radiant_core::constants::{JANSKY_W_M2_HZ, PARSEC_M, SPEED_OF_LIGHT_M_S};
use radiant_core::ConvertError;

/// Relative tolerance for the lambda*nu = c cross-check when both
/// wavelength and frequency are supplied.
const WAVELENGTH_FREQUENCY_TOLERANCE: f64 = 1e-6;

/// An auxiliary parameter a cross-kind transform may require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Param {
    /// Wavelength (satisfiable by wavelength or frequency, lambda*nu = c)
    Wavelength,
    /// Distance to the source
    Distance,
    /// Photometric zero-point flux
    ZeroPoint,
}

impl Param {
    /// The caller-facing parameter name used in error reports
    pub fn name(&self) -> &'static str {
        match self {
            Param::Wavelength => "wavelength",
            Param::Distance => "distance_pc",
            Param::ZeroPoint => "zero_point_Jy",
        }
    }
}

/// Optional side parameters for a single conversion call
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AuxContext {
    /// Wavelength in meters
    pub wavelength_m: Option<f64>,
    /// Frequency in hertz
    pub frequency_hz: Option<f64>,
    /// Distance in parsecs
    pub distance_pc: Option<f64>,
    /// Magnitude zero-point flux in janskys
    pub zero_point_jy: Option<f64>,
}

impl AuxContext {
    /// An empty context (sufficient for all same-kind conversions)
    pub fn new() -> Self {
        AuxContext::default()
    }

    /// Builder: wavelength in meters
    pub fn with_wavelength_m(mut self, wavelength: f64) -> Self {
        self.wavelength_m = Some(wavelength);
        self
    }

    /// Builder: wavelength in micrometers
    pub fn with_wavelength_um(self, wavelength: f64) -> Self {
        self.with_wavelength_m(wavelength * 1e-6)
    }

    /// Builder: wavelength in nanometers
    pub fn with_wavelength_nm(self, wavelength: f64) -> Self {
        self.with_wavelength_m(wavelength * 1e-9)
    }

    /// Builder: wavelength in angstroms
    pub fn with_wavelength_angstrom(self, wavelength: f64) -> Self {
        self.with_wavelength_m(wavelength * 1e-10)
    }

    /// Builder: frequency in hertz
    pub fn with_frequency_hz(mut self, frequency: f64) -> Self {
        self.frequency_hz = Some(frequency);
        self
    }

    /// Builder: frequency in gigahertz
    pub fn with_frequency_ghz(self, frequency: f64) -> Self {
        self.with_frequency_hz(frequency * 1e9)
    }

    /// Builder: distance in parsecs
    pub fn with_distance_pc(mut self, distance: f64) -> Self {
        self.distance_pc = Some(distance);
        self
    }

    /// Builder: zero-point flux in janskys
    pub fn with_zero_point_jy(mut self, zero_point: f64) -> Self {
        self.zero_point_jy = Some(zero_point);
        self
    }

    /// True when no parameter is set
    pub fn is_empty(&self) -> bool {
        self.wavelength_m.is_none()
            && self.frequency_hz.is_none()
            && self.distance_pc.is_none()
            && self.zero_point_jy.is_none()
    }

    /// Check that a required parameter is present and physically valid
    pub fn require(&self, param: Param) -> Result<(), ConvertError> {
        match param {
            Param::Wavelength => self.wavelength().map(|_| ()),
            Param::Distance => self.distance_m().map(|_| ()),
            Param::ZeroPoint => self.zero_point_w_m2_hz().map(|_| ()),
        }
    }

    /// Resolve the wavelength in meters.
    ///
    /// Satisfiable by either the wavelength or the frequency parameter;
    /// when both are supplied they must agree (lambda*nu = c) within
    /// 1e-6 relative tolerance.
    pub fn wavelength(&self) -> Result<f64, ConvertError> {
        match (self.wavelength_m, self.frequency_hz) {
            (Some(lambda), frequency) => {
                check_positive(Param::Wavelength.name(), lambda)?;
                if let Some(nu) = frequency {
                    check_positive("frequency", nu)?;
                    let product = lambda * nu;
                    let relative = (product - SPEED_OF_LIGHT_M_S).abs() / SPEED_OF_LIGHT_M_S;
                    if relative > WAVELENGTH_FREQUENCY_TOLERANCE {
                        return Err(ConvertError::invalid_context(
                            "frequency",
                            format!(
                                "inconsistent with wavelength: lambda*nu = {:e} m/s, expected {:e}",
                                product, SPEED_OF_LIGHT_M_S
                            ),
                        ));
                    }
                }
                Ok(lambda)
            }
            (None, Some(nu)) => {
                check_positive("frequency", nu)?;
                Ok(SPEED_OF_LIGHT_M_S / nu)
            }
            (None, None) => Err(ConvertError::missing_context(Param::Wavelength.name())),
        }
    }

    /// Resolve the distance in meters
    pub fn distance_m(&self) -> Result<f64, ConvertError> {
        match self.distance_pc {
            Some(d) => {
                check_positive(Param::Distance.name(), d)?;
                Ok(d * PARSEC_M)
            }
            None => Err(ConvertError::missing_context(Param::Distance.name())),
        }
    }

    /// Resolve the zero-point flux in canonical W/m^2/Hz
    pub fn zero_point_w_m2_hz(&self) -> Result<f64, ConvertError> {
        match self.zero_point_jy {
            Some(zp) => {
                check_positive(Param::ZeroPoint.name(), zp)?;
                Ok(zp * JANSKY_W_M2_HZ)
            }
            None => Err(ConvertError::missing_context(Param::ZeroPoint.name())),
        }
    }
}

fn check_positive(param: &str, value: f64) -> Result<(), ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::invalid_context(param, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ConvertError::invalid_context(param, "must be positive"));
    }
    Ok(())
}
