//! Quantity kinds
//!
//! Every unit belongs to exactly one kind, and every kind has a single
//! canonical unit used as the pivot for all conversions of that kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The physical dimension category of a radiation quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    /// Spectral flux density per unit frequency, f_nu
    FluxDensityFreq,
    /// Spectral flux density per unit wavelength, f_lambda
    FluxDensityWave,
    /// Photon flux density per unit wavelength
    PhotonFluxWave,
    /// Bolometric (wavelength-integrated) flux
    Flux,
    /// Luminosity
    Luminosity,
    /// Astronomical magnitude
    Magnitude,
    /// Wavelength
    Wavelength,
    /// Frequency
    Frequency,
    /// Photon or particle energy
    Energy,
    /// Photon surface brightness (Rayleigh family)
    SurfaceBrightness,
}

impl QuantityKind {
    /// The symbol of the canonical unit this kind pivots through
    pub fn canonical_symbol(&self) -> &'static str {
        match self {
            QuantityKind::FluxDensityFreq => "W/m^2/Hz",
            QuantityKind::FluxDensityWave => "W/m^2/um",
            QuantityKind::PhotonFluxWave => "photon/cm^2/s/A",
            QuantityKind::Flux => "W/m^2",
            QuantityKind::Luminosity => "W",
            QuantityKind::Magnitude => "mag",
            QuantityKind::Wavelength => "m",
            QuantityKind::Frequency => "Hz",
            QuantityKind::Energy => "J",
            QuantityKind::SurfaceBrightness => "photon/cm^2/s/A/sr",
        }
    }

    /// Human-readable kind name
    pub fn label(&self) -> &'static str {
        match self {
            QuantityKind::FluxDensityFreq => "flux density per frequency",
            QuantityKind::FluxDensityWave => "flux density per wavelength",
            QuantityKind::PhotonFluxWave => "photon flux per wavelength",
            QuantityKind::Flux => "flux",
            QuantityKind::Luminosity => "luminosity",
            QuantityKind::Magnitude => "magnitude",
            QuantityKind::Wavelength => "wavelength",
            QuantityKind::Frequency => "frequency",
            QuantityKind::Energy => "energy",
            QuantityKind::SurfaceBrightness => "surface brightness",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
