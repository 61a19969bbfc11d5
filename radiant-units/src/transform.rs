//! Cross-kind transforms
//!
//! Physics-based mappings between the canonical values of two quantity
//! kinds, keyed by a (source kind, target kind) pair. Each transform
//! declares the auxiliary parameters it needs; adding a new kind means
//! registering functions here, not editing the engine.

use std::collections::HashMap;

use radiant_core::constants::{
    ANGSTROM_M, ERG_J, HC_J_M, MICRON_M, PLANCK_J_S, SPEED_OF_LIGHT_M_S, SPEED_OF_LIGHT_UM_S,
};
use radiant_core::ConvertError;

use crate::context::{AuxContext, Param};
use crate::QuantityKind;

/// A cross-kind mapping over canonical values
type TransformFn = fn(f64, &AuxContext) -> Result<f64, ConvertError>;

/// A registered cross-kind transform
#[derive(Clone, Copy)]
pub struct Transform {
    /// Auxiliary parameters the transform needs
    pub requires: &'static [Param],
    apply: TransformFn,
}

impl Transform {
    /// Map a canonical source-kind value to a canonical target-kind value
    pub fn apply(&self, value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
        (self.apply)(value, ctx)
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("requires", &self.requires)
            .finish()
    }
}

const NO_PARAMS: &[Param] = &[];
const WAVELENGTH: &[Param] = &[Param::Wavelength];
const DISTANCE: &[Param] = &[Param::Distance];
const ZERO_POINT: &[Param] = &[Param::ZeroPoint];

/// Lookup table of cross-kind transforms
#[derive(Debug)]
pub struct TransformTable {
    map: HashMap<(QuantityKind, QuantityKind), Transform>,
}

impl TransformTable {
    /// Table with all builtin transforms registered
    pub fn new() -> Self {
        use QuantityKind::*;

        let mut table = TransformTable { map: HashMap::new() };

        table.register(FluxDensityFreq, FluxDensityWave, WAVELENGTH, fnu_to_flambda);
        table.register(FluxDensityWave, FluxDensityFreq, WAVELENGTH, flambda_to_fnu);
        table.register(FluxDensityWave, PhotonFluxWave, WAVELENGTH, flambda_to_photon);
        table.register(PhotonFluxWave, FluxDensityWave, WAVELENGTH, photon_to_flambda);
        table.register(FluxDensityFreq, PhotonFluxWave, WAVELENGTH, fnu_to_photon);
        table.register(PhotonFluxWave, FluxDensityFreq, WAVELENGTH, photon_to_fnu);
        table.register(Magnitude, FluxDensityFreq, ZERO_POINT, ratio_to_fnu);
        table.register(FluxDensityFreq, Magnitude, ZERO_POINT, fnu_to_ratio);
        table.register(Flux, Luminosity, DISTANCE, flux_to_luminosity);
        table.register(Luminosity, Flux, DISTANCE, luminosity_to_flux);
        table.register(Wavelength, Frequency, NO_PARAMS, reciprocal_light);
        table.register(Frequency, Wavelength, NO_PARAMS, reciprocal_light);
        table.register(Frequency, Energy, NO_PARAMS, frequency_to_energy);
        table.register(Energy, Frequency, NO_PARAMS, energy_to_frequency);
        table.register(Wavelength, Energy, NO_PARAMS, reciprocal_planck);
        table.register(Energy, Wavelength, NO_PARAMS, reciprocal_planck);

        table
    }

    /// Register a transform for a kind pair
    pub fn register(
        &mut self,
        from: QuantityKind,
        to: QuantityKind,
        requires: &'static [Param],
        apply: TransformFn,
    ) {
        self.map.insert((from, to), Transform { requires, apply });
    }

    /// Look up the transform for a kind pair
    pub fn get(&self, from: QuantityKind, to: QuantityKind) -> Option<&Transform> {
        self.map.get(&(from, to))
    }
}

impl Default for TransformTable {
    fn default() -> Self {
        TransformTable::new()
    }
}

// f_lambda = c * f_nu / lambda^2, with the wavelength pivot at W/m^2/um.
fn fnu_to_flambda(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let lam_um = ctx.wavelength()? / MICRON_M;
    Ok(SPEED_OF_LIGHT_UM_S * value / (lam_um * lam_um))
}

fn flambda_to_fnu(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let lam_um = ctx.wavelength()? / MICRON_M;
    Ok(value * lam_um * lam_um / SPEED_OF_LIGHT_UM_S)
}

// Photon rate = energy flux / photon energy. Canonical f_lambda
// (W/m^2/um) is 0.1 erg/s/cm^2/A; photon energy is hc/lambda.
fn flambda_to_photon(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let lam_a = ctx.wavelength()? / ANGSTROM_M;
    let hc_erg_a = HC_J_M / ERG_J / ANGSTROM_M;
    Ok(0.1 * value * lam_a / hc_erg_a)
}

fn photon_to_flambda(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let lam_a = ctx.wavelength()? / ANGSTROM_M;
    let hc_erg_a = HC_J_M / ERG_J / ANGSTROM_M;
    Ok(value * hc_erg_a / (0.1 * lam_a))
}

fn fnu_to_photon(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let flambda = fnu_to_flambda(value, ctx)?;
    flambda_to_photon(flambda, ctx)
}

fn photon_to_fnu(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let flambda = photon_to_flambda(value, ctx)?;
    flambda_to_fnu(flambda, ctx)
}

// The magnitude canonical is the linear flux ratio F/F0.
fn ratio_to_fnu(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    Ok(value * ctx.zero_point_w_m2_hz()?)
}

fn fnu_to_ratio(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    Ok(value / ctx.zero_point_w_m2_hz()?)
}

// L = 4 pi d^2 F
fn flux_to_luminosity(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let d = ctx.distance_m()?;
    Ok(value * 4.0 * std::f64::consts::PI * d * d)
}

fn luminosity_to_flux(value: f64, ctx: &AuxContext) -> Result<f64, ConvertError> {
    let d = ctx.distance_m()?;
    Ok(value / (4.0 * std::f64::consts::PI * d * d))
}

// lambda * nu = c; the same reciprocal serves both directions.
fn reciprocal_light(value: f64, _ctx: &AuxContext) -> Result<f64, ConvertError> {
    Ok(SPEED_OF_LIGHT_M_S / value)
}

// E = h * nu
fn frequency_to_energy(value: f64, _ctx: &AuxContext) -> Result<f64, ConvertError> {
    Ok(PLANCK_J_S * value)
}

fn energy_to_frequency(value: f64, _ctx: &AuxContext) -> Result<f64, ConvertError> {
    Ok(value / PLANCK_J_S)
}

// E = h * c / lambda, reciprocal both ways.
fn reciprocal_planck(value: f64, _ctx: &AuxContext) -> Result<f64, ConvertError> {
    Ok(HC_J_M / value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at_wavelength_um(lam: f64) -> AuxContext {
        AuxContext::new().with_wavelength_um(lam)
    }

    #[test]
    fn test_fnu_to_flambda_stsci_constant() {
        // STScI: [W/m^2/um] = 2.99792458e14 * [W/m^2/Hz] / [um]^2
        let ctx = at_wavelength_um(2.0);
        let out = fnu_to_flambda(1.0, &ctx).unwrap();
        assert_relative_eq!(out, 2.997_924_58e14 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fnu_flambda_round_trip() {
        let ctx = at_wavelength_um(1.65);
        let flambda = fnu_to_flambda(3.2e-12, &ctx).unwrap();
        let back = flambda_to_fnu(flambda, &ctx).unwrap();
        assert_relative_eq!(back, 3.2e-12, max_relative = 1e-12);
    }

    #[test]
    fn test_flambda_to_photon_stsci_constant() {
        // STScI: [photon/cm^2/s/A] = 5.0341125e7 * [erg/cm^2/s/A] * [A].
        // Canonical f_lambda of 10 W/m^2/um is 1 erg/cm^2/s/A.
        let ctx = AuxContext::new().with_wavelength_angstrom(5000.0);
        let out = flambda_to_photon(10.0, &ctx).unwrap();
        assert_relative_eq!(out, 5.034_112_5e7 * 5000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_photon_round_trips() {
        let ctx = at_wavelength_um(0.55);
        let photon = flambda_to_photon(7.7e-9, &ctx).unwrap();
        assert_relative_eq!(
            photon_to_flambda(photon, &ctx).unwrap(),
            7.7e-9,
            max_relative = 1e-12
        );

        let photon = fnu_to_photon(4.1e-23, &ctx).unwrap();
        assert_relative_eq!(
            photon_to_fnu(photon, &ctx).unwrap(),
            4.1e-23,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_magnitude_zero_point() {
        let ctx = AuxContext::new().with_zero_point_jy(3631.0);
        // Unit ratio maps to the zero-point flux itself
        assert_relative_eq!(ratio_to_fnu(1.0, &ctx).unwrap(), 3.631e-23);
        assert_relative_eq!(fnu_to_ratio(3.631e-23, &ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_flux_luminosity_inverse_square() {
        let ctx = AuxContext::new().with_distance_pc(10.0);
        let d = ctx.distance_m().unwrap();
        let lum = flux_to_luminosity(10.0, &ctx).unwrap();
        assert_relative_eq!(lum, 10.0 * 4.0 * std::f64::consts::PI * d * d);
        assert_relative_eq!(luminosity_to_flux(lum, &ctx).unwrap(), 10.0);
    }

    #[test]
    fn test_wavelength_frequency_reciprocal() {
        let ctx = AuxContext::new();
        let nu = reciprocal_light(5e-7, &ctx).unwrap();
        assert_relative_eq!(nu, 5.995_849_16e14, max_relative = 1e-8);
        assert_relative_eq!(reciprocal_light(nu, &ctx).unwrap(), 5e-7, max_relative = 1e-12);
    }

    #[test]
    fn test_photon_energy_relations() {
        let ctx = AuxContext::new();
        // E(500 nm) = hc / lambda ~ 3.97e-19 J
        let energy = reciprocal_planck(5e-7, &ctx).unwrap();
        assert_relative_eq!(energy, 3.972_891_71e-19, max_relative = 1e-6);

        let nu = energy_to_frequency(energy, &ctx).unwrap();
        assert_relative_eq!(
            frequency_to_energy(nu, &ctx).unwrap(),
            energy,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_table_lookup_and_requirements() {
        use QuantityKind::*;
        let table = TransformTable::new();

        let t = table.get(Flux, Luminosity).unwrap();
        assert_eq!(t.requires, &[Param::Distance]);

        let t = table.get(Magnitude, FluxDensityFreq).unwrap();
        assert_eq!(t.requires, &[Param::ZeroPoint]);

        let t = table.get(Wavelength, Frequency).unwrap();
        assert!(t.requires.is_empty());

        assert!(table.get(Luminosity, Magnitude).is_none());
    }

    #[test]
    fn test_missing_context_surfaces() {
        let ctx = AuxContext::new();
        assert!(matches!(
            fnu_to_flambda(1.0, &ctx),
            Err(ConvertError::MissingContext { .. })
        ));
        assert!(matches!(
            flux_to_luminosity(1.0, &ctx),
            Err(ConvertError::MissingContext { .. })
        ));
    }
}
