//! Default unit catalog
//!
//! The fixed, versioned table of supported units, populated once at
//! startup. Scale factors come from the SI/CGS definitions and the STScI
//! radiation unit tables; named constants live in `radiant_core::constants`.

use std::sync::LazyLock;

use radiant_core::constants::{
    ANGSTROM_M, ELECTRON_VOLT_J, ERG_J, JANSKY_W_M2_HZ, MICRON_M, RAYLEIGH_PER_ARCSEC2,
    RAYLEIGH_PER_DEG2, RAYLEIGH_PER_SR, SOLAR_LUMINOSITY_W,
};
use radiant_core::ConvertError;

use crate::{QuantityKind, Unit, UnitRegistry};

/// Global default catalog
pub static UNITS: LazyLock<UnitRegistry> =
    LazyLock::new(|| default_registry().expect("builtin unit catalog is consistent"));

/// Build the default catalog from the fixed table
pub fn default_registry() -> Result<UnitRegistry, ConvertError> {
    let mut reg = UnitRegistry::new();
    register_flux_density_freq_units(&mut reg)?;
    register_flux_density_wave_units(&mut reg)?;
    register_photon_flux_units(&mut reg)?;
    register_flux_units(&mut reg)?;
    register_luminosity_units(&mut reg)?;
    register_magnitude_units(&mut reg)?;
    register_wavelength_units(&mut reg)?;
    register_frequency_units(&mut reg)?;
    register_energy_units(&mut reg)?;
    register_surface_brightness_units(&mut reg)?;
    Ok(reg)
}

fn register_flux_density_freq_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::FluxDensityFreq;

    reg.register(Unit::linear("W/m^2/Hz", "watt per square meter per hertz", FluxDensityFreq, 1.0))?;
    reg.register(Unit::linear("erg/s/cm^2/Hz", "erg per second per square centimeter per hertz", FluxDensityFreq, 1e-3))?;
    reg.register(Unit::linear("Jy", "jansky", FluxDensityFreq, JANSKY_W_M2_HZ))?;
    reg.register(Unit::linear("mJy", "millijansky", FluxDensityFreq, 1e-29))?;
    reg.register(Unit::linear("uJy", "microjansky", FluxDensityFreq, 1e-32))?;

    reg.alias("Jansky", "Jy")?;
    reg.alias("jansky", "Jy")?;
    reg.alias("erg/cm^2/s/Hz", "erg/s/cm^2/Hz")?;
    reg.alias("μJy", "uJy")?;
    Ok(())
}

fn register_flux_density_wave_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::FluxDensityWave;

    reg.register(Unit::linear("W/m^2/um", "watt per square meter per micron", FluxDensityWave, 1.0))?;
    reg.register(Unit::linear("W/m^2/nm", "watt per square meter per nanometer", FluxDensityWave, 1e3))?;
    reg.register(Unit::linear("W/m^2/A", "watt per square meter per angstrom", FluxDensityWave, 1e4))?;
    reg.register(Unit::linear("W/m^2/m", "watt per square meter per meter", FluxDensityWave, 1e-6))?;
    reg.register(Unit::linear("erg/s/cm^2/A", "erg per second per square centimeter per angstrom", FluxDensityWave, 10.0))?;

    reg.alias("erg/cm^2/s/A", "erg/s/cm^2/A")?;
    reg.alias("W/m^2/micron", "W/m^2/um")?;
    Ok(())
}

fn register_photon_flux_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::PhotonFluxWave;

    reg.register(Unit::linear("photon/cm^2/s/A", "photon per square centimeter per second per angstrom", PhotonFluxWave, 1.0))?;
    reg.register(Unit::linear("photon/cm^2/s/um", "photon per square centimeter per second per micron", PhotonFluxWave, 1e-4))?;

    reg.alias("ph/cm^2/s/A", "photon/cm^2/s/A")?;
    reg.alias("ph/cm^2/s/um", "photon/cm^2/s/um")?;
    Ok(())
}

fn register_flux_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::Flux;

    reg.register(Unit::linear("W/m^2", "watt per square meter", Flux, 1.0))?;
    reg.register(Unit::linear("erg/s/cm^2", "erg per second per square centimeter", Flux, 1e-3))?;

    reg.alias("flux_Wm2", "W/m^2")?;
    reg.alias("erg/cm^2/s", "erg/s/cm^2")?;
    Ok(())
}

fn register_luminosity_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::Luminosity;

    reg.register(Unit::linear("W", "watt", Luminosity, 1.0))?;
    reg.register(Unit::linear("erg/s", "erg per second", Luminosity, ERG_J))?;
    reg.register(Unit::linear("Lsun", "solar luminosity", Luminosity, SOLAR_LUMINOSITY_W))?;

    reg.alias("luminosity_W", "W")?;
    reg.alias("L_sun", "Lsun")?;
    Ok(())
}

fn register_magnitude_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    reg.register(Unit::pogson("mag", "magnitude"))?;
    reg.register(Unit::pogson("AB_mag", "AB magnitude"))?;
    reg.register(Unit::pogson("ST_mag", "ST magnitude"))?;

    reg.alias("ABmag", "AB_mag")?;
    reg.alias("STmag", "ST_mag")?;
    Ok(())
}

fn register_wavelength_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::Wavelength;

    reg.register(Unit::linear("m", "meter", Wavelength, 1.0))?;
    reg.register(Unit::linear("cm", "centimeter", Wavelength, 1e-2))?;
    reg.register(Unit::linear("mm", "millimeter", Wavelength, 1e-3))?;
    reg.register(Unit::linear("um", "micrometer", Wavelength, MICRON_M))?;
    reg.register(Unit::linear("nm", "nanometer", Wavelength, 1e-9))?;
    reg.register(Unit::linear("A", "angstrom", Wavelength, ANGSTROM_M))?;

    reg.alias("Angstrom", "A")?;
    reg.alias("angstrom", "A")?;
    reg.alias("Å", "A")?;
    reg.alias("micron", "um")?;
    reg.alias("μm", "um")?;
    Ok(())
}

fn register_frequency_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::Frequency;

    reg.register(Unit::linear("Hz", "hertz", Frequency, 1.0))?;
    reg.register(Unit::linear("kHz", "kilohertz", Frequency, 1e3))?;
    reg.register(Unit::linear("MHz", "megahertz", Frequency, 1e6))?;
    reg.register(Unit::linear("GHz", "gigahertz", Frequency, 1e9))?;
    reg.register(Unit::linear("THz", "terahertz", Frequency, 1e12))?;

    reg.alias("hertz", "Hz")?;
    Ok(())
}

fn register_energy_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::Energy;

    reg.register(Unit::linear("J", "joule", Energy, 1.0))?;
    reg.register(Unit::linear("erg", "erg", Energy, ERG_J))?;
    reg.register(Unit::linear("eV", "electronvolt", Energy, ELECTRON_VOLT_J))?;
    reg.register(Unit::linear("keV", "kiloelectronvolt", Energy, 1e3 * ELECTRON_VOLT_J))?;
    reg.register(Unit::linear("MeV", "megaelectronvolt", Energy, 1e6 * ELECTRON_VOLT_J))?;

    reg.alias("joule", "J")?;
    reg.alias("electronvolt", "eV")?;
    Ok(())
}

fn register_surface_brightness_units(reg: &mut UnitRegistry) -> Result<(), ConvertError> {
    use QuantityKind::SurfaceBrightness;

    reg.register(Unit::linear("photon/cm^2/s/A/sr", "photon per square centimeter per second per angstrom per steradian", SurfaceBrightness, 1.0))?;
    reg.register(Unit::linear("R", "rayleigh", SurfaceBrightness, RAYLEIGH_PER_SR))?;
    reg.register(Unit::linear("photon/cm^2/s/A/deg2", "photon per square centimeter per second per angstrom per square degree", SurfaceBrightness, RAYLEIGH_PER_SR / RAYLEIGH_PER_DEG2))?;
    reg.register(Unit::linear("photon/cm^2/s/A/arcsec2", "photon per square centimeter per second per angstrom per square arcsecond", SurfaceBrightness, RAYLEIGH_PER_SR / RAYLEIGH_PER_ARCSEC2))?;

    reg.alias("Rayleigh", "R")?;
    reg.alias("rayleigh", "R")?;
    reg.alias("ph/cm^2/s/A/sr", "photon/cm^2/s/A/sr")?;
    Ok(())
}
