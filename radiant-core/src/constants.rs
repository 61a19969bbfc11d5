//! Physical and radiometric constants
//!
//! Values follow the 2019 SI exact definitions (CODATA 2018), IAU 2015
//! nominal values, and the STScI radiation unit tables. Everything the
//! unit catalog and the cross-kind transforms need lives here so the
//! numbers are defined exactly once.

/// Speed of light in vacuum, m/s (exact by SI definition)
pub const SPEED_OF_LIGHT_M_S: f64 = 2.997_924_58e8;

/// Speed of light in micrometers per second
///
/// The pivot constant for f_nu <-> f_lambda conversions with the
/// wavelength flux pivot at W/m^2/um.
pub const SPEED_OF_LIGHT_UM_S: f64 = 2.997_924_58e14;

/// Planck constant, J*s (exact by SI definition)
pub const PLANCK_J_S: f64 = 6.626_070_15e-34;

/// Planck constant times speed of light, J*m
///
/// Photon energy is HC_J_M / wavelength[m].
pub const HC_J_M: f64 = PLANCK_J_S * SPEED_OF_LIGHT_M_S;

/// One parsec in meters (IAU 2015, 648000/pi au)
pub const PARSEC_M: f64 = 3.085_677_581_491_367_3e16;

/// One Jansky in W/m^2/Hz
pub const JANSKY_W_M2_HZ: f64 = 1.0e-26;

/// One erg in joules
pub const ERG_J: f64 = 1.0e-7;

/// One electronvolt in joules (exact by SI definition)
pub const ELECTRON_VOLT_J: f64 = 1.602_176_634e-19;

/// IAU 2015 nominal solar luminosity, W
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// One angstrom in meters
pub const ANGSTROM_M: f64 = 1.0e-10;

/// One micrometer in meters
pub const MICRON_M: f64 = 1.0e-6;

/// Conventional AB magnitude reference flux, Jy
///
/// Exported for callers building a zero-point context; the engine itself
/// never assumes it.
pub const AB_REFERENCE_FLUX_JY: f64 = 3631.0;

// STScI surface-brightness constants (UNITS.txt). One Rayleigh expressed
// per steradian, per square degree, and per square arcsecond.

/// Photons/cm^2/s/A/sr in one Rayleigh
pub const RAYLEIGH_PER_SR: f64 = 7.957_753_9e4;

/// Photons/cm^2/s/A/deg^2 in one Rayleigh
pub const RAYLEIGH_PER_DEG2: f64 = 2.424_070_5e1;

/// Photons/cm^2/s/A/arcsec^2 in one Rayleigh
pub const RAYLEIGH_PER_ARCSEC2: f64 = 1.870_424_7e-6;
