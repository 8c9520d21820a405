//! Error types for the solar ephemeris engine.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised when inputs are rejected or a stage cannot produce a finite value.
///
/// Polar day and polar night are not errors; they are reported through
/// [`SunriseResult`](crate::SunriseResult).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude is missing, non-finite, or outside -90..=90 degrees.
    InvalidLatitude {
        /// The rejected latitude.
        value: f64,
    },
    /// Longitude is missing, non-finite, or outside -180..=180 degrees.
    InvalidLongitude {
        /// The rejected longitude.
        value: f64,
    },
    /// Observer elevation is non-finite or below the centre of the Earth.
    InvalidElevation {
        /// The rejected elevation in meters.
        value: f64,
    },
    /// Atmospheric pressure is outside the supported range.
    InvalidPressure {
        /// The rejected pressure in millibars.
        value: f64,
    },
    /// Air temperature is outside the supported range.
    InvalidTemperature {
        /// The rejected temperature in °C.
        value: f64,
    },
    /// Refraction allowance at the horizon is outside 0..=2 degrees.
    InvalidHorizonRefraction {
        /// The rejected allowance in degrees.
        value: f64,
    },
    /// Surface slope is outside -360..=360 degrees.
    InvalidSlope {
        /// The rejected slope in degrees.
        value: f64,
    },
    /// Surface azimuth rotation is outside -360..=360 degrees.
    InvalidSurfaceRotation {
        /// The rejected rotation in degrees.
        value: f64,
    },
    /// UTC offset is outside -18..=18 hours.
    InvalidUtcOffset {
        /// The rejected offset in hours.
        value: f64,
    },
    /// ΔT is outside -8000..=8000 seconds.
    InvalidDeltaT {
        /// The rejected ΔT in seconds.
        value: f64,
    },
    /// A calendar field is out of range.
    InvalidDateTime {
        /// Which constraint was violated.
        message: &'static str,
    },
    /// A stage produced a non-finite value.
    ComputationError {
        /// Which quantity failed.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "invalid latitude {value}° (must be between -90° and +90°)")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value}° (must be between -180° and +180°)")
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be finite and above -6500000 m)")
            }
            Self::InvalidPressure { value } => {
                write!(f, "invalid pressure {value} mbar (must be between 0 and 2000 mbar)")
            }
            Self::InvalidTemperature { value } => {
                write!(f, "invalid temperature {value}°C (must be between -273.15°C and 100°C)")
            }
            Self::InvalidHorizonRefraction { value } => {
                write!(f, "invalid horizon refraction {value}° (must be between 0° and 2°)")
            }
            Self::InvalidSlope { value } => {
                write!(f, "invalid slope {value}° (must be between -360° and +360°)")
            }
            Self::InvalidSurfaceRotation { value } => {
                write!(
                    f,
                    "invalid surface azimuth rotation {value}° (must be between -360° and +360°)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(f, "invalid UTC offset {value} h (must be between -18 h and +18 h)")
            }
            Self::InvalidDeltaT { value } => {
                write!(f, "invalid delta T {value} s (must be between -8000 s and +8000 s)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid pressure error.
    #[must_use]
    pub const fn invalid_pressure(value: f64) -> Self {
        Self::InvalidPressure { value }
    }

    /// Creates an invalid temperature error.
    #[must_use]
    pub const fn invalid_temperature(value: f64) -> Self {
        Self::InvalidTemperature { value }
    }

    /// Creates an invalid horizon refraction error.
    #[must_use]
    pub const fn invalid_horizon_refraction(value: f64) -> Self {
        Self::InvalidHorizonRefraction { value }
    }

    /// Creates an invalid slope error.
    #[must_use]
    pub const fn invalid_slope(value: f64) -> Self {
        Self::InvalidSlope { value }
    }

    /// Creates an invalid surface rotation error.
    #[must_use]
    pub const fn invalid_surface_rotation(value: f64) -> Self {
        Self::InvalidSurfaceRotation { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid ΔT error.
    #[must_use]
    pub const fn invalid_delta_t(value: f64) -> Self {
        Self::InvalidDeltaT { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

// `RangeInclusive::contains` is false for NaN, so every check below also
// rejects missing values encoded as NaN.

/// Validates latitude is within -90..=90 degrees.
///
/// # Errors
/// Returns `InvalidLatitude` for NaN, infinite, or out-of-range values.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within -180..=180 degrees.
///
/// # Errors
/// Returns `InvalidLongitude` for NaN, infinite, or out-of-range values.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates observer elevation in meters.
///
/// # Errors
/// Returns `InvalidElevation` for non-finite values or values at or below -6 500 000 m.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() || elevation <= -6_500_000.0 {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates pressure is positive and at most 2000 millibars.
///
/// # Errors
/// Returns `InvalidPressure` if pressure is not in (0, 2000] mbar.
pub fn check_pressure(pressure: f64) -> Result<()> {
    if !pressure.is_finite() || pressure <= 0.0 || pressure > 2000.0 {
        return Err(Error::invalid_pressure(pressure));
    }
    Ok(())
}

/// Validates temperature is between absolute zero and 100°C.
///
/// # Errors
/// Returns `InvalidTemperature` if temperature is outside -273.15..=100°C.
pub fn check_temperature(temperature: f64) -> Result<()> {
    if !(-273.15..=100.0).contains(&temperature) {
        return Err(Error::invalid_temperature(temperature));
    }
    Ok(())
}

/// Validates the refraction allowance at the horizon.
///
/// # Errors
/// Returns `InvalidHorizonRefraction` if the value is outside 0..=2 degrees.
pub fn check_horizon_refraction(refraction: f64) -> Result<()> {
    // keeps the refraction cutoff well above the formula's pole at -5.11°
    if !(0.0..=2.0).contains(&refraction) {
        return Err(Error::invalid_horizon_refraction(refraction));
    }
    Ok(())
}

/// Validates surface slope and azimuth rotation.
///
/// # Errors
/// Returns `InvalidSlope` or `InvalidSurfaceRotation` for values outside -360..=360 degrees.
pub fn check_surface(slope: f64, azimuth_rotation: f64) -> Result<()> {
    if !(-360.0..=360.0).contains(&slope) {
        return Err(Error::invalid_slope(slope));
    }
    if !(-360.0..=360.0).contains(&azimuth_rotation) {
        return Err(Error::invalid_surface_rotation(azimuth_rotation));
    }
    Ok(())
}

/// Validates a UTC offset in hours, positive east.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is outside -18..=18 hours.
pub fn check_utc_offset(hours: f64) -> Result<()> {
    if !(-18.0..=18.0).contains(&hours) {
        return Err(Error::invalid_utc_offset(hours));
    }
    Ok(())
}

/// Validates ΔT in seconds.
///
/// # Errors
/// Returns `InvalidDeltaT` if ΔT is outside -8000..=8000 seconds.
pub fn check_delta_t(delta_t: f64) -> Result<()> {
    if !(-8000.0..=8000.0).contains(&delta_t) {
        return Err(Error::invalid_delta_t(delta_t));
    }
    Ok(())
}

/// Passes a finite value through, otherwise reports which quantity failed.
///
/// # Errors
/// Returns `ComputationError` carrying `what` if `value` is NaN or infinite.
pub fn check_finite(value: f64, what: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::computation_error(what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(39.742476).is_ok());

        assert!(check_latitude(90.0001).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-105.1786).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-180.5).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_elevation_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(1830.14).is_ok());
        assert!(check_elevation(-400.0).is_ok());

        assert!(check_elevation(-6_500_000.0).is_err());
        assert!(check_elevation(f64::NAN).is_err());
        assert!(check_elevation(f64::INFINITY).is_err());
    }

    #[test]
    fn test_atmosphere_validation() {
        assert!(check_pressure(1013.25).is_ok());
        assert!(check_pressure(820.0).is_ok());
        assert!(check_pressure(0.0).is_err());
        assert!(check_pressure(2500.0).is_err());
        assert!(check_pressure(f64::NAN).is_err());

        assert!(check_temperature(11.0).is_ok());
        assert!(check_temperature(-40.0).is_ok());
        assert!(check_temperature(-300.0).is_err());
        assert!(check_temperature(f64::NAN).is_err());

        assert!(check_horizon_refraction(0.5667).is_ok());
        assert!(check_horizon_refraction(0.0).is_ok());
        assert!(check_horizon_refraction(-0.1).is_err());
        assert!(check_horizon_refraction(6.0).is_err());
    }

    #[test]
    fn test_surface_validation() {
        assert!(check_surface(30.0, -10.0).is_ok());
        assert!(check_surface(0.0, 360.0).is_ok());
        assert_eq!(
            check_surface(400.0, 0.0),
            Err(Error::invalid_slope(400.0))
        );
        assert_eq!(
            check_surface(10.0, -361.0),
            Err(Error::invalid_surface_rotation(-361.0))
        );
    }

    #[test]
    fn test_time_correction_validation() {
        assert!(check_utc_offset(-7.0).is_ok());
        assert!(check_utc_offset(14.0).is_ok());
        assert!(check_utc_offset(18.5).is_err());
        assert!(check_utc_offset(f64::NAN).is_err());

        assert!(check_delta_t(67.0).is_ok());
        assert!(check_delta_t(-8001.0).is_err());
        assert!(check_delta_t(f64::NAN).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(1.5, "zenith"), Ok(1.5));
        assert_eq!(
            check_finite(f64::NAN, "zenith"),
            Err(Error::computation_error("zenith"))
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_utc_offset(20.0);
        assert_eq!(
            err.to_string(),
            "invalid UTC offset 20 h (must be between -18 h and +18 h)"
        );

        let err = Error::computation_error("azimuth is not finite");
        assert_eq!(err.to_string(), "computation error: azimuth is not finite");
    }
}
