//! Input records and shared value types for the ephemeris engine.

use crate::error::{
    check_coordinates, check_elevation, check_horizon_refraction, check_pressure, check_surface,
    check_temperature,
};
use crate::Result;
use crate::math::floor;

/// Geodetic position of the observer.
///
/// # Example
/// ```
/// # use solar_ephemeris::ObserverLocation;
/// let golden = ObserverLocation::new(39.742476, -105.1786)
///     .unwrap()
///     .with_elevation(1830.14)
///     .unwrap();
/// assert_eq!(golden.elevation(), 1830.14);
/// assert!(ObserverLocation::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl ObserverLocation {
    /// Creates a sea-level observer location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for missing (NaN) or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            elevation: 0.0,
        })
    }

    /// Sets the elevation above the reference ellipsoid in meters.
    ///
    /// # Errors
    /// Returns `InvalidElevation` for non-finite values or values below -6 500 000 m.
    pub fn with_elevation(self, elevation: f64) -> Result<Self> {
        check_elevation(elevation)?;
        Ok(Self { elevation, ..self })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// Local atmosphere used by the refraction correction.
///
/// Atmospheric refraction lifts the apparent sun by up to ~0.6° near the horizon.
/// `horizon_refraction` is the refraction allowance at sunrise and sunset; together
/// with the sun's apparent radius it sets both the sunrise/sunset altitude and the
/// altitude below which no refraction correction is applied.
///
/// # Example
/// ```
/// # use solar_ephemeris::AtmosphericConditions;
/// let standard = AtmosphericConditions::standard();
/// assert_eq!(standard.pressure(), 1013.25);
/// assert_eq!(standard.temperature(), 15.0);
/// assert_eq!(standard.horizon_refraction(), 0.5667);
///
/// let mountain = AtmosphericConditions::new(820.0, 11.0).unwrap();
/// assert_eq!(mountain.pressure(), 820.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    /// Atmospheric pressure in millibars (hPa)
    pressure: f64,
    /// Temperature in degrees Celsius
    temperature: f64,
    /// Refraction at the horizon in degrees
    horizon_refraction: f64,
}

impl AtmosphericConditions {
    /// Standard refraction allowance at the horizon, in degrees.
    pub const STANDARD_HORIZON_REFRACTION: f64 = 0.5667;

    /// Creates atmospheric conditions with the standard horizon refraction.
    ///
    /// # Errors
    /// Returns `InvalidPressure` or `InvalidTemperature` for out-of-range values.
    pub fn new(pressure: f64, temperature: f64) -> Result<Self> {
        check_pressure(pressure)?;
        check_temperature(temperature)?;
        Ok(Self {
            pressure,
            temperature,
            horizon_refraction: Self::STANDARD_HORIZON_REFRACTION,
        })
    }

    /// Standard sea-level atmosphere: 1013.25 mbar and 15°C.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            pressure: 1013.25,
            temperature: 15.0,
            horizon_refraction: Self::STANDARD_HORIZON_REFRACTION,
        }
    }

    /// Overrides the refraction allowance at the horizon.
    ///
    /// # Errors
    /// Returns `InvalidHorizonRefraction` for values outside 0..=2 degrees.
    pub fn with_horizon_refraction(self, horizon_refraction: f64) -> Result<Self> {
        check_horizon_refraction(horizon_refraction)?;
        Ok(Self {
            horizon_refraction,
            ..self
        })
    }

    /// Gets the atmospheric pressure in millibars.
    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Gets the temperature in degrees Celsius.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Gets the refraction allowance at the horizon in degrees.
    #[must_use]
    pub const fn horizon_refraction(&self) -> f64 {
        self.horizon_refraction
    }
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Orientation of a tilted surface, used only for the incidence angle.
///
/// Slope is measured from the horizontal; the azimuth rotation is measured from
/// south, positive towards west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOrientation {
    slope: f64,
    azimuth_rotation: f64,
}

impl SurfaceOrientation {
    /// Creates a surface orientation.
    ///
    /// # Errors
    /// Returns `InvalidSlope` or `InvalidSurfaceRotation` for values outside -360..=360 degrees.
    pub fn new(slope: f64, azimuth_rotation: f64) -> Result<Self> {
        check_surface(slope, azimuth_rotation)?;
        Ok(Self {
            slope,
            azimuth_rotation,
        })
    }

    /// Slope in degrees from horizontal.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// Azimuth rotation in degrees from south.
    #[must_use]
    pub const fn azimuth_rotation(&self) -> f64 {
        self.azimuth_rotation
    }
}

/// Hours since local midnight of the calculation date, in `[0, 24)`.
///
/// Used for sunrise, transit and sunset without the chrono dependency.
///
/// # Example
/// ```
/// # use solar_ephemeris::LocalHours;
/// let sunrise = LocalHours::from_hours(6.212066609);
/// let (h, m, s) = sunrise.hour_minute_second();
/// assert_eq!((h, m), (6, 12));
/// assert!((s - 43.44).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Creates a new `LocalHours` value.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits the value into whole hours, whole minutes and seconds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn hour_minute_second(&self) -> (u32, u32, f64) {
        let hours = floor(self.0);
        let minutes = floor((self.0 - hours) * 60.0);
        let seconds = (self.0 - hours) * 3600.0 - minutes * 60.0;
        (hours as u32, minutes as u32, seconds)
    }

    /// Milliseconds since midnight, truncated.
    #[must_use]
    pub fn milliseconds(&self) -> i64 {
        (self.0 * 3_600_000.0) as i64
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// At high latitudes the sun may stay above or below the sunrise altitude all day;
/// those days carry only the transit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the sunrise altitude all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the sunrise altitude all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Maps every contained time through `f`, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit),
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit),
            },
        }
    }
}
