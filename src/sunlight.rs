//! One-call solar calculation: position, subsolar point and the day's sun events.

use crate::error::{check_delta_t, check_finite, check_utc_offset};
use crate::math::limit_degrees_180pm;
#[cfg(feature = "chrono")]
use crate::math::round;
use crate::spa::{self, Ephemeris, HorizontalPosition, RiseTransitSet, TopocentricPosition};
use crate::time::{CivilTime, DEFAULT_DELTA_T, JulianDate};
use crate::types::{
    AtmosphericConditions, LocalHours, ObserverLocation, SunriseResult, SurfaceOrientation,
};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeDelta, TimeZone};

/// Everything a solar calculation needs: a local timestamp, its UTC offset and the observer.
///
/// Built once and passed by reference; the builder methods return modified copies.
///
/// # Example
/// ```
/// use solar_ephemeris::{AtmosphericConditions, ObserverLocation, SolarInput, time::CivilTime};
///
/// let input = SolarInput::new(
///     CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap(),
///     -7.0,
///     ObserverLocation::new(39.742476, -105.1786).unwrap(),
/// )
/// .unwrap()
/// .with_atmosphere(AtmosphericConditions::new(820.0, 11.0).unwrap());
/// assert_eq!(input.delta_t(), 67.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarInput {
    time: CivilTime,
    utc_offset_hours: f64,
    observer: ObserverLocation,
    atmosphere: AtmosphericConditions,
    surface: Option<SurfaceOrientation>,
    delta_t: f64,
}

impl SolarInput {
    /// Creates an input with standard atmosphere, no surface and the default ΔT.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the offset is outside ±18 hours or not finite.
    pub fn new(time: CivilTime, utc_offset_hours: f64, observer: ObserverLocation) -> Result<Self> {
        check_utc_offset(utc_offset_hours)?;
        Ok(Self {
            time,
            utc_offset_hours,
            observer,
            atmosphere: AtmosphericConditions::standard(),
            surface: None,
            delta_t: DEFAULT_DELTA_T,
        })
    }

    /// Creates an input from a timezone-aware chrono `DateTime`, using its current offset.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the local date is outside the supported year range.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        observer: ObserverLocation,
    ) -> Result<Self> {
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        let time = CivilTime::from_naive(&datetime.naive_local())?;
        Self::new(time, f64::from(offset_seconds) / 3600.0, observer)
    }

    /// Replaces the atmospheric conditions used for refraction.
    #[must_use]
    pub const fn with_atmosphere(self, atmosphere: AtmosphericConditions) -> Self {
        Self { atmosphere, ..self }
    }

    /// Adds a tilted surface for the incidence angle.
    #[must_use]
    pub const fn with_surface(self, surface: SurfaceOrientation) -> Self {
        Self {
            surface: Some(surface),
            ..self
        }
    }

    /// Replaces ΔT (TT - UT) in seconds.
    ///
    /// # Errors
    /// Returns `InvalidDeltaT` if ΔT is outside ±8000 seconds or not finite.
    pub fn with_delta_t(self, delta_t: f64) -> Result<Self> {
        check_delta_t(delta_t)?;
        Ok(Self { delta_t, ..self })
    }

    /// Local civil time.
    #[must_use]
    pub const fn time(&self) -> &CivilTime {
        &self.time
    }

    /// UTC offset in hours, positive east.
    #[must_use]
    pub const fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Observer location.
    #[must_use]
    pub const fn observer(&self) -> &ObserverLocation {
        &self.observer
    }

    /// Atmospheric conditions.
    #[must_use]
    pub const fn atmosphere(&self) -> &AtmosphericConditions {
        &self.atmosphere
    }

    /// Surface orientation, if any.
    #[must_use]
    pub const fn surface(&self) -> Option<&SurfaceOrientation> {
        self.surface.as_ref()
    }

    /// ΔT in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }
}

/// Result of [`calculate`].
///
/// Angles are in degrees. Sun event times are local hours at the input's UTC offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarResult {
    time: CivilTime,
    utc_offset_hours: f64,
    ephemeris: Ephemeris,
    topocentric: TopocentricPosition,
    horizontal: HorizontalPosition,
    incidence_angle: Option<f64>,
    subsolar_longitude: f64,
    equation_of_time: f64,
    rise_transit_set: RiseTransitSet,
}

impl SolarResult {
    /// Julian date of the calculation instant.
    #[must_use]
    pub const fn julian_date(&self) -> JulianDate {
        self.ephemeris.julian_date()
    }

    /// Location-independent stages (heliocentric, nutation, geocentric, sidereal time).
    #[must_use]
    pub const fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    /// Parallax-corrected coordinates.
    #[must_use]
    pub const fn topocentric(&self) -> &TopocentricPosition {
        &self.topocentric
    }

    /// Elevation, refraction and azimuth details.
    #[must_use]
    pub const fn horizontal(&self) -> &HorizontalPosition {
        &self.horizontal
    }

    /// Azimuth from north, eastward, `[0, 360)`.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.horizontal.azimuth()
    }

    /// Refraction-corrected zenith angle.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        self.horizontal.zenith_angle()
    }

    /// Refraction-corrected elevation angle.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.horizontal.elevation()
    }

    /// Zenith angle without refraction.
    #[must_use]
    pub fn geometric_zenith_angle(&self) -> f64 {
        self.horizontal.geometric_zenith_angle()
    }

    /// Geocentric right ascension α, `[0, 360)`.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.ephemeris.geocentric().right_ascension()
    }

    /// Geocentric declination δ.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.ephemeris.geocentric().declination()
    }

    /// Observer local hour angle H, `[0, 360)`.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.topocentric.hour_angle()
    }

    /// Topocentric local hour angle H′.
    #[must_use]
    pub const fn topocentric_hour_angle(&self) -> f64 {
        self.topocentric.topocentric_hour_angle()
    }

    /// Latitude of the point directly beneath the sun (topocentric declination δ′).
    #[must_use]
    pub const fn subsolar_latitude(&self) -> f64 {
        self.topocentric.declination()
    }

    /// Longitude of the point directly beneath the sun, `(-180, 180]`.
    #[must_use]
    pub const fn subsolar_longitude(&self) -> f64 {
        self.subsolar_longitude
    }

    /// Incidence angle on the input's surface, if one was given.
    #[must_use]
    pub const fn incidence_angle(&self) -> Option<f64> {
        self.incidence_angle
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Sunrise, transit and sunset in local hours.
    #[must_use]
    pub const fn sunrise_transit_sunset(&self) -> &SunriseResult<LocalHours> {
        self.rise_transit_set.times()
    }

    /// Sunrise in local hours, `None` on polar days and nights.
    #[must_use]
    pub fn sunrise(&self) -> Option<LocalHours> {
        self.rise_transit_set.times().sunrise().copied()
    }

    /// Sunset in local hours, `None` on polar days and nights.
    #[must_use]
    pub fn sunset(&self) -> Option<LocalHours> {
        self.rise_transit_set.times().sunset().copied()
    }

    /// Solar transit in local hours.
    #[must_use]
    pub const fn transit(&self) -> LocalHours {
        *self.rise_transit_set.times().transit()
    }

    /// Local hour angle at sunrise.
    #[must_use]
    pub const fn sunrise_hour_angle(&self) -> Option<f64> {
        self.rise_transit_set.sunrise_hour_angle()
    }

    /// Local hour angle at sunset.
    #[must_use]
    pub const fn sunset_hour_angle(&self) -> Option<f64> {
        self.rise_transit_set.sunset_hour_angle()
    }

    /// Sun altitude at transit.
    #[must_use]
    pub const fn transit_altitude(&self) -> f64 {
        self.rise_transit_set.transit_altitude()
    }

    /// Sunrise as a date-time at the input's UTC offset.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_time(&self) -> Option<DateTime<FixedOffset>> {
        self.sunrise().and_then(|hours| self.local_datetime(hours))
    }

    /// Sunset as a date-time at the input's UTC offset.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunset_time(&self) -> Option<DateTime<FixedOffset>> {
        self.sunset().and_then(|hours| self.local_datetime(hours))
    }

    /// Solar transit as a date-time at the input's UTC offset.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn transit_time(&self) -> Option<DateTime<FixedOffset>> {
        self.local_datetime(self.transit())
    }

    /// Local midnight of the calculation date plus `hours`, truncated to milliseconds.
    #[cfg(feature = "chrono")]
    fn local_datetime(&self, hours: LocalHours) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(round(self.utc_offset_hours * 3600.0) as i32)?;
        let midnight =
            NaiveDate::from_ymd_opt(self.time.year(), self.time.month(), self.time.day())?
                .and_hms_opt(0, 0, 0)?;
        let elapsed = TimeDelta::try_milliseconds(hours.milliseconds())?;
        let local = midnight.checked_add_signed(elapsed)?;
        offset.from_local_datetime(&local).single()
    }
}

/// Runs the full pipeline for one input.
///
/// The calculation is a pure function of `input`: calling it twice yields identical results.
///
/// # Errors
/// Returns `ComputationError` if an intermediate result is not finite.
///
/// # Example
/// ```
/// use solar_ephemeris::{calculate, ObserverLocation, SolarInput, SurfaceOrientation, time::CivilTime};
///
/// let input = SolarInput::new(
///     CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap(),
///     -7.0,
///     ObserverLocation::new(39.742476, -105.1786).unwrap(),
/// )
/// .unwrap()
/// .with_surface(SurfaceOrientation::new(30.0, -10.0).unwrap());
///
/// let result = calculate(&input).unwrap();
/// assert!((result.azimuth() - 194.34).abs() < 0.01);
/// assert!(result.incidence_angle().is_some());
/// ```
pub fn calculate(input: &SolarInput) -> Result<SolarResult> {
    let julian_date = JulianDate::from_civil(&input.time, input.utc_offset_hours, input.delta_t)?;
    let ephemeris = spa::ephemeris(julian_date);
    let topocentric = spa::topocentric_position(&ephemeris, &input.observer);
    let horizontal =
        spa::horizontal_position(&topocentric, input.observer.latitude(), &input.atmosphere);

    check_finite(horizontal.elevation(), "elevation angle")?;
    check_finite(horizontal.azimuth(), "azimuth")?;

    let incidence_angle = input
        .surface
        .map(|surface| check_finite(spa::incidence_angle(&horizontal, &surface), "incidence angle"))
        .transpose()?;

    let subsolar_longitude = limit_degrees_180pm(
        input.observer.longitude() - topocentric.topocentric_hour_angle(),
    );

    let rise_transit_set = spa::rise_transit_set(
        &input.time,
        input.utc_offset_hours,
        &input.observer,
        input.delta_t,
        input.atmosphere.horizon_refraction(),
    )?;

    log::debug!(
        "solar position at JD {}: zenith={} azimuth={} subsolar=({}, {})",
        julian_date.julian_date(),
        horizontal.zenith_angle(),
        horizontal.azimuth(),
        topocentric.declination(),
        subsolar_longitude
    );

    Ok(SolarResult {
        time: input.time,
        utc_offset_hours: input.utc_offset_hours,
        equation_of_time: ephemeris.equation_of_time(),
        ephemeris,
        topocentric,
        horizontal,
        incidence_angle,
        subsolar_longitude,
        rise_transit_set,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> SolarInput {
        SolarInput::new(
            CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap(),
            -7.0,
            ObserverLocation::new(39.742476, -105.1786)
                .unwrap()
                .with_elevation(1830.14)
                .unwrap(),
        )
        .unwrap()
        .with_atmosphere(AtmosphericConditions::new(820.0, 11.0).unwrap())
        .with_surface(SurfaceOrientation::new(30.0, -10.0).unwrap())
    }

    #[test]
    fn test_reference_result() {
        let result = calculate(&reference_input()).unwrap();
        assert!((result.julian_date().julian_date() - 2452930.312847).abs() < 1e-4);
        assert!((result.zenith_angle() - 50.11162202276585).abs() < 1e-6);
        assert!((result.azimuth() - 194.3402405098868).abs() < 1e-6);
        assert!((result.incidence_angle().unwrap() - 25.18700019913406).abs() < 1e-6);
        assert!((result.hour_angle() - 11.105902013433507).abs() < 1e-6);
        assert!((result.equation_of_time() - 14.6415107688996).abs() < 1e-6);
        assert!((result.subsolar_latitude() - -9.316178698519245).abs() < 1e-6);
        assert!((result.subsolar_longitude() - -116.28487054841766).abs() < 1e-6);
        assert!(result.sunrise_transit_sunset().is_regular_day());
    }

    #[test]
    fn test_no_surface_means_no_incidence() {
        let input = SolarInput::new(
            CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap(),
            -7.0,
            ObserverLocation::new(39.742476, -105.1786).unwrap(),
        )
        .unwrap();
        assert_eq!(input.delta_t(), DEFAULT_DELTA_T);
        assert!(calculate(&input).unwrap().incidence_angle().is_none());
    }

    #[test]
    fn test_repeated_calculation_is_identical() {
        let input = reference_input();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.azimuth().to_bits(), second.azimuth().to_bits());
    }

    #[test]
    fn test_delta_t_is_injectable() {
        let with_default = calculate(&reference_input()).unwrap();
        let shifted = calculate(&reference_input().with_delta_t(0.0).unwrap()).unwrap();
        assert_ne!(with_default.azimuth(), shifted.azimuth());
        assert!((with_default.azimuth() - shifted.azimuth()).abs() < 0.01);
        assert!(reference_input().with_delta_t(f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let time = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
        let observer = ObserverLocation::new(0.0, 0.0).unwrap();
        assert!(SolarInput::new(time, 18.5, observer).is_err());
        assert!(SolarInput::new(time, f64::NAN, observer).is_err());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_sun_events() {
        use chrono::Timelike;

        let result = calculate(&reference_input()).unwrap();
        let sunrise = result.sunrise_time().unwrap();
        assert_eq!(sunrise.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(
            (sunrise.hour(), sunrise.minute(), sunrise.second()),
            (6, 12, 43)
        );
        let sunset = result.sunset_time().unwrap();
        assert_eq!((sunset.hour(), sunset.minute(), sunset.second()), (17, 20, 19));
        let transit = result.transit_time().unwrap();
        assert_eq!((transit.hour(), transit.minute()), (11, 46));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_from_datetime_uses_local_offset() {
        let datetime = "2003-10-17T12:30:30-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let observer = ObserverLocation::new(39.742476, -105.1786).unwrap();
        let input = SolarInput::from_datetime(&datetime, observer).unwrap();
        assert_eq!(input.utc_offset_hours(), -7.0);
        assert_eq!(input.time().hour(), 12);
    }
}
