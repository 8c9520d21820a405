//! SPA algorithm implementation.
//!
//! High-accuracy solar positioning based on the NREL algorithm by Reda & Andreas (2003).
//! Accuracy: ±0.0003° for years -2000 to 6000.
//!
//! The pipeline is split into pure stages, each returning an immutable value:
//!
//! 1. [`heliocentric_position`]: Earth's L, B and R from the periodic term series
//! 2. [`nutation`] and [`true_obliquity`]: Δψ, Δε and ε
//! 3. [`ephemeris`]: geocentric α and δ plus apparent sidereal time, for one instant
//! 4. [`topocentric_position`]: parallax-corrected α′, δ′ and the hour angles
//! 5. [`horizontal_position`]: zenith and azimuth with refraction
//! 6. [`rise_transit_set`]: sunrise, transit and sunset for a local calendar day
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, limit_degrees, limit_minutes, mul_add, polynomial,
    radians_to_degrees, sin, tan,
};
use crate::time::JulianDate;

pub(crate) mod coefficients;
mod heliocentric;
mod nutation;
mod sunrise;
mod topocentric;

pub use heliocentric::{HeliocentricPosition, heliocentric_position};
pub use nutation::{Nutation, delaunay_arguments, mean_obliquity, nutation, true_obliquity};
pub use sunrise::{RiseTransitSet, rise_transit_set};
pub use topocentric::{
    HorizontalPosition, TopocentricPosition, horizontal_position, incidence_angle,
    refraction_correction, topocentric_position,
};

/// Aberration constant in arcseconds.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Sun's mean longitude in degrees as a polynomial in JME.
const SUN_MEAN_LONGITUDE_COEFFS: &[f64] = &[
    280.4664567,
    360007.6982779,
    0.03032028,
    1.0 / 49931.0,
    -1.0 / 15300.0,
    -1.0 / 2000000.0,
];

/// Apparent geocentric coordinates of the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    longitude: f64,
    latitude: f64,
    aberration: f64,
    apparent_longitude: f64,
    right_ascension: f64,
    declination: f64,
}

impl GeocentricPosition {
    /// Geocentric longitude Θ in degrees, `[0, 360)`.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Geocentric latitude β in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Aberration correction Δτ in degrees.
    #[must_use]
    pub const fn aberration(&self) -> f64 {
        self.aberration
    }

    /// Apparent sun longitude λ in degrees.
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Geocentric right ascension α in degrees, `[0, 360)`.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Geocentric declination δ in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Location-independent part of the solar position for one instant (SPA steps 1-11).
///
/// Computing this once and reusing it across observers avoids re-evaluating the
/// periodic series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    julian_date: JulianDate,
    heliocentric: HeliocentricPosition,
    nutation: Nutation,
    true_obliquity: f64,
    geocentric: GeocentricPosition,
    sidereal_time: f64,
}

impl Ephemeris {
    /// The instant this ephemeris was evaluated for.
    #[must_use]
    pub const fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    /// Earth heliocentric L, B and R.
    #[must_use]
    pub const fn heliocentric(&self) -> &HeliocentricPosition {
        &self.heliocentric
    }

    /// Nutation Δψ and Δε.
    #[must_use]
    pub const fn nutation(&self) -> &Nutation {
        &self.nutation
    }

    /// True obliquity of the ecliptic ε in degrees.
    #[must_use]
    pub const fn true_obliquity(&self) -> f64 {
        self.true_obliquity
    }

    /// Apparent geocentric coordinates.
    #[must_use]
    pub const fn geocentric(&self) -> &GeocentricPosition {
        &self.geocentric
    }

    /// Apparent sidereal time at Greenwich ν in degrees.
    #[must_use]
    pub const fn sidereal_time(&self) -> f64 {
        self.sidereal_time
    }

    /// Equation of time in minutes, folded into `[-20, 20]`.
    ///
    /// Positive values mean the true sun is ahead of the mean sun.
    #[must_use]
    pub fn equation_of_time(&self) -> f64 {
        let mean_longitude = limit_degrees(polynomial(
            SUN_MEAN_LONGITUDE_COEFFS,
            self.julian_date.julian_ephemeris_millennium(),
        ));
        limit_minutes(
            4.0 * (mean_longitude - 0.0057183 - self.geocentric.right_ascension
                + self.nutation.longitude() * cos(degrees_to_radians(self.true_obliquity))),
        )
    }
}

/// Runs the location-independent stages for one instant.
///
/// # Example
/// ```
/// use solar_ephemeris::{spa, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
/// let ephemeris = spa::ephemeris(jd);
/// assert!((ephemeris.heliocentric().longitude() - 24.0182616917).abs() < 1e-6);
/// assert!((ephemeris.true_obliquity() - 23.440464517).abs() < 1e-6);
/// ```
#[must_use]
pub fn ephemeris(julian_date: JulianDate) -> Ephemeris {
    let jme = julian_date.julian_ephemeris_millennium();
    let jce = julian_date.julian_ephemeris_century();

    let heliocentric = heliocentric_position(jme);
    let nutation = nutation(jce);
    let true_obliquity = true_obliquity(jme, &nutation);
    let geocentric = geocentric_position(&heliocentric, &nutation, true_obliquity);
    let sidereal_time = apparent_sidereal_time(&julian_date, &nutation, true_obliquity);

    log::trace!(
        "ephemeris at JD {}: L={} B={} R={} dpsi={} deps={} eps={} alpha={} delta={} nu={}",
        julian_date.julian_date(),
        heliocentric.longitude(),
        heliocentric.latitude(),
        heliocentric.radius(),
        nutation.longitude(),
        nutation.obliquity(),
        true_obliquity,
        geocentric.right_ascension,
        geocentric.declination,
        sidereal_time
    );

    Ephemeris {
        julian_date,
        heliocentric,
        nutation,
        true_obliquity,
        geocentric,
        sidereal_time,
    }
}

/// Converts heliocentric coordinates into apparent geocentric α and δ (SPA steps 3.2.5-3.8).
#[must_use]
pub fn geocentric_position(
    heliocentric: &HeliocentricPosition,
    nutation: &Nutation,
    true_obliquity: f64,
) -> GeocentricPosition {
    let longitude = limit_degrees(heliocentric.longitude() + 180.0);
    let latitude = -heliocentric.latitude();
    let aberration = ABERRATION_CONSTANT / (SECONDS_PER_HOUR * heliocentric.radius());
    let apparent_longitude = longitude + nutation.longitude() + aberration;

    let lambda = degrees_to_radians(apparent_longitude);
    let epsilon = degrees_to_radians(true_obliquity);
    let beta = degrees_to_radians(latitude);

    let right_ascension = limit_degrees(radians_to_degrees(atan2(
        mul_add(sin(lambda), cos(epsilon), -(tan(beta) * sin(epsilon))),
        cos(lambda),
    )));
    let declination = radians_to_degrees(asin(mul_add(
        sin(beta),
        cos(epsilon),
        cos(beta) * sin(epsilon) * sin(lambda),
    )));

    GeocentricPosition {
        longitude,
        latitude,
        aberration,
        apparent_longitude,
        right_ascension,
        declination,
    }
}

/// Apparent sidereal time at Greenwich ν in degrees (SPA step 3.7).
#[must_use]
pub fn apparent_sidereal_time(
    julian_date: &JulianDate,
    nutation: &Nutation,
    true_obliquity: f64,
) -> f64 {
    let jc = julian_date.julian_century();
    let mean = limit_degrees(mul_add(
        jc * jc,
        0.000387933 - jc / 38710000.0,
        mul_add(
            360.98564736629,
            julian_date.julian_date() - 2451545.0,
            280.46061837,
        ),
    ));

    mul_add(
        nutation.longitude(),
        cos(degrees_to_radians(true_obliquity)),
        mean,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_ephemeris() -> Ephemeris {
        let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
        ephemeris(jd)
    }

    #[test]
    fn test_reference_geocentric_position() {
        let eph = reference_ephemeris();
        let geo = eph.geocentric();
        assert!((geo.longitude() - 204.0182616917).abs() < 1e-6);
        assert!((geo.latitude() - 1.011219e-4).abs() < 1e-8);
        assert!((geo.aberration() - -0.005711359293251811).abs() < 1e-12);
        assert!((geo.apparent_longitude() - 204.00855192808282).abs() < 1e-6);
        assert!((geo.right_ascension() - 202.22740782768707).abs() < 1e-6);
        assert!((geo.declination() - -9.314340089653475).abs() < 1e-6);
    }

    #[test]
    fn test_reference_sidereal_time() {
        let eph = reference_ephemeris();
        assert!((eph.sidereal_time() - 318.5119098411206).abs() < 1e-6);
    }

    #[test]
    fn test_reference_equation_of_time() {
        let eph = reference_ephemeris();
        assert!((eph.equation_of_time() - 14.6415107688996).abs() < 1e-6);
    }

    #[test]
    fn test_right_ascension_range_over_year() {
        let start = JulianDate::from_utc(2024, 1, 1, 0, 0, 0.0, 69.0).unwrap();
        for day in 0..366 {
            let eph = ephemeris(start.add_days(f64::from(day)));
            let alpha = eph.geocentric().right_ascension();
            assert!((0.0..360.0).contains(&alpha), "alpha = {alpha} on day {day}");
            let delta = eph.geocentric().declination();
            assert!(delta.abs() < 23.5, "delta = {delta} on day {day}");
            let eot = eph.equation_of_time();
            assert!(eot.abs() < 17.0, "eot = {eot} on day {day}");
        }
    }
}
