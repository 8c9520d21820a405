//! Observer-dependent stages: parallax correction, horizontal coordinates and
//! surface incidence.

use super::Ephemeris;
use crate::math::{
    acos, asin, atan, atan2, cos, degrees_to_radians, limit_degrees, mul_add,
    radians_to_degrees, sin, tan,
};
use crate::types::{AtmosphericConditions, ObserverLocation, SurfaceOrientation};

/// Apparent solar disc radius in degrees.
pub(crate) const SUN_RADIUS: f64 = 0.26667;

/// Equatorial horizontal parallax of the sun at 1 AU, in arcseconds.
const SUN_PARALLAX: f64 = 8.794;

/// Earth's polar to equatorial radius ratio.
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Earth's equatorial radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_378_140.0;

/// Sun coordinates as seen from an observer on the surface (SPA steps 3.9-3.11).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricPosition {
    hour_angle: f64,
    parallax_in_right_ascension: f64,
    right_ascension: f64,
    declination: f64,
    topocentric_hour_angle: f64,
}

impl TopocentricPosition {
    /// Observer local hour angle H in degrees, `[0, 360)`.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Parallax in right ascension Δα in degrees.
    #[must_use]
    pub const fn parallax_in_right_ascension(&self) -> f64 {
        self.parallax_in_right_ascension
    }

    /// Topocentric right ascension α′ in degrees, `[0, 360)`.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Topocentric declination δ′ in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Topocentric local hour angle H′ = H - Δα in degrees.
    #[must_use]
    pub const fn topocentric_hour_angle(&self) -> f64 {
        self.topocentric_hour_angle
    }
}

/// Applies the parallax correction for an observer's position and elevation.
///
/// # Example
/// ```
/// use solar_ephemeris::{spa, time::JulianDate, ObserverLocation};
///
/// let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
/// let observer = ObserverLocation::new(39.742476, -105.1786)
///     .unwrap()
///     .with_elevation(1830.14)
///     .unwrap();
/// let topo = spa::topocentric_position(&spa::ephemeris(jd), &observer);
/// assert!((topo.topocentric_hour_angle() - 11.10627).abs() < 1e-4);
/// ```
#[must_use]
pub fn topocentric_position(
    ephemeris: &Ephemeris,
    observer: &ObserverLocation,
) -> TopocentricPosition {
    let alpha = ephemeris.geocentric().right_ascension();
    let delta = ephemeris.geocentric().declination();
    let hour_angle = limit_degrees(ephemeris.sidereal_time() + observer.longitude() - alpha);

    let xi = degrees_to_radians(SUN_PARALLAX / (3600.0 * ephemeris.heliocentric().radius()));
    let lat = degrees_to_radians(observer.latitude());
    let h = degrees_to_radians(hour_angle);
    let delta_rad = degrees_to_radians(delta);

    let u = atan(EARTH_FLATTENING_FACTOR * tan(lat));
    let elevation_ratio = observer.elevation() / EARTH_RADIUS_METERS;
    let y = mul_add(EARTH_FLATTENING_FACTOR, sin(u), elevation_ratio * sin(lat));
    let x = mul_add(elevation_ratio, cos(lat), cos(u));

    let denominator = cos(delta_rad) - x * sin(xi) * cos(h);
    let delta_alpha = atan2(-x * sin(xi) * sin(h), denominator);
    let declination = radians_to_degrees(atan2(
        (sin(delta_rad) - y * sin(xi)) * cos(delta_alpha),
        denominator,
    ));
    let parallax_in_right_ascension = radians_to_degrees(delta_alpha);

    TopocentricPosition {
        hour_angle,
        parallax_in_right_ascension,
        right_ascension: limit_degrees(alpha + parallax_in_right_ascension),
        declination,
        topocentric_hour_angle: hour_angle - parallax_in_right_ascension,
    }
}

/// Elevation, zenith and azimuth of the sun for an observer (SPA steps 3.12-3.15).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    geometric_elevation: f64,
    refraction: f64,
    elevation: f64,
    astronomers_azimuth: f64,
    azimuth: f64,
}

impl HorizontalPosition {
    /// Elevation e0 without refraction, in degrees.
    #[must_use]
    pub const fn geometric_elevation(&self) -> f64 {
        self.geometric_elevation
    }

    /// Atmospheric refraction correction Δe in degrees. Zero below the cutoff.
    #[must_use]
    pub const fn refraction(&self) -> f64 {
        self.refraction
    }

    /// Refracted elevation e = e0 + Δe in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Refracted zenith angle 90° - e.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Zenith angle without refraction, 90° - e0.
    #[must_use]
    pub fn geometric_zenith_angle(&self) -> f64 {
        90.0 - self.geometric_elevation
    }

    /// Azimuth Γ measured westward from south, in degrees `(-180, 180]`.
    #[must_use]
    pub const fn astronomers_azimuth(&self) -> f64 {
        self.astronomers_azimuth
    }

    /// Azimuth Φ measured eastward from north, in degrees `[0, 360)`.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }
}

/// Converts topocentric coordinates to elevation and azimuth, applying refraction.
#[must_use]
pub fn horizontal_position(
    topocentric: &TopocentricPosition,
    latitude: f64,
    atmosphere: &AtmosphericConditions,
) -> HorizontalPosition {
    let lat = degrees_to_radians(latitude);
    let delta_prime = degrees_to_radians(topocentric.declination());
    let h_prime = degrees_to_radians(topocentric.topocentric_hour_angle());

    let geometric_elevation = radians_to_degrees(asin(mul_add(
        sin(lat),
        sin(delta_prime),
        cos(lat) * cos(delta_prime) * cos(h_prime),
    )));
    let refraction = refraction_correction(geometric_elevation, atmosphere);

    let astronomers_azimuth = radians_to_degrees(atan2(
        sin(h_prime),
        mul_add(cos(h_prime), sin(lat), -(tan(delta_prime) * cos(lat))),
    ));

    HorizontalPosition {
        geometric_elevation,
        refraction,
        elevation: geometric_elevation + refraction,
        astronomers_azimuth,
        azimuth: limit_degrees(astronomers_azimuth + 180.0),
    }
}

/// Atmospheric refraction Δe in degrees for a geometric elevation `e0`.
///
/// Returns zero once the sun's upper limb is below the horizon refraction cutoff,
/// `e0 < -(0.26667 + horizon_refraction)`.
#[must_use]
pub fn refraction_correction(geometric_elevation: f64, atmosphere: &AtmosphericConditions) -> f64 {
    if geometric_elevation < -(SUN_RADIUS + atmosphere.horizon_refraction()) {
        return 0.0;
    }

    let e0 = geometric_elevation;
    (atmosphere.pressure() / 1010.0) * (283.0 / (273.0 + atmosphere.temperature())) * 1.02
        / (60.0 * tan(degrees_to_radians(e0 + 10.3 / (e0 + 5.11))))
}

/// Angle between the sun and the normal of a tilted surface, in degrees `[0, 180]`.
///
/// Uses the refracted zenith angle.
#[must_use]
pub fn incidence_angle(horizontal: &HorizontalPosition, surface: &SurfaceOrientation) -> f64 {
    let zenith = degrees_to_radians(horizontal.zenith_angle());
    let slope = degrees_to_radians(surface.slope());
    let relative_azimuth =
        degrees_to_radians(horizontal.astronomers_azimuth() - surface.azimuth_rotation());

    let cosine = mul_add(
        cos(zenith),
        cos(slope),
        sin(slope) * sin(zenith) * cos(relative_azimuth),
    );
    radians_to_degrees(acos(cosine.clamp(-1.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spa::ephemeris;
    use crate::time::JulianDate;

    fn reference_observer() -> ObserverLocation {
        ObserverLocation::new(39.742476, -105.1786)
            .unwrap()
            .with_elevation(1830.14)
            .unwrap()
    }

    fn reference_topocentric() -> TopocentricPosition {
        let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
        topocentric_position(&ephemeris(jd), &reference_observer())
    }

    fn reference_atmosphere() -> AtmosphericConditions {
        AtmosphericConditions::new(820.0, 11.0).unwrap()
    }

    #[test]
    fn test_reference_topocentric_position() {
        let topo = reference_topocentric();
        assert!((topo.hour_angle() - 11.105902013433507).abs() < 1e-6);
        assert!((topo.parallax_in_right_ascension() - -0.0003685349841508364).abs() < 1e-9);
        assert!((topo.right_ascension() - 202.22703929270293).abs() < 1e-6);
        assert!((topo.declination() - -9.316178698519245).abs() < 1e-6);
        assert!((topo.topocentric_hour_angle() - 11.106270548417658).abs() < 1e-6);
    }

    #[test]
    fn test_reference_horizontal_position() {
        let horizontal =
            horizontal_position(&reference_topocentric(), 39.742476, &reference_atmosphere());
        assert!((horizontal.geometric_elevation() - 39.872045905111776).abs() < 1e-6);
        assert!((horizontal.refraction() - 0.01633207212237155).abs() < 1e-8);
        assert!((horizontal.elevation() - 39.88837797723415).abs() < 1e-6);
        assert!((horizontal.zenith_angle() - 50.11162202276585).abs() < 1e-6);
        assert!((horizontal.astronomers_azimuth() - 14.340240509886785).abs() < 1e-6);
        assert!((horizontal.azimuth() - 194.3402405098868).abs() < 1e-6);
    }

    #[test]
    fn test_reference_incidence_angle() {
        let horizontal =
            horizontal_position(&reference_topocentric(), 39.742476, &reference_atmosphere());
        let surface = SurfaceOrientation::new(30.0, -10.0).unwrap();
        assert!((incidence_angle(&horizontal, &surface) - 25.18700019913406).abs() < 1e-6);
    }

    #[test]
    fn test_flat_surface_incidence_equals_zenith() {
        let horizontal =
            horizontal_position(&reference_topocentric(), 39.742476, &reference_atmosphere());
        let flat = SurfaceOrientation::new(0.0, 0.0).unwrap();
        assert!((incidence_angle(&horizontal, &flat) - horizontal.zenith_angle()).abs() < 1e-9);
    }

    #[test]
    fn test_refraction_cutoff() {
        let atmosphere = AtmosphericConditions::standard();
        let cutoff = -(SUN_RADIUS + atmosphere.horizon_refraction());

        assert_eq!(refraction_correction(cutoff - 1e-6, &atmosphere), 0.0);
        assert_eq!(refraction_correction(-10.0, &atmosphere), 0.0);
        assert!(refraction_correction(cutoff, &atmosphere) > 0.5);
        assert!(refraction_correction(0.0, &atmosphere) > 0.4);
        assert!(refraction_correction(89.0, &atmosphere) < 0.001);
    }

    #[test]
    fn test_refraction_scales_with_pressure() {
        let low = AtmosphericConditions::new(500.0, 15.0).unwrap();
        let high = AtmosphericConditions::new(1000.0, 15.0).unwrap();
        let ratio = refraction_correction(10.0, &high) / refraction_correction(10.0, &low);
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sea_level_observer_has_smaller_parallax_offset() {
        let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
        let eph = ephemeris(jd);
        let sea_level = ObserverLocation::new(39.742476, -105.1786).unwrap();
        let topo_sea = topocentric_position(&eph, &sea_level);
        let topo_high = topocentric_position(&eph, &reference_observer());
        assert!(
            topo_sea.parallax_in_right_ascension().abs()
                < topo_high.parallax_in_right_ascension().abs()
        );
        // parallax never exceeds the equatorial horizontal parallax
        assert!((topo_sea.declination() - eph.geocentric().declination()).abs() < 0.0025);
    }
}
