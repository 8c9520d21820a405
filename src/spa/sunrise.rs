//! Sunrise, solar transit and sunset for a local calendar day (SPA appendix A.2).

use super::topocentric::SUN_RADIUS;
use super::{Ephemeris, ephemeris};
use crate::error::{check_delta_t, check_horizon_refraction, check_utc_offset};
use crate::math::{
    acos, asin, cos, degrees_to_radians, limit_degrees_180pm, limit_zero_to_one, mul_add,
    radians_to_degrees, sin,
};
use crate::time::{CivilTime, JulianDate};
use crate::types::{LocalHours, ObserverLocation, SunriseResult};
use crate::Result;

/// Sidereal degrees per solar day fraction used by the interpolation.
const SIDEREAL_RATE: f64 = 360.985647;

const SECONDS_PER_DAY: f64 = 86_400.0;

const TRANSIT: usize = 0;
const RISE: usize = 1;
const SET: usize = 2;

/// Rise, transit and set times together with the hour angles they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RiseTransitSet {
    times: SunriseResult<LocalHours>,
    sunrise_hour_angle: Option<f64>,
    sunset_hour_angle: Option<f64>,
    transit_altitude: f64,
}

impl RiseTransitSet {
    /// Sunrise, transit and sunset in local hours, or the polar case.
    #[must_use]
    pub const fn times(&self) -> &SunriseResult<LocalHours> {
        &self.times
    }

    /// Local hour angle at sunrise in degrees, `(-180, 180]`. `None` on polar days and nights.
    #[must_use]
    pub const fn sunrise_hour_angle(&self) -> Option<f64> {
        self.sunrise_hour_angle
    }

    /// Local hour angle at sunset in degrees, `(-180, 180]`. `None` on polar days and nights.
    #[must_use]
    pub const fn sunset_hour_angle(&self) -> Option<f64> {
        self.sunset_hour_angle
    }

    /// Sun altitude at transit in degrees.
    #[must_use]
    pub const fn transit_altitude(&self) -> f64 {
        self.transit_altitude
    }
}

/// Computes sunrise, transit and sunset for the local calendar day of `date`.
///
/// Only the date part of `date` is used. Times are returned in local hours for the
/// given UTC offset. Sunrise and sunset refer to the moment the upper limb of the sun
/// touches the horizon, at altitude `-(0.26667 + horizon_refraction)`.
///
/// # Errors
/// Returns an error for an invalid UTC offset, ΔT or horizon refraction.
///
/// # Example
/// ```
/// use solar_ephemeris::{spa, time::CivilTime, ObserverLocation};
///
/// let date = CivilTime::new(2003, 10, 17, 0, 0, 0.0).unwrap();
/// let golden = ObserverLocation::new(39.742476, -105.1786).unwrap();
/// let rts = spa::rise_transit_set(&date, -7.0, &golden, 67.0, 0.5667).unwrap();
/// let sunrise = rts.times().sunrise().unwrap();
/// assert_eq!(sunrise.hour_minute_second().0, 6);
/// ```
pub fn rise_transit_set(
    date: &CivilTime,
    utc_offset_hours: f64,
    observer: &ObserverLocation,
    delta_t: f64,
    horizon_refraction: f64,
) -> Result<RiseTransitSet> {
    check_utc_offset(utc_offset_hours)?;
    check_delta_t(delta_t)?;
    check_horizon_refraction(horizon_refraction)?;

    let midnight_ut = JulianDate::from_civil(&date.at_midnight(), 0.0, delta_t)?;
    let nu = ephemeris(midnight_ut).sidereal_time();

    // day-1, day and day+1 at 0h UT with ΔT = 0
    let day_zero = midnight_ut.with_delta_t(0.0);
    let days: [Ephemeris; 3] = [-1.0, 0.0, 1.0].map(|offset| ephemeris(day_zero.add_days(offset)));
    let alpha = days.map(|eph| eph.geocentric().right_ascension());
    let delta = days.map(|eph| eph.geocentric().declination());

    let latitude = observer.latitude();
    let longitude = observer.longitude();
    let h0_prime = -(SUN_RADIUS + horizon_refraction);

    let approx_transit = (alpha[1] - longitude - nu) / 360.0;

    let lat = degrees_to_radians(latitude);
    let delta_zero = degrees_to_radians(delta[1]);
    let argument = (sin(degrees_to_radians(h0_prime)) - sin(lat) * sin(delta_zero))
        / (cos(lat) * cos(delta_zero));

    let interpolate_at = |m: f64| {
        let nu_m = mul_add(SIDEREAL_RATE, m, nu);
        let n = m + delta_t / SECONDS_PER_DAY;
        let alpha_prime = interpolate(&alpha, n);
        let delta_prime = interpolate(&delta, n);
        let h_prime = limit_degrees_180pm(nu_m + longitude - alpha_prime);
        let delta_rad = degrees_to_radians(delta_prime);
        let h_rad = degrees_to_radians(h_prime);
        let altitude = radians_to_degrees(asin(
            sin(lat) * sin(delta_rad) + cos(lat) * cos(delta_rad) * cos(h_rad),
        ));
        SunSample {
            m,
            delta_prime,
            h_prime,
            altitude,
        }
    };
    let to_local = |day_fraction: f64| {
        LocalHours::from_hours(24.0 * limit_zero_to_one(day_fraction + utc_offset_hours / 24.0))
    };

    if argument.abs() > 1.0 {
        let transit = interpolate_at(limit_zero_to_one(approx_transit));
        let transit_time = to_local(transit.m - transit.h_prime / 360.0);
        let times = if argument < -1.0 {
            log::debug!(
                "sun stays above {h0_prime}° on {}-{:02}-{:02} at latitude {latitude}",
                date.year(),
                date.month(),
                date.day()
            );
            SunriseResult::AllDay {
                transit: transit_time,
            }
        } else {
            log::debug!(
                "sun stays below {h0_prime}° on {}-{:02}-{:02} at latitude {latitude}",
                date.year(),
                date.month(),
                date.day()
            );
            SunriseResult::AllNight {
                transit: transit_time,
            }
        };
        return Ok(RiseTransitSet {
            times,
            sunrise_hour_angle: None,
            sunset_hour_angle: None,
            transit_altitude: transit.altitude,
        });
    }

    let h0 = radians_to_degrees(acos(argument)) / 360.0;
    let mut m = [0.0; 3];
    m[TRANSIT] = limit_zero_to_one(approx_transit);
    m[RISE] = limit_zero_to_one(approx_transit - h0);
    m[SET] = limit_zero_to_one(approx_transit + h0);
    let samples = m.map(&interpolate_at);

    let rise_or_set = |sample: &SunSample| {
        sample.m
            + (sample.altitude - h0_prime)
                / (360.0
                    * cos(degrees_to_radians(sample.delta_prime))
                    * cos(lat)
                    * sin(degrees_to_radians(sample.h_prime)))
    };

    let transit = &samples[TRANSIT];
    let times = SunriseResult::RegularDay {
        sunrise: to_local(rise_or_set(&samples[RISE])),
        transit: to_local(transit.m - transit.h_prime / 360.0),
        sunset: to_local(rise_or_set(&samples[SET])),
    };

    Ok(RiseTransitSet {
        times,
        sunrise_hour_angle: Some(samples[RISE].h_prime),
        sunset_hour_angle: Some(samples[SET].h_prime),
        transit_altitude: transit.altitude,
    })
}

/// Interpolated sun coordinates at one of the three event estimates.
struct SunSample {
    m: f64,
    delta_prime: f64,
    h_prime: f64,
    altitude: f64,
}

/// Three-point interpolation of a daily value at day fraction `n`.
///
/// Differences of two or more are folded back into `[0, 1)` so right ascension
/// crossing 360° does not produce a jump.
fn interpolate(values: &[f64; 3], n: f64) -> f64 {
    let mut a = values[1] - values[0];
    let mut b = values[2] - values[1];
    if a.abs() >= 2.0 {
        a = limit_zero_to_one(a);
    }
    if b.abs() >= 2.0 {
        b = limit_zero_to_one(b);
    }
    values[1] + n * (a + b + (b - a) * n) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AtmosphericConditions;

    const REFRACTION: f64 = AtmosphericConditions::STANDARD_HORIZON_REFRACTION;

    fn golden() -> ObserverLocation {
        ObserverLocation::new(39.742476, -105.1786).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> CivilTime {
        CivilTime::new(year, month, day, 0, 0, 0.0).unwrap()
    }

    #[test]
    fn test_reference_rise_transit_set() {
        let rts = rise_transit_set(&date(2003, 10, 17), -7.0, &golden(), 67.0, REFRACTION).unwrap();

        let times = rts.times();
        assert!(times.is_regular_day());
        assert!((times.sunrise().unwrap().hours() - 6.212066609248799).abs() < 1e-6);
        assert!((times.transit().hours() - 11.7680450294649).abs() < 1e-6);
        assert!((times.sunset().unwrap().hours() - 17.338666514538687).abs() < 1e-6);

        assert!((rts.sunrise_hour_angle().unwrap() - -83.49633824344124).abs() < 1e-6);
        assert!((rts.sunset_hour_angle().unwrap() - 83.52427410946306).abs() < 1e-6);
        assert!((rts.transit_altitude() - 40.95440682568512).abs() < 1e-6);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let morning = rise_transit_set(&date(2003, 10, 17), -7.0, &golden(), 67.0, REFRACTION);
        let evening = CivilTime::new(2003, 10, 17, 22, 15, 3.5).unwrap();
        let evening = rise_transit_set(&evening, -7.0, &golden(), 67.0, REFRACTION);
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_arctic_summer_is_polar_day() {
        let arctic = ObserverLocation::new(85.0, 0.0).unwrap();
        let rts = rise_transit_set(&date(2003, 6, 21), 0.0, &arctic, 67.0, REFRACTION).unwrap();
        assert!(rts.times().is_polar_day());
        assert!(rts.sunrise_hour_angle().is_none());
        assert!(rts.sunset_hour_angle().is_none());
        assert!(rts.transit_altitude() > 0.0);
        assert!((rts.times().transit().hours() - 12.0).abs() < 0.25);
    }

    #[test]
    fn test_arctic_winter_is_polar_night() {
        let arctic = ObserverLocation::new(85.0, 0.0).unwrap();
        let rts = rise_transit_set(&date(2003, 12, 21), 0.0, &arctic, 67.0, REFRACTION).unwrap();
        assert!(rts.times().is_polar_night());
        assert!(rts.transit_altitude() < 0.0);
    }

    #[test]
    fn test_antarctic_seasons_are_reversed() {
        let antarctic = ObserverLocation::new(-85.0, 0.0).unwrap();
        let june = rise_transit_set(&date(2003, 6, 21), 0.0, &antarctic, 67.0, REFRACTION).unwrap();
        let december =
            rise_transit_set(&date(2003, 12, 21), 0.0, &antarctic, 67.0, REFRACTION).unwrap();
        assert!(june.times().is_polar_night());
        assert!(december.times().is_polar_day());
    }

    #[test]
    fn test_equinox_at_equator_has_twelve_hour_day() {
        let equator = ObserverLocation::new(0.0, 0.0).unwrap();
        let rts = rise_transit_set(&date(2024, 3, 20), 0.0, &equator, 69.0, REFRACTION).unwrap();
        let times = rts.times();
        let day_length = times.sunset().unwrap().hours() - times.sunrise().unwrap().hours();
        // refraction and the solar disc add a few minutes
        assert!((day_length - 12.1).abs() < 0.1, "day length {day_length}");
        assert!(times.sunrise().unwrap().hours() < times.transit().hours());
        assert!(times.transit().hours() < times.sunset().unwrap().hours());
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let d = date(2003, 10, 17);
        assert!(rise_transit_set(&d, 19.0, &golden(), 67.0, REFRACTION).is_err());
        assert!(rise_transit_set(&d, -7.0, &golden(), 9000.0, REFRACTION).is_err());
        assert!(rise_transit_set(&d, -7.0, &golden(), 67.0, -1.0).is_err());
        assert!(rise_transit_set(&d, -7.0, &golden(), 67.0, f64::NAN).is_err());
    }

    #[test]
    fn test_interpolation_folds_right_ascension_wrap() {
        let plain = interpolate(&[10.0, 11.0, 12.0], 0.5);
        assert!((plain - 11.5).abs() < 1e-12);

        let wrapped = interpolate(&[359.0, 0.0, 1.0], 0.5);
        assert!((0.0..1.0).contains(&wrapped));
    }
}
