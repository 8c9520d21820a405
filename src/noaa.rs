//! NOAA solar calculator.
//!
//! This follows the low-precision formulas of the NOAA Global Monitoring Laboratory solar
//! calculator, which are based on Meeus, "Astronomical Algorithms". Accuracy is about 0.01°
//! for dates between 1800 and 2100, well below SPA but enough to cross-check it and to drive
//! display code that only needs the sun's rough direction.
//!
//! Unlike [`crate::spa`], the calculator works on UT directly (no ΔT) and has no parallax,
//! pressure or temperature inputs. Its refraction model is a fixed piecewise fit.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_utc_offset;
use crate::math::{
    acos, asin, atan2, cos, degrees_to_radians, limit_degrees, limit_degrees_180pm,
    radians_to_degrees, sin, tan,
};
use crate::time::{CivilTime, JulianDate};
use crate::types::{LocalHours, ObserverLocation, SunriseResult};
use crate::Result;

/// Zenith angle of the sun's center at sunrise and sunset, in degrees.
const SUNRISE_ZENITH: f64 = 90.833;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Sun position from the NOAA calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoaaPosition {
    julian_day: f64,
    right_ascension: f64,
    declination: f64,
    radius_vector: f64,
    equation_of_time: f64,
    hour_angle: f64,
    zenith_angle: f64,
    refracted_zenith_angle: f64,
    azimuth: f64,
    subsolar_longitude: f64,
}

impl NoaaPosition {
    /// Julian Day (UT) of the calculation.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Right ascension in degrees, `[0, 360)`.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Earth-sun distance in AU.
    #[must_use]
    pub const fn radius_vector(&self) -> f64 {
        self.radius_vector
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Local hour angle from true solar time, in degrees `[-180, 180)`.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Zenith angle without refraction, in degrees.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Zenith angle corrected for standard refraction, in degrees.
    #[must_use]
    pub const fn refracted_zenith_angle(&self) -> f64 {
        self.refracted_zenith_angle
    }

    /// Azimuth measured eastward from north, in degrees `[0, 360)`.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Latitude of the point directly beneath the sun; equal to the declination.
    #[must_use]
    pub const fn subsolar_latitude(&self) -> f64 {
        self.declination
    }

    /// Longitude of the point directly beneath the sun, in degrees `(-180, 180]`.
    #[must_use]
    pub const fn subsolar_longitude(&self) -> f64 {
        self.subsolar_longitude
    }
}

/// Calculates the sun position with the NOAA formulas.
///
/// `time` is the local civil time at `utc_offset_hours` (positive east).
/// The observer's elevation is ignored.
///
/// # Errors
/// Returns `InvalidUtcOffset` for offsets outside ±18 hours.
///
/// # Example
/// ```
/// use solar_ephemeris::{noaa, time::CivilTime, ObserverLocation};
///
/// let time = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
/// let golden = ObserverLocation::new(39.742476, -105.1786).unwrap();
/// let position = noaa::solar_position(&time, -7.0, &golden).unwrap();
/// assert!((position.azimuth() - 194.34).abs() < 0.01);
/// ```
pub fn solar_position(
    time: &CivilTime,
    utc_offset_hours: f64,
    observer: &ObserverLocation,
) -> Result<NoaaPosition> {
    let julian_day = JulianDate::from_civil(time, utc_offset_hours, 0.0)?.julian_date();
    let t = julian_century(julian_day);
    let latitude = observer.latitude();
    let longitude = observer.longitude();

    let equation_of_time = equation_of_time(t);
    let declination = declination(t);

    let local_minutes =
        f64::from(time.hour()) * 60.0 + f64::from(time.minute()) + time.second() / 60.0;
    let mut true_solar_time =
        local_minutes + equation_of_time + 4.0 * longitude - 60.0 * utc_offset_hours;
    while true_solar_time < 0.0 {
        true_solar_time += MINUTES_PER_DAY;
    }
    while true_solar_time >= MINUTES_PER_DAY {
        true_solar_time -= MINUTES_PER_DAY;
    }
    let hour_angle = true_solar_time / 4.0 - 180.0;

    let lat = degrees_to_radians(latitude);
    let dec = degrees_to_radians(declination);
    let cos_zenith =
        (sin(lat) * sin(dec) + cos(lat) * cos(dec) * cos(degrees_to_radians(hour_angle)))
            .clamp(-1.0, 1.0);
    let zenith_angle = radians_to_degrees(acos(cos_zenith));
    let azimuth = azimuth(latitude, declination, zenith_angle, hour_angle);
    let refracted_zenith_angle = zenith_angle - refraction(90.0 - zenith_angle);

    let right_ascension = limit_degrees(right_ascension(t));
    let sidereal_hours = (18.697374558 + 24.06570982441908 * (julian_day - 2451545.0)) % 24.0;
    let subsolar_longitude = limit_degrees_180pm(right_ascension - sidereal_hours * 15.0);

    log::trace!(
        "noaa position at JD {julian_day}: dec={declination} eot={equation_of_time} ha={hour_angle} zenith={zenith_angle} az={azimuth}"
    );

    Ok(NoaaPosition {
        julian_day,
        right_ascension,
        declination,
        radius_vector: radius_vector(t),
        equation_of_time,
        hour_angle,
        zenith_angle,
        refracted_zenith_angle,
        azimuth,
        subsolar_longitude,
    })
}

/// Sunrise, solar noon and sunset for the local calendar day of `date`, in local hours.
///
/// Sunrise and sunset are refined by one re-evaluation at the first estimate.
/// Days on which the sun does not cross the 90.833° zenith report only solar noon.
///
/// # Errors
/// Returns `InvalidUtcOffset` for offsets outside ±18 hours.
pub fn sunrise_sunset(
    date: &CivilTime,
    utc_offset_hours: f64,
    observer: &ObserverLocation,
) -> Result<SunriseResult<LocalHours>> {
    check_utc_offset(utc_offset_hours)?;
    let midnight = JulianDate::from_civil(&date.at_midnight(), 0.0, 0.0)?.julian_date();
    let latitude = observer.latitude();
    let longitude = observer.longitude();

    let to_local = |utc_minutes: f64| {
        let mut local = utc_minutes + utc_offset_hours * 60.0;
        while local < 0.0 {
            local += MINUTES_PER_DAY;
        }
        while local >= MINUTES_PER_DAY {
            local -= MINUTES_PER_DAY;
        }
        LocalHours::from_hours(local / 60.0)
    };

    let transit = to_local(solar_noon_utc(midnight, longitude));

    let rise = refined_event_utc(Event::Sunrise, midnight, latitude, longitude);
    let set = refined_event_utc(Event::Sunset, midnight, latitude, longitude);
    let result = match (rise, set) {
        (EventTime::At(sunrise), EventTime::At(sunset)) => SunriseResult::RegularDay {
            sunrise: to_local(sunrise),
            transit,
            sunset: to_local(sunset),
        },
        (EventTime::AlwaysAbove, _) | (_, EventTime::AlwaysAbove) => {
            SunriseResult::AllDay { transit }
        }
        _ => SunriseResult::AllNight { transit },
    };
    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Sunrise,
    Sunset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EventTime {
    /// Minutes after 0h UT
    At(f64),
    AlwaysAbove,
    AlwaysBelow,
}

fn refined_event_utc(event: Event, midnight: f64, latitude: f64, longitude: f64) -> EventTime {
    match event_utc(event, midnight, latitude, longitude) {
        EventTime::At(first) => {
            event_utc(event, midnight + first / MINUTES_PER_DAY, latitude, longitude)
        }
        polar => polar,
    }
}

fn event_utc(event: Event, julian_day: f64, latitude: f64, longitude: f64) -> EventTime {
    let t = julian_century(julian_day);
    let lat = degrees_to_radians(latitude);
    let dec = degrees_to_radians(declination(t));
    let argument =
        cos(degrees_to_radians(SUNRISE_ZENITH)) / (cos(lat) * cos(dec)) - tan(lat) * tan(dec);

    if argument < -1.0 {
        return EventTime::AlwaysAbove;
    }
    if argument > 1.0 {
        return EventTime::AlwaysBelow;
    }

    let hour_angle = radians_to_degrees(acos(argument));
    let hour_angle = match event {
        Event::Sunrise => hour_angle,
        Event::Sunset => -hour_angle,
    };
    EventTime::At(720.0 - 4.0 * (longitude + hour_angle) - equation_of_time(t))
}

fn solar_noon_utc(midnight: f64, longitude: f64) -> f64 {
    let first = equation_of_time(julian_century(midnight - longitude / 360.0));
    let offset = 720.0 - longitude * 4.0 - first;
    720.0 - longitude * 4.0 - equation_of_time(julian_century(midnight + offset / MINUTES_PER_DAY))
}

/// Hour angle of sunrise for a latitude and declination, in degrees.
///
/// Returns `None` when the sun does not reach the 90.833° zenith that day.
#[must_use]
pub fn sunrise_hour_angle(latitude: f64, declination: f64) -> Option<f64> {
    let lat = degrees_to_radians(latitude);
    let dec = degrees_to_radians(declination);
    let argument =
        cos(degrees_to_radians(SUNRISE_ZENITH)) / (cos(lat) * cos(dec)) - tan(lat) * tan(dec);
    (-1.0..=1.0)
        .contains(&argument)
        .then(|| radians_to_degrees(acos(argument)))
}

fn julian_century(julian_day: f64) -> f64 {
    (julian_day - 2451545.0) / 36525.0
}

fn geometric_mean_longitude(t: f64) -> f64 {
    limit_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn geometric_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

fn eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

fn equation_of_center(t: f64) -> f64 {
    let m = degrees_to_radians(geometric_mean_anomaly(t));
    sin(m) * (1.914602 - t * (0.004817 + 0.000014 * t))
        + sin(2.0 * m) * (0.019993 - 0.000101 * t)
        + sin(3.0 * m) * 0.000289
}

fn radius_vector(t: f64) -> f64 {
    let e = eccentricity(t);
    let true_anomaly = geometric_mean_anomaly(t) + equation_of_center(t);
    (1.000001018 * (1.0 - e * e)) / (1.0 + e * cos(degrees_to_radians(true_anomaly)))
}

fn apparent_longitude(t: f64) -> f64 {
    let true_longitude = geometric_mean_longitude(t) + equation_of_center(t);
    let omega = 125.04 - 1934.136 * t;
    true_longitude - 0.00569 - 0.00478 * sin(degrees_to_radians(omega))
}

fn obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    let mean = 23.0 + (26.0 + seconds / 60.0) / 60.0;
    let omega = 125.04 - 1934.136 * t;
    mean + 0.00256 * cos(degrees_to_radians(omega))
}

fn right_ascension(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity(t));
    let lambda = degrees_to_radians(apparent_longitude(t));
    radians_to_degrees(atan2(cos(epsilon) * sin(lambda), cos(lambda)))
}

fn declination(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity(t));
    let lambda = degrees_to_radians(apparent_longitude(t));
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

/// Equation of time in minutes.
fn equation_of_time(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity(t));
    let l0 = degrees_to_radians(geometric_mean_longitude(t));
    let e = eccentricity(t);
    let m = degrees_to_radians(geometric_mean_anomaly(t));

    let y = tan(epsilon / 2.0);
    let y = y * y;

    let etime = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);
    radians_to_degrees(etime) * 4.0
}

fn azimuth(latitude: f64, declination: f64, zenith_angle: f64, hour_angle: f64) -> f64 {
    let lat = degrees_to_radians(latitude);
    let zenith = degrees_to_radians(zenith_angle);
    let denominator = cos(lat) * sin(zenith);

    let azimuth = if denominator.abs() > 0.001 {
        let cosine = ((sin(lat) * cos(zenith)) - sin(degrees_to_radians(declination)))
            / denominator;
        let azimuth = 180.0 - radians_to_degrees(acos(cosine.clamp(-1.0, 1.0)));
        if hour_angle > 0.0 { -azimuth } else { azimuth }
    } else if latitude > 0.0 {
        180.0
    } else {
        0.0
    };

    limit_degrees(azimuth)
}

/// Refraction correction in degrees for an elevation without refraction.
fn refraction(elevation: f64) -> f64 {
    if elevation > 85.0 {
        return 0.0;
    }

    let te = tan(degrees_to_radians(elevation));
    let arcseconds = if elevation > 5.0 {
        58.1 / te - 0.07 / (te * te * te) + 0.000086 / (te * te * te * te * te)
    } else if elevation > -0.575 {
        1735.0
            + elevation * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.774 / te
    };
    arcseconds / 3600.0
}
