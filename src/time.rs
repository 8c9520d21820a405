//! Time scales for the ephemeris pipeline.
//!
//! Civil timestamps are decomposed into calendar fields and combined with a numeric
//! UTC offset into a Julian Day. The Julian Ephemeris Day, Century and Millennium
//! are derived from it using an injectable ΔT.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_delta_t, check_utc_offset};
use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// ΔT used when the caller does not supply one, in seconds.
pub const DEFAULT_DELTA_T: f64 = 67.0;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A civil date and time of day, without any offset attached.
///
/// Fields are validated on construction: the year must lie within -2000..=6000,
/// the day must exist in the given month (1582-10-05 through 1582-10-14 are
/// rejected), and seconds may carry a fractional part below 60.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::CivilTime;
/// let time = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
/// assert_eq!(time.hour(), 12);
/// assert!(CivilTime::new(2003, 2, 29, 0, 0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CivilTime {
    /// Creates a validated civil timestamp.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any field is outside its valid range.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(-2000..=6000).contains(&year) {
            return Err(Error::invalid_datetime("year must be between -2000 and 6000"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a civil timestamp from a chrono naive date-time.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the year is outside -2000..=6000.
    #[cfg(feature = "chrono")]
    pub fn from_naive(datetime: &chrono::NaiveDateTime) -> Result<Self> {
        // leap seconds are folded into the last regular second
        let nanos = datetime.nanosecond().min(999_999_999);
        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            f64::from(datetime.second()) + f64::from(nanos) / 1e9,
        )
    }

    /// The same calendar date at 00:00:00.
    #[must_use]
    pub const fn at_midnight(&self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0.0,
            ..*self
        }
    }

    /// Year (astronomical numbering, 0 = 1 BCE).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-31.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hour of day, 0-23.
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour, 0-59.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second of minute including any fraction.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }
}

/// Julian date representation for astronomical calculations.
///
/// Holds the Julian Day (UT) together with the ΔT used to derive the ephemeris
/// time scales, so that every derived quantity stays consistent with one ΔT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Day referenced to UT
    jd: f64,
    /// Delta T in seconds - difference between TT and UT
    delta_t: f64,
}

impl JulianDate {
    /// Creates a Julian date from a local civil timestamp and its UTC offset.
    ///
    /// The time of day and the offset are folded into a single UT day fraction
    /// before the calendar formula is applied.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` or `InvalidDeltaT` for out-of-range corrections.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::{CivilTime, JulianDate};
    /// let local = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
    /// let jd = JulianDate::from_civil(&local, -7.0, 67.0).unwrap();
    /// assert!((jd.julian_date() - 2452930.312847).abs() < 1e-6);
    /// ```
    pub fn from_civil(time: &CivilTime, utc_offset_hours: f64, delta_t: f64) -> Result<Self> {
        check_utc_offset(utc_offset_hours)?;
        check_delta_t(delta_t)?;

        let day_fraction = (f64::from(time.hour) - utc_offset_hours
            + (f64::from(time.minute) + time.second / 60.0) / 60.0)
            / 24.0;
        let jd = calculate_julian_date(time.year, time.month, time.day, day_fraction);
        Ok(Self { jd, delta_t })
    }

    /// Creates a Julian date from UTC calendar components.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for invalid components or `InvalidDeltaT` for an
    /// out-of-range ΔT.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::JulianDate;
    /// let jd = JulianDate::from_utc(1999, 1, 1, 0, 0, 0.0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2451179.5);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        delta_t: f64,
    ) -> Result<Self> {
        let time = CivilTime::new(year, month, day, hour, minute, second)?;
        Self::from_civil(&time, 0.0, delta_t)
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// # Errors
    /// Returns error if the UTC date is outside the supported year range or ΔT is invalid.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &chrono::DateTime<Tz>,
        delta_t: f64,
    ) -> Result<Self> {
        let utc = CivilTime::from_naive(&datetime.naive_utc())?;
        Self::from_civil(&utc, 0.0, delta_t)
    }

    /// Gets the Julian Day (JD), referenced to UT.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Julian Ephemeris Day, JDE = JD + ΔT/86400.
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Julian Century, JC = (JD - 2451545.0) / 36525.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian Ephemeris Century, JCE = (JDE - 2451545.0) / 36525.
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian Ephemeris Millennium, JME = JCE / 10.
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }

    /// Shifts the date by whole or fractional days, keeping ΔT.
    pub(crate) fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
            ..self
        }
    }

    /// Same JD with a different ΔT.
    pub(crate) const fn with_delta_t(self, delta_t: f64) -> Self {
        Self { delta_t, ..self }
    }
}

/// Julian Day from a calendar date plus a UT day fraction.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7. January and February
/// count as months 13 and 14 of the previous year; the Gregorian correction is
/// applied from 1582-10-15 onwards.
fn calculate_julian_date(year: i32, month: u32, day: u32, day_fraction: f64) -> f64 {
    let gregorian = is_gregorian_date(year, month, day);
    let (y, m) = if month < 3 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };

    let mut jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day)
        + day_fraction
        - 1524.5;

    if gregorian {
        let a = floor(y / 100.0);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, is_gregorian_date(year, month, day)) => 29,
        2 => 28,
        _ => 31,
    };
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn midnight_jd(year: i32, month: u32, day: u32) -> f64 {
        JulianDate::from_utc(year, month, day, 0, 0, 0.0, 0.0)
            .unwrap()
            .julian_date()
    }

    #[test]
    fn test_julian_day_at_midnight() {
        assert!((midnight_jd(1987, 1, 27) - 2446822.5).abs() < EPSILON);
        assert!((midnight_jd(1988, 1, 27) - 2447187.5).abs() < EPSILON);
        assert!((midnight_jd(1999, 1, 1) - 2451179.5).abs() < EPSILON);
        assert!((midnight_jd(2003, 10, 17) - 2452929.5).abs() < EPSILON);
    }

    #[test]
    fn test_j2000_epoch() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert_eq!(jd.julian_date(), J2000_JDN);
        assert_eq!(jd.julian_century(), 0.0);
    }

    #[test]
    fn test_gregorian_switchover() {
        // 1582-10-04 (Julian) is followed directly by 1582-10-15 (Gregorian)
        let before = midnight_jd(1582, 10, 4);
        let after = midnight_jd(1582, 10, 15);
        assert!((after - before - 1.0).abs() < EPSILON);
        assert!(CivilTime::new(1582, 10, 10, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_utc_offset_shifts_day_fraction() {
        let local = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
        let jd_local = JulianDate::from_civil(&local, -7.0, 0.0).unwrap();
        let jd_utc = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 0.0).unwrap();
        assert!((jd_local.julian_date() - jd_utc.julian_date()).abs() < EPSILON);
        assert!((jd_local.julian_date() - 2452930.312847222).abs() < 1e-8);

        // offsets may push the UT fraction across a day boundary
        let late = CivilTime::new(2003, 10, 17, 23, 0, 0.0).unwrap();
        let jd_late = JulianDate::from_civil(&late, -7.0, 0.0).unwrap();
        let jd_next = JulianDate::from_utc(2003, 10, 18, 6, 0, 0.0, 0.0).unwrap();
        assert!((jd_late.julian_date() - jd_next.julian_date()).abs() < EPSILON);
    }

    #[test]
    fn test_ephemeris_scales() {
        let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
        let jde = jd.julian_ephemeris_day();
        assert!((jde - jd.julian_date() - 67.0 / 86400.0).abs() < EPSILON);
        assert!((jd.julian_ephemeris_century() - (jde - 2451545.0) / 36525.0).abs() < 1e-15);
        assert!(
            (jd.julian_ephemeris_millennium() - jd.julian_ephemeris_century() / 10.0).abs()
                < 1e-15
        );
    }

    #[test]
    fn test_civil_time_validation() {
        assert!(CivilTime::new(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(CivilTime::new(2023, 2, 29, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(1900, 2, 29, 0, 0, 0.0).is_err());
        // Julian calendar leap rule before the reform
        assert!(CivilTime::new(1500, 2, 29, 0, 0, 0.0).is_ok());
        assert!(CivilTime::new(2023, 4, 31, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2023, 13, 1, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2023, 1, 0, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2023, 1, 1, 24, 0, 0.0).is_err());
        assert!(CivilTime::new(2023, 1, 1, 0, 60, 0.0).is_err());
        assert!(CivilTime::new(2023, 1, 1, 0, 0, 60.0).is_err());
        assert!(CivilTime::new(2023, 1, 1, 0, 0, f64::NAN).is_err());
        assert!(CivilTime::new(-2001, 1, 1, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(6001, 1, 1, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_offset_and_delta_t_validation() {
        let time = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
        assert!(JulianDate::from_civil(&time, 19.0, 67.0).is_err());
        assert!(JulianDate::from_civil(&time, f64::NAN, 67.0).is_err());
        assert!(JulianDate::from_civil(&time, -7.0, 9000.0).is_err());
    }

    #[test]
    fn test_at_midnight() {
        let time = CivilTime::new(2003, 10, 17, 12, 30, 30.5).unwrap();
        let midnight = time.at_midnight();
        assert_eq!(midnight, CivilTime::new(2003, 10, 17, 0, 0, 0.0).unwrap());
    }

    #[test]
    fn test_add_days_keeps_delta_t() {
        let jd = JulianDate::from_utc(2003, 10, 17, 0, 0, 0.0, 67.0).unwrap();
        let next = jd.add_days(1.0);
        assert_eq!(next.julian_date(), 2452930.5);
        assert_eq!(next.delta_t(), 67.0);
        assert_eq!(next.with_delta_t(0.0).delta_t(), 0.0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_matches_civil() {
        use chrono::{DateTime, FixedOffset};

        let datetime = "2003-10-17T12:30:30-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let from_chrono = JulianDate::from_datetime(&datetime, 67.0).unwrap();
        let local = CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap();
        let from_civil = JulianDate::from_civil(&local, -7.0, 67.0).unwrap();
        assert!((from_chrono.julian_date() - from_civil.julian_date()).abs() < EPSILON);
    }
}
