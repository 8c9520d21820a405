//! Julian Day boundaries: civil midnight lands on the half day.

use solar_ephemeris::time::{CivilTime, JulianDate};

fn midnight(year: i32, month: u32, day: u32) -> f64 {
    JulianDate::from_utc(year, month, day, 0, 0, 0.0, 0.0)
        .unwrap()
        .julian_date()
}

#[test]
fn julian_day_at_midnight_matches_published_values() {
    let cases = [
        ((1987, 1, 27), 2446822.5),
        ((1988, 1, 27), 2447187.5),
        ((1999, 1, 1), 2451179.5),
        ((2003, 10, 17), 2452929.5),
    ];

    for ((year, month, day), expected) in cases {
        let jd = midnight(year, month, day);
        assert!(
            (jd - expected).abs() < 1e-6,
            "{year}-{month:02}-{day:02}: got {jd}, expected {expected}"
        );
    }
}

#[test]
fn noon_is_a_whole_julian_day() {
    let jd = JulianDate::from_utc(2003, 10, 17, 12, 0, 0.0, 0.0).unwrap();
    assert_eq!(jd.julian_date(), 2452930.0);
}

#[test]
fn local_midnight_with_offset() {
    // 00:00 at UTC+10 is 14:00 UTC on the previous day
    let local = CivilTime::new(2003, 10, 17, 0, 0, 0.0).unwrap();
    let jd = JulianDate::from_civil(&local, 10.0, 0.0).unwrap();
    assert!((jd.julian_date() - (2452929.5 - 10.0 / 24.0)).abs() < 1e-9);
}

#[test]
fn consecutive_days_differ_by_one() {
    let mut previous = midnight(1999, 12, 31);
    for day in 1..=31 {
        let jd = midnight(2000, 1, day);
        assert!((jd - previous - 1.0).abs() < 1e-9);
        previous = jd;
    }
    assert!((midnight(2000, 2, 1) - previous - 1.0).abs() < 1e-9);
}

#[test]
fn ephemeris_time_uses_delta_t() {
    let jd = JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap();
    assert!((jd.julian_ephemeris_day() - (jd.julian_date() + 67.0 / 86400.0)).abs() < 1e-9);
    assert!((jd.julian_ephemeris_millennium() - 0.0037927819922933584).abs() < 1e-12);
}
