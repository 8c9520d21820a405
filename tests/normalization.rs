//! Output ranges and determinism over a grid of observers and instants.

use solar_ephemeris::{
    AtmosphericConditions, ObserverLocation, SolarInput, SolarResult, SurfaceOrientation,
    calculate, time::CivilTime,
};
use std::thread;

const LATITUDES: [f64; 7] = [-89.9, -60.0, -23.44, 0.0, 23.44, 60.0, 89.9];
const LONGITUDES: [f64; 6] = [-180.0, -120.5, -45.0, 0.0, 90.0, 180.0];

fn grid_input(latitude: f64, longitude: f64, month: u32, hour: u32) -> SolarInput {
    SolarInput::new(
        CivilTime::new(2024, month, 15, hour, 17, 42.5).unwrap(),
        (longitude / 15.0).round(),
        ObserverLocation::new(latitude, longitude)
            .unwrap()
            .with_elevation(250.0)
            .unwrap(),
    )
    .unwrap()
    .with_atmosphere(AtmosphericConditions::new(1000.0, 20.0).unwrap())
    .with_surface(SurfaceOrientation::new(20.0, 45.0).unwrap())
    .with_delta_t(69.0)
    .unwrap()
}

fn for_each_grid_result(mut check: impl FnMut(&SolarInput, &SolarResult)) {
    for latitude in LATITUDES {
        for longitude in LONGITUDES {
            for month in [1, 4, 7, 10] {
                for hour in [0, 6, 12, 18, 23] {
                    let input = grid_input(latitude, longitude, month, hour);
                    let result = calculate(&input).unwrap();
                    check(&input, &result);
                }
            }
        }
    }
}

#[test]
fn angles_are_normalized() {
    for_each_grid_result(|input, result| {
        let context = format!(
            "lat {} lon {} at {:?}",
            input.observer().latitude(),
            input.observer().longitude(),
            input.time()
        );

        assert!((0.0..360.0).contains(&result.azimuth()), "azimuth {context}");
        assert!((0.0..360.0).contains(&result.right_ascension()), "α {context}");
        assert!(
            (0.0..360.0).contains(&result.topocentric().right_ascension()),
            "α′ {context}"
        );
        assert!((0.0..360.0).contains(&result.hour_angle()), "H {context}");
        assert!(
            result.subsolar_longitude() > -180.0 && result.subsolar_longitude() <= 180.0,
            "subsolar longitude {context}"
        );
        assert!(result.subsolar_latitude().abs() < 23.5, "subsolar latitude {context}");
        assert!((0.0..=180.0).contains(&result.zenith_angle()), "zenith {context}");
        assert!(
            (0.0..=180.0).contains(&result.incidence_angle().unwrap()),
            "incidence {context}"
        );
        assert!(result.equation_of_time().abs() < 17.0, "EOT {context}");

        let transit = result.transit().hours();
        assert!((0.0..24.0).contains(&transit), "transit {context}");
        if let (Some(sunrise), Some(sunset)) = (result.sunrise(), result.sunset()) {
            assert!((0.0..24.0).contains(&sunrise.hours()), "sunrise {context}");
            assert!((0.0..24.0).contains(&sunset.hours()), "sunset {context}");
        }
    });
}

#[test]
fn refraction_only_raises_the_sun() {
    for_each_grid_result(|_, result| {
        let horizontal = result.horizontal();
        assert!(horizontal.refraction() >= 0.0);
        assert!(horizontal.refraction() < 1.0);
        assert!(result.zenith_angle() <= result.geometric_zenith_angle());
        if horizontal.geometric_elevation() < -(0.26667 + 0.5667) {
            assert_eq!(horizontal.refraction(), 0.0);
        }
    });
}

#[test]
fn subsolar_point_is_overhead() {
    // an observer standing at the subsolar point sees the sun at the zenith
    let input = grid_input(40.0, -100.0, 7, 12);
    let result = calculate(&input).unwrap();

    let overhead = SolarInput::new(
        *input.time(),
        input.utc_offset_hours(),
        ObserverLocation::new(result.subsolar_latitude(), result.subsolar_longitude()).unwrap(),
    )
    .unwrap()
    .with_delta_t(input.delta_t())
    .unwrap();
    let at_subsolar = calculate(&overhead).unwrap();
    assert!(
        at_subsolar.geometric_zenith_angle() < 0.01,
        "zenith {}",
        at_subsolar.geometric_zenith_angle()
    );
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = grid_input(48.21, 16.37, 7, 12);
    let first = calculate(&input).unwrap();
    for _ in 0..10 {
        let again = calculate(&input).unwrap();
        assert_eq!(first, again);
        assert_eq!(first.azimuth().to_bits(), again.azimuth().to_bits());
        assert_eq!(first.zenith_angle().to_bits(), again.zenith_angle().to_bits());
    }
}

#[test]
fn concurrent_calls_match_sequential_results() {
    let inputs: Vec<SolarInput> = LATITUDES
        .iter()
        .map(|&latitude| grid_input(latitude, 16.37, 4, 9))
        .collect();
    let sequential: Vec<SolarResult> = inputs.iter().map(|i| calculate(i).unwrap()).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| thread::spawn(move || calculate(&input).unwrap()))
        .collect();

    for (handle, expected) in handles.into_iter().zip(sequential) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
