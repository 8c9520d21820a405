//! Example demonstrating usage without chrono.
//!
//! This shows the pure numeric API available in no_std environments, where
//! callers supply calendar components and UTC offsets themselves.

use solar_ephemeris::{
    AtmosphericConditions, ObserverLocation, noaa, spa,
    time::{CivilTime, JulianDate},
};

fn main() {
    // 2024-06-21 12:00:00 UTC in Vienna: 48.21°N, 16.37°E
    println!("Solar ephemeris without chrono\n");

    let time = CivilTime::new(2024, 6, 21, 12, 0, 0.0).expect("Valid date");
    let jd = JulianDate::from_civil(&time, 0.0, 69.0).expect("Valid date");

    println!("Julian Date: {:.6}", jd.julian_date());
    println!("Delta T: {:.1} seconds\n", jd.delta_t());

    let vienna = ObserverLocation::new(48.21, 16.37)
        .and_then(|o| o.with_elevation(190.0))
        .expect("Valid coordinates");

    // Stage by stage: the ephemeris only depends on time
    let ephemeris = spa::ephemeris(jd);
    let topocentric = spa::topocentric_position(&ephemeris, &vienna);
    let horizontal = spa::horizontal_position(
        &topocentric,
        vienna.latitude(),
        &AtmosphericConditions::standard(),
    );

    println!("SPA Results:");
    println!("  Azimuth: {:.3}°", horizontal.azimuth());
    println!("  Elevation: {:.3}°", horizontal.elevation());
    println!("  Zenith: {:.3}°\n", horizontal.zenith_angle());

    let noaa_position = noaa::solar_position(&time, 0.0, &vienna).expect("Valid coordinates");

    println!("NOAA Results:");
    println!("  Azimuth: {:.3}°", noaa_position.azimuth());
    println!("  Zenith: {:.3}°\n", noaa_position.refracted_zenith_angle());

    println!("Algorithm Differences:");
    println!(
        "  Azimuth difference: {:.4}°",
        (horizontal.azimuth() - noaa_position.azimuth()).abs()
    );

    // Coordinate sweep reusing one ephemeris
    println!("\nCoordinate sweep example (3 locations, same time):");

    let locations = [
        ("Vienna", 48.21, 16.37),
        ("San Francisco", 37.7749, -122.4194),
        ("Sydney", -33.8688, 151.2093),
    ];

    for (name, lat, lon) in &locations {
        let observer = ObserverLocation::new(*lat, *lon).expect("Valid coordinates");
        let topocentric = spa::topocentric_position(&ephemeris, &observer);
        let position =
            spa::horizontal_position(&topocentric, *lat, &AtmosphericConditions::standard());

        println!(
            "  {} - Azimuth: {:.1}°, Elevation: {:.1}°",
            name,
            position.azimuth(),
            position.elevation()
        );
    }

    let date = CivilTime::new(2024, 6, 21, 0, 0, 0.0).expect("Valid date");
    let events = spa::rise_transit_set(&date, 2.0, &vienna, 69.0, 0.5667).expect("Valid input");
    if let (Some(rise), Some(set)) = (events.times().sunrise(), events.times().sunset()) {
        let (rh, rm, _) = rise.hour_minute_second();
        let (sh, sm, _) = set.hour_minute_second();
        println!("\nVienna sunrise {rh:02}:{rm:02}, sunset {sh:02}:{sm:02} (UTC+2)");
    }
}
