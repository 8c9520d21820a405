//! Basic solar position calculation example.

use chrono::{DateTime, FixedOffset};
use solar_ephemeris::{
    AtmosphericConditions, ObserverLocation, SolarInput, SurfaceOrientation, calculate,
    time::CivilTime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco, summer solstice at noon Pacific Daylight Time
    let observer = ObserverLocation::new(37.7749, -122.4194)?.with_elevation(16.0)?;

    // Example 1: explicit civil time and UTC offset
    let input = SolarInput::new(CivilTime::new(2023, 6, 21, 12, 0, 0.0)?, -7.0, observer)?
        .with_delta_t(69.0)?
        .with_atmosphere(AtmosphericConditions::new(1013.25, 15.0)?)
        .with_surface(SurfaceOrientation::new(30.0, 0.0)?);
    let result = calculate(&input)?;

    // Example 2: the same moment as a chrono DateTime
    let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let from_chrono = calculate(
        &SolarInput::from_datetime(&datetime, observer)?
            .with_delta_t(69.0)?
            .with_atmosphere(AtmosphericConditions::new(1013.25, 15.0)?),
    )?;

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Azimuth: {:.3}°", result.azimuth());
    println!("  Elevation: {:.3}°", result.elevation_angle());
    println!("  Zenith angle: {:.3}°", result.zenith_angle());
    println!("  Zenith angle (no refraction): {:.3}°", result.geometric_zenith_angle());
    if let Some(incidence) = result.incidence_angle() {
        println!("  Incidence on a 30° south-facing panel: {incidence:.3}°");
    }

    println!("\nSun coordinates:");
    println!("  Right ascension: {:.4}°", result.right_ascension());
    println!("  Declination: {:.4}°", result.declination());
    println!("  Local hour angle: {:.4}°", result.hour_angle());
    println!("  Equation of time: {:.2} min", result.equation_of_time());
    println!(
        "  Subsolar point: {:.3}°, {:.3}°",
        result.subsolar_latitude(),
        result.subsolar_longitude()
    );

    println!(
        "\nchrono input produces identical results: {}",
        result.azimuth() == from_chrono.azimuth()
            && result.zenith_angle() == from_chrono.zenith_angle()
    );

    if result.elevation_angle() > 0.0 {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    Ok(())
}
