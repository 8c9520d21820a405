//! Compares the NOAA solar calculator with SPA over one day.

use solar_ephemeris::{ObserverLocation, SolarInput, calculate, noaa, time::CivilTime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Golden, Colorado
    let observer = ObserverLocation::new(39.742476, -105.1786)?.with_elevation(1830.14)?;
    let utc_offset = -7.0;

    println!("SPA vs NOAA for Golden, Colorado on October 17, 2003\n");
    println!("Time    SPA azimuth  NOAA azimuth  SPA zenith  NOAA zenith");

    let mut max_azimuth_diff: f64 = 0.0;
    let mut max_zenith_diff: f64 = 0.0;

    for hour in 6..=18 {
        let time = CivilTime::new(2003, 10, 17, hour, 0, 0.0)?;
        let spa = calculate(&SolarInput::new(time, utc_offset, observer)?.with_delta_t(67.0)?)?;
        let noaa = noaa::solar_position(&time, utc_offset, &observer)?;

        println!(
            "{hour:02}:00  {:11.4}  {:12.4}  {:10.4}  {:11.4}",
            spa.azimuth(),
            noaa.azimuth(),
            spa.geometric_zenith_angle(),
            noaa.zenith_angle()
        );

        max_azimuth_diff = max_azimuth_diff.max((spa.azimuth() - noaa.azimuth()).abs());
        max_zenith_diff =
            max_zenith_diff.max((spa.geometric_zenith_angle() - noaa.zenith_angle()).abs());
    }

    println!("\nMaximum differences:");
    println!("  Azimuth: {max_azimuth_diff:.4}°");
    println!("  Zenith: {max_zenith_diff:.4}°");

    let date = CivilTime::new(2003, 10, 17, 0, 0, 0.0)?;
    let noaa_events = noaa::sunrise_sunset(&date, utc_offset, &observer)?;
    let spa_events = calculate(&SolarInput::new(date, utc_offset, observer)?.with_delta_t(67.0)?)?;

    println!("\nSun events (local hours):");
    println!(
        "  Sunrise: SPA {:?}, NOAA {:?}",
        spa_events.sunrise().map(|t| t.hours()),
        noaa_events.sunrise().map(|t| t.hours())
    );
    println!(
        "  Transit: SPA {:.4}, NOAA {:.4}",
        spa_events.transit().hours(),
        noaa_events.transit().hours()
    );
    println!(
        "  Sunset: SPA {:?}, NOAA {:?}",
        spa_events.sunset().map(|t| t.hours()),
        noaa_events.sunset().map(|t| t.hours())
    );

    Ok(())
}
