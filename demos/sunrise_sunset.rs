//! Sunrise, transit and sunset across diverse global locations, including polar days and nights.

use solar_ephemeris::{
    LocalHours, ObserverLocation, SolarInput, SolarResult, SunriseResult, calculate,
    time::CivilTime,
};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset: 1.0,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            utc_offset: -9.0,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            utc_offset: 13.0,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            utc_offset: 8.0,
        },
        City {
            name: "McMurdo Station, Antarctica",
            latitude: -77.846,
            longitude: 166.676,
            utc_offset: 13.0,
        },
    ];

    // December solstice shows the most extreme variations
    let date = CivilTime::new(2023, 12, 21, 12, 0, 0.0)?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!("Coordinates: {:.2}°N, {:.2}°E", city.latitude, city.longitude);
        println!("Date: December 21, 2023 (UTC{:+})", city.utc_offset);

        let observer = ObserverLocation::new(city.latitude, city.longitude)?;
        let result = calculate(&SolarInput::new(date, city.utc_offset, observer)?)?;
        print_sun_events(&result);
        println!();
    }

    Ok(())
}

fn clock(hours: &LocalHours) -> String {
    let (h, m, s) = hours.hour_minute_second();
    format!("{h:02}:{m:02}:{:02}", s as u32)
}

fn print_sun_events(result: &SolarResult) {
    match result.sunrise_transit_sunset() {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("  Sunrise: {}", clock(sunrise));
            println!("  Transit: {}", clock(transit));
            println!("  Sunset: {}", clock(sunset));
            println!("  Day length: {:.2} h", sunset.hours() - sunrise.hours());
        }
        SunriseResult::AllDay { transit } => {
            println!("  All day above horizon");
            println!("  Transit: {}", clock(transit));
        }
        SunriseResult::AllNight { transit } => {
            println!("  All night below horizon");
            println!("  Transit: {}", clock(transit));
        }
    }
    println!("  Sun altitude at transit: {:.2}°", result.transit_altitude());

    if let Some(sunrise) = result.sunrise_time() {
        println!("  Sunrise (RFC 3339): {}", sunrise.to_rfc3339());
    }
}
