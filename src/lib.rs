//! # Solar Ephemeris
//!
//! Topocentric sun position, subsolar point and sunrise/transit/sunset times for an observer
//! on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The engine is a pipeline of pure, stateless stages:
//! - **Time scales**: civil timestamp and UTC offset to Julian Day and ephemeris time
//! - **SPA** (Solar Position Algorithm): NREL's algorithm (±0.0003°, years -2000 to 6000),
//!   from Earth's heliocentric position through nutation, aberration and parallax to
//!   refracted zenith and azimuth
//! - **Sun events**: sunrise, transit and sunset by three-point interpolation
//! - **NOAA**: the simpler NOAA solar calculator (±0.01°), for cross-checks
//!
//! [`calculate`] runs everything for one [`SolarInput`]. The individual stages are public in
//! [`spa`] for callers that want to reuse the location-independent part across observers.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` inputs and `DateTime<FixedOffset>` sun event times
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-ephemeris = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `debug` for each facade calculation and for
//! polar days and nights, `trace` for intermediate ephemeris values. Nothing is emitted unless
//! the application installs a logger.
//!
//! ## References
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_ephemeris::{
//!     calculate, AtmosphericConditions, ObserverLocation, SolarInput, time::CivilTime,
//! };
//!
//! // Golden, Colorado on 2003-10-17 at 12:30:30 local time (UTC-7)
//! let observer = ObserverLocation::new(39.742476, -105.1786)
//!     .unwrap()
//!     .with_elevation(1830.14)
//!     .unwrap();
//! let input = SolarInput::new(CivilTime::new(2003, 10, 17, 12, 30, 30.0).unwrap(), -7.0, observer)
//!     .unwrap()
//!     .with_atmosphere(AtmosphericConditions::new(820.0, 11.0).unwrap());
//!
//! let result = calculate(&input).unwrap();
//! println!("Azimuth: {:.3}°", result.azimuth());
//! println!("Zenith: {:.3}°", result.zenith_angle());
//! println!(
//!     "Subsolar point: {:.3}, {:.3}",
//!     result.subsolar_latitude(),
//!     result.subsolar_longitude()
//! );
//!
//! if let Some(sunrise) = result.sunrise() {
//!     let (h, m, s) = sunrise.hour_minute_second();
//!     println!("Sunrise: {h:02}:{m:02}:{s:02.0}");
//! }
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{calculate, ObserverLocation, SolarInput};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let vienna = ObserverLocation::new(48.21, 16.37).unwrap();
//! let result = calculate(&SolarInput::from_datetime(&datetime, vienna).unwrap()).unwrap();
//!
//! println!("Sunrise: {:?}", result.sunrise_time());
//! println!("Sunset: {:?}", result.sunset_time());
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **UTC offset**: hours, positive east of Greenwich

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::sunlight::{SolarInput, SolarResult, calculate};
pub use crate::time::{CivilTime, JulianDate};
pub use crate::types::{
    AtmosphericConditions, LocalHours, ObserverLocation, SunriseResult, SurfaceOrientation,
};

// Algorithm modules
pub mod noaa;
pub mod spa;

// Core modules
pub mod error;
pub mod time;
pub mod types;

// Internal modules
mod math;
mod sunlight;
