//! Earth heliocentric longitude, latitude and radius vector (SPA steps 3.2.1-3.2.4).

use super::coefficients::{B_SERIES, L_SERIES, PeriodicTerm, R_SERIES};
use crate::math::{cos, limit_degrees, mul_add, polynomial, radians_to_degrees};

/// Earth's position relative to the sun's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    longitude: f64,
    latitude: f64,
    radius: f64,
}

impl HeliocentricPosition {
    /// Heliocentric longitude L in degrees, `[0, 360)`.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Heliocentric latitude B in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Radius vector R in astronomical units.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

/// Evaluates the L, B and R series for a Julian Ephemeris Millennium.
#[must_use]
pub fn heliocentric_position(jme: f64) -> HeliocentricPosition {
    HeliocentricPosition {
        longitude: limit_degrees(radians_to_degrees(evaluate_series(L_SERIES, jme))),
        latitude: radians_to_degrees(evaluate_series(B_SERIES, jme)),
        radius: evaluate_series(R_SERIES, jme),
    }
}

/// Sums each term group, then combines the group sums as a polynomial in JME.
fn evaluate_series(series: &[&[PeriodicTerm]], jme: f64) -> f64 {
    // no series in the tables has more than six groups
    let mut sums = [0.0; 6];
    for (sum, group) in sums.iter_mut().zip(series) {
        *sum = group
            .iter()
            .map(|&PeriodicTerm(a, b, c)| a * cos(mul_add(c, jme, b)))
            .sum();
    }
    polynomial(&sums[..series.len()], jme) / 1e8
}
