//! Nutation in longitude and obliquity, and the obliquity of the ecliptic
//! (SPA steps 3.4 and 3.5).

use super::coefficients::{DELAUNAY_COEFFS, NUTATION_SERIES, NutationTerm, OBLIQUITY_COEFFS};
use crate::math::{cos, degrees_to_radians, mul_add, polynomial, sin};

/// Nutation tables are tabulated in units of 0.0001 arcseconds.
const TABLE_UNITS_PER_DEGREE: f64 = 36_000_000.0;

/// Nutation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    longitude: f64,
    obliquity: f64,
}

impl Nutation {
    /// Nutation in longitude, Δψ.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Nutation in obliquity, Δε.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }
}

/// The five Delaunay arguments (D, M, M', F, Ω) in degrees for a Julian Ephemeris Century.
#[must_use]
pub fn delaunay_arguments(jce: f64) -> [f64; 5] {
    DELAUNAY_COEFFS.map(|coeffs| polynomial(&coeffs, jce))
}

/// Sums the nutation series for a Julian Ephemeris Century.
#[must_use]
pub fn nutation(jce: f64) -> Nutation {
    let arguments = delaunay_arguments(jce);

    let (delta_psi, delta_epsilon) = NUTATION_SERIES.iter().fold(
        (0.0, 0.0),
        |(psi, epsilon), &NutationTerm(multipliers, a, b, c, d)| {
            let angle = degrees_to_radians(
                multipliers
                    .iter()
                    .zip(arguments)
                    .map(|(&k, x)| f64::from(k) * x)
                    .sum(),
            );
            (
                psi + mul_add(b, jce, a) * sin(angle),
                epsilon + mul_add(d, jce, c) * cos(angle),
            )
        },
    );

    Nutation {
        longitude: delta_psi / TABLE_UNITS_PER_DEGREE,
        obliquity: delta_epsilon / TABLE_UNITS_PER_DEGREE,
    }
}

/// Mean obliquity of the ecliptic ε0 in arcseconds.
#[must_use]
pub fn mean_obliquity(jme: f64) -> f64 {
    polynomial(OBLIQUITY_COEFFS, jme / 10.0)
}

/// True obliquity ε = ε0 + Δε, in degrees.
#[must_use]
pub fn true_obliquity(jme: f64, nutation: &Nutation) -> f64 {
    mean_obliquity(jme) / 3600.0 + nutation.obliquity
}

#[cfg(test)]
mod tests {
    use super::*;

    const JCE: f64 = 0.037927819922933585;

    #[test]
    fn test_delaunay_arguments() {
        let x = delaunay_arguments(JCE);
        let expected = [
            17185.86117906491,
            1722.8932184613648,
            18234.075702611266,
            18420.07101228228,
            51.686951165383405,
        ];
        for (actual, expected) in x.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-8, "{actual} vs {expected}");
        }
    }

    #[test]
    fn test_reference_nutation() {
        let nutation = nutation(JCE);
        assert!((nutation.longitude() - -0.0039984043033327735).abs() < 1e-10);
        assert!((nutation.obliquity() - 0.0016665681772496854).abs() < 1e-10);
    }

    #[test]
    fn test_reference_obliquity() {
        let jme = JCE / 10.0;
        assert!((mean_obliquity(jme) - 84379.67261380664).abs() < 1e-6);
        let epsilon = true_obliquity(jme, &nutation(JCE));
        assert!((epsilon - 23.440464516456874).abs() < 1e-9);
    }

    #[test]
    fn test_series_shape() {
        assert_eq!(NUTATION_SERIES.len(), 63);
        // leading term is the 18.6 year lunar node cycle
        assert_eq!(NUTATION_SERIES[0].0, [0, 0, 0, 0, 1]);
    }
}
