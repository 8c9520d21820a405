//! Angle arithmetic and floating point helpers shared by the ephemeris stages.
//!
//! Trigonometric functions dispatch to `std` when available and to `libm` otherwise,
//! so the pipeline runs unchanged in `no_std` builds.

#![allow(clippy::many_single_char_names)]

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle in degrees to `[0, 360)`.
pub fn limit_degrees(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let limited = 360.0 * (turns - floor(turns));
    // rounding can land exactly on the upper bound for tiny negative inputs
    if limited >= 360.0 { 0.0 } else { limited }
}

/// Reduces an angle in degrees to `(-180, 180]`.
pub fn limit_degrees_180pm(degrees: f64) -> f64 {
    let limited = limit_degrees(degrees);
    if limited > 180.0 {
        limited - 360.0
    } else {
        limited
    }
}

/// Reduces a value to its fractional part in `[0, 1)`.
pub fn limit_zero_to_one(value: f64) -> f64 {
    let limited = value - floor(value);
    if limited >= 1.0 { 0.0 } else { limited }
}

/// Folds a minute count into `[-20, 20]` by a single day's worth of minutes.
///
/// Used by the equation of time, whose raw form is only known modulo a day.
pub fn limit_minutes(minutes: f64) -> f64 {
    if minutes < -20.0 {
        minutes + 1440.0
    } else if minutes > 20.0 {
        minutes - 1440.0
    } else {
        minutes
    }
}

/// Evaluates a polynomial by Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 0.0;
    };

    rest.iter()
        .rev()
        .fold(last, |acc, &coeff| mul_add(acc, x, coeff))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds half-way cases away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}
