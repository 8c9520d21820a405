//! Periodic term tables for the SPA heliocentric and nutation series.
//!
//! Values follow Reda & Andreas (2003), tables A4.2 and A4.3.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

/// One term of a heliocentric series: amplitude `A`, phase `B` (radians) and
/// frequency `C` (radians per Julian millennium), contributing `A·cos(B + C·JME)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PeriodicTerm(pub(crate) f64, pub(crate) f64, pub(crate) f64);

/// One row of the nutation series.
///
/// The multipliers apply to the Delaunay arguments (D, M, M', F, Ω); `a + b·JCE`
/// scales the sine for Δψ and `c + d·JCE` scales the cosine for Δε.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NutationTerm(
    pub(crate) [i8; 5],
    pub(crate) f64,
    pub(crate) f64,
    pub(crate) f64,
    pub(crate) f64,
);

/// Delaunay argument polynomials in JCE, lowest order first: mean elongation of
/// the moon (D), mean anomaly of the sun (M), mean anomaly of the moon (M'),
/// moon's argument of latitude (F) and longitude of the moon's ascending node (Ω).
pub(crate) const DELAUNAY_COEFFS: [[f64; 4]; 5] = [
    [297.85036, 445267.111480, -0.0019142, 1.0 / 189474.0],
    [357.52772, 35999.050340, -0.0001603, -1.0 / 300000.0],
    [134.96298, 477198.867398, 0.0086972, 1.0 / 56250.0],
    [93.27191, 483202.017538, -0.0036825, 1.0 / 327270.0],
    [125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0],
];

/// Mean obliquity of the ecliptic in arcseconds as a polynomial in `U = JME / 10`.
pub(crate) const OBLIQUITY_COEFFS: &[f64] = &[
    84381.448, -4680.96, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

const L0: &[PeriodicTerm] = &[
    PeriodicTerm(175347046.0, 0.0, 0.0),
    PeriodicTerm(3341656.0, 4.6692568, 6283.07585),
    PeriodicTerm(34894.0, 4.6261, 12566.1517),
    PeriodicTerm(3497.0, 2.7441, 5753.3849),
    PeriodicTerm(3418.0, 2.8289, 3.5231),
    PeriodicTerm(3136.0, 3.6277, 77713.7715),
    PeriodicTerm(2676.0, 4.4181, 7860.4194),
    PeriodicTerm(2343.0, 6.1352, 3930.2097),
    PeriodicTerm(1324.0, 0.7425, 11506.7698),
    PeriodicTerm(1273.0, 2.0371, 529.691),
    PeriodicTerm(1199.0, 1.1096, 1577.3435),
    PeriodicTerm(990.0, 5.233, 5884.927),
    PeriodicTerm(902.0, 2.045, 26.298),
    PeriodicTerm(857.0, 3.508, 398.149),
    PeriodicTerm(780.0, 1.179, 5223.694),
    PeriodicTerm(753.0, 2.533, 5507.553),
    PeriodicTerm(505.0, 4.583, 18849.228),
    PeriodicTerm(492.0, 4.205, 775.523),
    PeriodicTerm(357.0, 2.92, 0.067),
    PeriodicTerm(317.0, 5.849, 11790.629),
    PeriodicTerm(284.0, 1.899, 796.298),
    PeriodicTerm(271.0, 0.315, 10977.079),
    PeriodicTerm(243.0, 0.345, 5486.778),
    PeriodicTerm(206.0, 4.806, 2544.314),
    PeriodicTerm(205.0, 1.869, 5573.143),
    PeriodicTerm(202.0, 2.458, 6069.777),
    PeriodicTerm(156.0, 0.833, 213.299),
    PeriodicTerm(132.0, 3.411, 2942.463),
    PeriodicTerm(126.0, 1.083, 20.775),
    PeriodicTerm(115.0, 0.645, 0.98),
    PeriodicTerm(103.0, 0.636, 4694.003),
    PeriodicTerm(102.0, 0.976, 15720.839),
    PeriodicTerm(102.0, 4.267, 7.114),
    PeriodicTerm(99.0, 6.21, 2146.17),
    PeriodicTerm(98.0, 0.68, 155.42),
    PeriodicTerm(86.0, 5.98, 161000.69),
    PeriodicTerm(85.0, 1.3, 6275.96),
    PeriodicTerm(85.0, 3.67, 71430.7),
    PeriodicTerm(80.0, 1.81, 17260.15),
    PeriodicTerm(79.0, 3.04, 12036.46),
    PeriodicTerm(75.0, 1.76, 5088.63),
    PeriodicTerm(74.0, 3.5, 3154.69),
    PeriodicTerm(74.0, 4.68, 801.82),
    PeriodicTerm(70.0, 0.83, 9437.76),
    PeriodicTerm(62.0, 3.98, 8827.39),
    PeriodicTerm(61.0, 1.82, 7084.9),
    PeriodicTerm(57.0, 2.78, 6286.6),
    PeriodicTerm(56.0, 4.39, 14143.5),
    PeriodicTerm(56.0, 3.47, 6279.55),
    PeriodicTerm(52.0, 0.19, 12139.55),
    PeriodicTerm(52.0, 1.33, 1748.02),
    PeriodicTerm(51.0, 0.28, 5856.48),
    PeriodicTerm(49.0, 0.49, 1194.45),
    PeriodicTerm(41.0, 5.37, 8429.24),
    PeriodicTerm(41.0, 2.4, 19651.05),
    PeriodicTerm(39.0, 6.17, 10447.39),
    PeriodicTerm(37.0, 6.04, 10213.29),
    PeriodicTerm(37.0, 2.57, 1059.38),
    PeriodicTerm(36.0, 1.71, 2352.87),
    PeriodicTerm(36.0, 1.78, 6812.77),
    PeriodicTerm(33.0, 0.59, 17789.85),
    PeriodicTerm(30.0, 0.44, 83996.85),
    PeriodicTerm(30.0, 2.74, 1349.87),
    PeriodicTerm(25.0, 3.16, 4690.48),
];

const L1: &[PeriodicTerm] = &[
    PeriodicTerm(628331966747.0, 0.0, 0.0),
    PeriodicTerm(206059.0, 2.678235, 6283.07585),
    PeriodicTerm(4303.0, 2.6351, 12566.1517),
    PeriodicTerm(425.0, 1.59, 3.523),
    PeriodicTerm(119.0, 5.796, 26.298),
    PeriodicTerm(109.0, 2.966, 1577.344),
    PeriodicTerm(93.0, 2.59, 18849.23),
    PeriodicTerm(72.0, 1.14, 529.69),
    PeriodicTerm(68.0, 1.87, 398.15),
    PeriodicTerm(67.0, 4.41, 5507.55),
    PeriodicTerm(59.0, 2.89, 5223.69),
    PeriodicTerm(56.0, 2.17, 155.42),
    PeriodicTerm(45.0, 0.4, 796.3),
    PeriodicTerm(36.0, 0.47, 775.52),
    PeriodicTerm(29.0, 2.65, 7.11),
    PeriodicTerm(21.0, 5.34, 0.98),
    PeriodicTerm(19.0, 1.85, 5486.78),
    PeriodicTerm(19.0, 4.97, 213.3),
    PeriodicTerm(17.0, 2.99, 6275.96),
    PeriodicTerm(16.0, 0.03, 2544.31),
    PeriodicTerm(16.0, 1.43, 2146.17),
    PeriodicTerm(15.0, 1.21, 10977.08),
    PeriodicTerm(12.0, 2.83, 1748.02),
    PeriodicTerm(12.0, 3.26, 5088.63),
    PeriodicTerm(12.0, 5.27, 1194.45),
    PeriodicTerm(12.0, 2.08, 4694.0),
    PeriodicTerm(11.0, 0.77, 553.57),
    PeriodicTerm(10.0, 1.3, 6286.6),
    PeriodicTerm(10.0, 4.24, 1349.87),
    PeriodicTerm(9.0, 2.7, 242.73),
    PeriodicTerm(9.0, 5.64, 951.72),
    PeriodicTerm(8.0, 5.3, 2352.87),
    PeriodicTerm(6.0, 2.65, 9437.76),
    PeriodicTerm(6.0, 4.67, 4690.48),
];

const L2: &[PeriodicTerm] = &[
    PeriodicTerm(52919.0, 0.0, 0.0),
    PeriodicTerm(8720.0, 1.0721, 6283.0758),
    PeriodicTerm(309.0, 0.867, 12566.152),
    PeriodicTerm(27.0, 0.05, 3.52),
    PeriodicTerm(16.0, 5.19, 26.3),
    PeriodicTerm(16.0, 3.68, 155.42),
    PeriodicTerm(10.0, 0.76, 18849.23),
    PeriodicTerm(9.0, 2.06, 77713.77),
    PeriodicTerm(7.0, 0.83, 775.52),
    PeriodicTerm(5.0, 4.66, 1577.34),
    PeriodicTerm(4.0, 1.03, 7.11),
    PeriodicTerm(4.0, 3.44, 5573.14),
    PeriodicTerm(3.0, 5.14, 796.3),
    PeriodicTerm(3.0, 6.05, 5507.55),
    PeriodicTerm(3.0, 1.19, 242.73),
    PeriodicTerm(3.0, 6.12, 529.69),
    PeriodicTerm(3.0, 0.31, 398.15),
    PeriodicTerm(3.0, 2.28, 553.57),
    PeriodicTerm(2.0, 4.38, 5223.69),
    PeriodicTerm(2.0, 3.75, 0.98),
];

const L3: &[PeriodicTerm] = &[
    PeriodicTerm(289.0, 5.844, 6283.076),
    PeriodicTerm(35.0, 0.0, 0.0),
    PeriodicTerm(17.0, 5.49, 12566.15),
    PeriodicTerm(3.0, 5.2, 155.42),
    PeriodicTerm(1.0, 4.72, 3.52),
    PeriodicTerm(1.0, 5.3, 18849.23),
    PeriodicTerm(1.0, 5.97, 242.73),
];

const L4: &[PeriodicTerm] = &[
    PeriodicTerm(114.0, 3.142, 0.0),
    PeriodicTerm(8.0, 4.13, 6283.08),
    PeriodicTerm(1.0, 3.84, 12566.15),
];

const L5: &[PeriodicTerm] = &[
    PeriodicTerm(1.0, 3.14, 0.0),
];

/// Earth heliocentric longitude series, L0 through L5.
pub(crate) const L_SERIES: &[&[PeriodicTerm]] = &[L0, L1, L2, L3, L4, L5];

const B0: &[PeriodicTerm] = &[
    PeriodicTerm(280.0, 3.199, 84334.662),
    PeriodicTerm(102.0, 5.422, 5507.553),
    PeriodicTerm(80.0, 3.88, 5223.69),
    PeriodicTerm(44.0, 3.7, 2352.87),
    PeriodicTerm(32.0, 4.0, 1577.34),
];

const B1: &[PeriodicTerm] = &[
    PeriodicTerm(9.0, 3.9, 5507.55),
    PeriodicTerm(6.0, 1.73, 5223.69),
];

/// Earth heliocentric latitude series, B0 and B1.
pub(crate) const B_SERIES: &[&[PeriodicTerm]] = &[B0, B1];

const R0: &[PeriodicTerm] = &[
    PeriodicTerm(100013989.0, 0.0, 0.0),
    PeriodicTerm(1670700.0, 3.0984635, 6283.07585),
    PeriodicTerm(13956.0, 3.05525, 12566.1517),
    PeriodicTerm(3084.0, 5.1985, 77713.7715),
    PeriodicTerm(1628.0, 1.1739, 5753.3849),
    PeriodicTerm(1576.0, 2.8469, 7860.4194),
    PeriodicTerm(925.0, 5.453, 11506.77),
    PeriodicTerm(542.0, 4.564, 3930.21),
    PeriodicTerm(472.0, 3.661, 5884.927),
    PeriodicTerm(346.0, 0.964, 5507.553),
    PeriodicTerm(329.0, 5.9, 5223.694),
    PeriodicTerm(307.0, 0.299, 5573.143),
    PeriodicTerm(243.0, 4.273, 11790.629),
    PeriodicTerm(212.0, 5.847, 1577.344),
    PeriodicTerm(186.0, 5.022, 10977.079),
    PeriodicTerm(175.0, 3.012, 18849.228),
    PeriodicTerm(110.0, 5.055, 5486.778),
    PeriodicTerm(98.0, 0.89, 6069.78),
    PeriodicTerm(86.0, 5.69, 15720.84),
    PeriodicTerm(86.0, 1.27, 161000.69),
    PeriodicTerm(65.0, 0.27, 17260.15),
    PeriodicTerm(63.0, 0.92, 529.69),
    PeriodicTerm(57.0, 2.01, 83996.85),
    PeriodicTerm(56.0, 5.24, 71430.7),
    PeriodicTerm(49.0, 3.25, 2544.31),
    PeriodicTerm(47.0, 2.58, 775.52),
    PeriodicTerm(45.0, 5.54, 9437.76),
    PeriodicTerm(43.0, 6.01, 6275.96),
    PeriodicTerm(39.0, 5.36, 4694.0),
    PeriodicTerm(38.0, 2.39, 8827.39),
    PeriodicTerm(37.0, 0.83, 19651.05),
    PeriodicTerm(37.0, 4.9, 12139.55),
    PeriodicTerm(36.0, 1.67, 12036.46),
    PeriodicTerm(35.0, 1.84, 2942.46),
    PeriodicTerm(33.0, 0.24, 7084.9),
    PeriodicTerm(32.0, 0.18, 5088.63),
    PeriodicTerm(32.0, 1.78, 398.15),
    PeriodicTerm(28.0, 1.21, 6286.6),
    PeriodicTerm(28.0, 1.9, 6279.55),
    PeriodicTerm(26.0, 4.59, 10447.39),
];

const R1: &[PeriodicTerm] = &[
    PeriodicTerm(103019.0, 1.10749, 6283.07585),
    PeriodicTerm(1721.0, 1.0644, 12566.1517),
    PeriodicTerm(702.0, 3.142, 0.0),
    PeriodicTerm(32.0, 1.02, 18849.23),
    PeriodicTerm(31.0, 2.84, 5507.55),
    PeriodicTerm(25.0, 1.32, 5223.69),
    PeriodicTerm(18.0, 1.42, 1577.34),
    PeriodicTerm(10.0, 5.91, 10977.08),
    PeriodicTerm(9.0, 1.42, 6275.96),
    PeriodicTerm(9.0, 0.27, 5486.78),
];

const R2: &[PeriodicTerm] = &[
    PeriodicTerm(4359.0, 5.7846, 6283.0758),
    PeriodicTerm(124.0, 5.579, 12566.152),
    PeriodicTerm(12.0, 3.14, 0.0),
    PeriodicTerm(9.0, 3.63, 77713.77),
    PeriodicTerm(6.0, 1.87, 5573.14),
    PeriodicTerm(3.0, 5.47, 18849.23),
];

const R3: &[PeriodicTerm] = &[
    PeriodicTerm(145.0, 4.273, 6283.076),
    PeriodicTerm(7.0, 3.92, 12566.15),
];

const R4: &[PeriodicTerm] = &[
    PeriodicTerm(4.0, 2.56, 6283.08),
];

/// Earth radius vector series, R0 through R4.
pub(crate) const R_SERIES: &[&[PeriodicTerm]] = &[R0, R1, R2, R3, R4];

/// Nutation series: argument multipliers for (D, M, M', F, Ω) followed by
/// the longitude (a, b) and obliquity (c, d) coefficients in 0.0001″.
pub(crate) const NUTATION_SERIES: &[NutationTerm] = &[
    NutationTerm([0, 0, 0, 0, 1], -171996.0, -174.2, 92025.0, 8.9),
    NutationTerm([-2, 0, 0, 2, 2], -13187.0, -1.6, 5736.0, -3.1),
    NutationTerm([0, 0, 0, 2, 2], -2274.0, -0.2, 977.0, -0.5),
    NutationTerm([0, 0, 0, 0, 2], 2062.0, 0.2, -895.0, 0.5),
    NutationTerm([0, 1, 0, 0, 0], 1426.0, -3.4, 54.0, -0.1),
    NutationTerm([0, 0, 1, 0, 0], 712.0, 0.1, -7.0, 0.0),
    NutationTerm([-2, 1, 0, 2, 2], -517.0, 1.2, 224.0, -0.6),
    NutationTerm([0, 0, 0, 2, 1], -386.0, -0.4, 200.0, 0.0),
    NutationTerm([0, 0, 1, 2, 2], -301.0, 0.0, 129.0, -0.1),
    NutationTerm([-2, -1, 0, 2, 2], 217.0, -0.5, -95.0, 0.3),
    NutationTerm([-2, 0, 1, 0, 0], -158.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 0, 2, 1], 129.0, 0.1, -70.0, 0.0),
    NutationTerm([0, 0, -1, 2, 2], 123.0, 0.0, -53.0, 0.0),
    NutationTerm([2, 0, 0, 0, 0], 63.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, 1, 0, 1], 63.0, 0.1, -33.0, 0.0),
    NutationTerm([2, 0, -1, 2, 2], -59.0, 0.0, 26.0, 0.0),
    NutationTerm([0, 0, -1, 0, 1], -58.0, -0.1, 32.0, 0.0),
    NutationTerm([0, 0, 1, 2, 1], -51.0, 0.0, 27.0, 0.0),
    NutationTerm([-2, 0, 2, 0, 0], 48.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, -2, 2, 1], 46.0, 0.0, -24.0, 0.0),
    NutationTerm([2, 0, 0, 2, 2], -38.0, 0.0, 16.0, 0.0),
    NutationTerm([0, 0, 2, 2, 2], -31.0, 0.0, 13.0, 0.0),
    NutationTerm([0, 0, 2, 0, 0], 29.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 1, 2, 2], 29.0, 0.0, -12.0, 0.0),
    NutationTerm([0, 0, 0, 2, 0], 26.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 0, 2, 0], -22.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, -1, 2, 1], 21.0, 0.0, -10.0, 0.0),
    NutationTerm([0, 2, 0, 0, 0], 17.0, -0.1, 0.0, 0.0),
    NutationTerm([2, 0, -1, 0, 1], 16.0, 0.0, -8.0, 0.0),
    NutationTerm([-2, 2, 0, 2, 2], -16.0, 0.1, 7.0, 0.0),
    NutationTerm([0, 1, 0, 0, 1], -15.0, 0.0, 9.0, 0.0),
    NutationTerm([-2, 0, 1, 0, 1], -13.0, 0.0, 7.0, 0.0),
    NutationTerm([0, -1, 0, 0, 1], -12.0, 0.0, 6.0, 0.0),
    NutationTerm([0, 0, 2, -2, 0], 11.0, 0.0, 0.0, 0.0),
    NutationTerm([2, 0, -1, 2, 1], -10.0, 0.0, 5.0, 0.0),
    NutationTerm([2, 0, 1, 2, 2], -8.0, 0.0, 3.0, 0.0),
    NutationTerm([0, 1, 0, 2, 2], 7.0, 0.0, -3.0, 0.0),
    NutationTerm([-2, 1, 1, 0, 0], -7.0, 0.0, 0.0, 0.0),
    NutationTerm([0, -1, 0, 2, 2], -7.0, 0.0, 3.0, 0.0),
    NutationTerm([2, 0, 0, 2, 1], -7.0, 0.0, 3.0, 0.0),
    NutationTerm([2, 0, 1, 0, 0], 6.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 2, 2, 2], 6.0, 0.0, -3.0, 0.0),
    NutationTerm([-2, 0, 1, 2, 1], 6.0, 0.0, -3.0, 0.0),
    NutationTerm([2, 0, -2, 0, 1], -6.0, 0.0, 3.0, 0.0),
    NutationTerm([2, 0, 0, 0, 1], -6.0, 0.0, 3.0, 0.0),
    NutationTerm([0, -1, 1, 0, 0], 5.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, -1, 0, 2, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm([-2, 0, 0, 0, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm([0, 0, 2, 2, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm([-2, 0, 2, 0, 1], 4.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 1, 0, 2, 1], 4.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, 1, -2, 0], 4.0, 0.0, 0.0, 0.0),
    NutationTerm([-1, 0, 1, 0, 0], -4.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 1, 0, 0, 0], -4.0, 0.0, 0.0, 0.0),
    NutationTerm([1, 0, 0, 0, 0], -4.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, 1, 2, 0], 3.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, -2, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm([-1, -1, 1, 0, 0], -3.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 1, 1, 0, 0], -3.0, 0.0, 0.0, 0.0),
    NutationTerm([0, -1, 1, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm([2, -1, -1, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, 3, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm([2, -1, 0, 2, 2], -3.0, 0.0, 0.0, 0.0),
];
