// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for Statistical Computing*
//!
//! Mathematical constants for the Poisson kernel computations with hard-coded
//! precision. These constants support accurate probability computations in the
//! special-function layer.

/// Lanczos approximation coefficients for high-precision gamma function evaluation.
///
/// Optimised coefficient array for the Lanczos approximation to the gamma function
/// with parameters g=7 (auxiliary parameter) and n=9 (number of terms). These
/// coefficients enable log-gamma evaluation achieving near-machine precision
/// accuracy across the entire positive real domain and via reflection for negative arguments.
pub(crate) const COF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// One half of the natural logarithm of 2π: ½·ln(2π) ≈ 0.918938533204673.
///
/// Normalisation term of the Lanczos log-gamma approximation.
pub(crate) const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Acklam's inverse normal CDF approximation coefficients (numerator polynomial).
///
/// High-precision rational function coefficients for computing the inverse standard
/// normal cumulative distribution function Φ⁻¹(p) using Peter John Acklam's
/// minimax rational approximation. Provides near-machine precision accuracy
/// across the central probability region 0.02425 < p < 0.97575.
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (denominator polynomial).
///
/// Denominator coefficients for Peter John Acklam's rational function approximation
/// of the inverse standard normal cumulative distribution function. Used in conjunction
/// with the A array coefficients to form a complete minimax rational approximation
/// delivering near-machine precision accuracy for normal quantile computation.
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region numerator).
///
/// Specialised rational function coefficients for computing inverse normal quantiles
/// in the extreme tail regions where p < 0.02425 or p > 0.97575. These coefficients
/// enable accurate quantile computation for probabilities corresponding to beyond
/// approximately ±2σ from the mean, used by the quantile kernel's search seed.
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region denominator).
///
/// Denominator polynomial coefficients for the extreme tail regions of Acklam's
/// inverse normal approximation. These coefficients complete the rational function
/// used when computing quantiles for probabilities p < 0.02425 or p > 0.97575,
/// ensuring high accuracy in the distribution's extreme regions.
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower probability threshold for Acklam's inverse normal CDF approximation.
///
/// Critical breakpoint probability separating the central rational approximation
/// from the specialised tail region approximation in Acklam's inverse normal algorithm.
/// Corresponds to approximately -2σ in the standard normal distribution, optimising
/// the balance between computational efficiency and numerical precision.
pub(crate) const P_LOW: f64 = 0.02425; // lower & upper break-points (≈ 2 σ) ; P_HIGH: f64 = 1.0 - P_LOW;
