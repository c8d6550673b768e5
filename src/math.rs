//! Mathematical utilities for the sunrise equation.
//!
//! The solve works in degrees throughout; radians appear only at the
//! transcendental call sites wrapped here. Under `std` the wrappers use
//! native float methods, otherwise they dispatch to `libm`.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

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

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arctangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Brings an angle into [0, 360) by a single add/subtract of 360.
///
/// Deliberately not a modulo: the sunrise equation produces angles at
/// most one period outside the target range and the classical reference
/// corrects them with a single step. The assertion documents that
/// assumption rather than widening the correction.
#[inline]
pub fn wrap_degrees_360(degrees: f64) -> f64 {
    let wrapped = if degrees < 0.0 {
        degrees + 360.0
    } else if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    };
    debug_assert!(
        !wrapped.is_finite() || (0.0..360.0).contains(&wrapped),
        "angle {degrees} not within one period of [0, 360)"
    );
    wrapped
}

/// Brings an hour value into [0, 24) by a single add/subtract of 24.
///
/// Same single-correction contract as [`wrap_degrees_360`].
#[inline]
pub fn wrap_hours_24(hours: f64) -> f64 {
    let wrapped = if hours < 0.0 {
        hours + 24.0
    } else if hours >= 24.0 {
        hours - 24.0
    } else {
        hours
    };
    debug_assert!(
        !wrapped.is_finite() || (0.0..24.0).contains(&wrapped),
        "hour value {hours} not within one period of [0, 24)"
    );
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - core::f64::consts::PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - core::f64::consts::FRAC_PI_2).abs() < EPSILON);
        assert!((radians_to_degrees(core::f64::consts::PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_degree_mode_trig() {
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(180.0) + 1.0).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);
        assert!((asin_deg(1.0) - 90.0).abs() < EPSILON);
        assert!((acos_deg(-1.0) - 180.0).abs() < EPSILON);
        assert!((atan_deg(1.0) - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_wrap_degrees_single_step() {
        assert_eq!(wrap_degrees_360(0.0), 0.0);
        assert_eq!(wrap_degrees_360(359.9), 359.9);
        assert_eq!(wrap_degrees_360(360.0), 0.0);
        assert_eq!(wrap_degrees_360(449.5), 89.5);
        assert_eq!(wrap_degrees_360(-0.5), 359.5);
    }

    #[test]
    fn test_wrap_hours_single_step() {
        assert_eq!(wrap_hours_24(12.0), 12.0);
        assert_eq!(wrap_hours_24(24.0), 0.0);
        assert_eq!(wrap_hours_24(-3.5), 20.5);
        assert_eq!(wrap_hours_24(27.25), 3.25);
    }
}
