//! Machine-derived `f64` constants for overflow/underflow-safe scaling.
//!
//! All values are exact powers of two computed from the IEEE-754 binary64
//! exponent range, so no rounding enters the scaling arithmetic.

const MIN_EXP: i32 = f64::MIN_EXP;
const MAX_EXP: i32 = f64::MAX_EXP;
const DIGITS: i32 = f64::MANTISSA_DIGITS as i32;

/// `2^exp` for a normal-range exponent.
const fn pow2(exp: i32) -> f64 {
    assert!(exp >= -1022 && exp <= 1023);
    f64::from_bits(((exp + 1023) as u64) << 52)
}

const fn floor_half(v: i32) -> i32 {
    v.div_euclid(2)
}

const fn ceil_half(v: i32) -> i32 {
    -(-v).div_euclid(2)
}

/// Blue's small threshold: values below it are squared after scaling up.
pub const TSML: f64 = pow2(ceil_half(MIN_EXP - 1));
/// Blue's big threshold: values above it are squared after scaling down.
pub const TBIG: f64 = pow2(floor_half(MAX_EXP - DIGITS + 1));
/// Scale applied to small values before squaring.
pub const SSML: f64 = pow2(-floor_half(MIN_EXP - DIGITS));
/// Scale applied to big values before squaring.
pub const SBIG: f64 = pow2(-ceil_half(MAX_EXP + DIGITS - 1));

/// Smallest scale a Givens hypotenuse is computed at.
pub const SAFMIN: f64 = pow2(max_i32(MIN_EXP - 1, 1 - MAX_EXP));
/// Largest scale a Givens hypotenuse is computed at.
pub const SAFMAX: f64 = pow2(max_i32(1 - MIN_EXP, MAX_EXP - 1));

const fn max_i32(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}
