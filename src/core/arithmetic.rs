//! Pure arithmetic on `f64`. Only `divide` and `square_root` can fail.

use crate::utils::error::{CalcError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Rejects both `0.0` and `-0.0` divisors. A NaN divisor passes through.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::invalid_argument("Cannot divide by zero"));
    }
    Ok(a / b)
}

/// IEEE remainder with the sign of the dividend. No zero guard: `modulus(a, 0.0)` is NaN.
pub fn modulus(a: f64, b: f64) -> f64 {
    a % b
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn square_root(number: f64) -> Result<f64> {
    if number < 0.0 {
        return Err(CalcError::invalid_argument(
            "Cannot take square root of a negative number",
        ));
    }
    Ok(number.sqrt())
}

pub fn absolute(number: f64) -> f64 {
    number.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(-4.0, 2.5), -10.0);
        assert_eq!(divide(9.0, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        assert!(matches!(
            divide(1.0, 0.0),
            Err(CalcError::InvalidArgument { .. })
        ));
        assert!(divide(1.0, -0.0).is_err());
        assert!(divide(0.0, 0.0).is_err());
        assert!(divide(1.0, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_modulus_follows_dividend_sign() {
        assert_eq!(modulus(7.0, 3.0), 1.0);
        assert_eq!(modulus(-7.0, 3.0), -1.0);
        assert_eq!(modulus(7.0, -3.0), 1.0);
        assert_eq!(modulus(5.5, 2.0), 1.5);
        assert!(modulus(5.0, 0.0).is_nan());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(2.0, -1.0), 0.5);
        assert!((power(9.0, 0.5) - 3.0).abs() < 1e-12);
        assert_eq!(power(0.0, 0.0), 1.0);
        assert!(power(-8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(4.0).unwrap(), 2.0);
        assert_eq!(square_root(0.0).unwrap(), 0.0);
        assert!(square_root(-1.0).is_err());
        assert!(square_root(f64::NEG_INFINITY).is_err());
        assert!(square_root(f64::NAN).unwrap().is_nan());
        let negative_zero = square_root(-0.0).unwrap();
        assert!(negative_zero == 0.0 && negative_zero.is_sign_negative());
    }

    #[test]
    fn test_absolute() {
        assert_eq!(absolute(-5.0), 5.0);
        assert_eq!(absolute(5.0), 5.0);
        assert!(absolute(-0.0).is_sign_positive());
    }
}
