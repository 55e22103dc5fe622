//! Boundary validation for calculator inputs
//!
//! Every public calculator checks its parameters here before computing,
//! so garbage never reaches the compounding loops.

use crate::error::{Result, SimError};

/// Reject NaN and infinities
pub fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

/// Reject negative or non-finite amounts
pub fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(SimError::InvalidParameter {
            field,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

/// Reject zero, negative or non-finite amounts
pub fn positive(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(SimError::InvalidParameter {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Parse a monetary amount typed by a user.
///
/// Accepts surrounding whitespace and a decimal comma (`1500,50`).
/// Empty or garbled text is an error rather than a silent NaN.
pub fn parse_amount(field: &'static str, input: &str) -> Result<f64> {
    let value = parse_number(field, input)?;
    non_negative(field, value)
}

/// Parse an annual rate in percent. Negative rates are legal.
pub fn parse_rate(field: &'static str, input: &str) -> Result<f64> {
    let value = parse_number(field, input)?;
    finite(field, value)
}

/// Parse a whole number of years
pub fn parse_years(field: &'static str, input: &str) -> Result<u32> {
    input.trim().parse::<u32>().map_err(|_| SimError::Parse {
        field,
        input: input.to_string(),
    })
}

fn parse_number(field: &'static str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SimError::Parse {
            field,
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_rejects_negative_and_nan() {
        assert!(non_negative("x", -0.01).is_err());
        assert!(non_negative("x", f64::NAN).is_err());
        assert!(non_negative("x", f64::INFINITY).is_err());
        assert_eq!(non_negative("x", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(positive("target", 0.0).is_err());
        assert_eq!(positive("target", 1.5).unwrap(), 1.5);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount", " 1000 ").unwrap(), 1000.0);
        assert_eq!(parse_amount("amount", "1500,50").unwrap(), 1500.5);
        assert!(matches!(parse_amount("amount", ""), Err(SimError::Parse { .. })));
        assert!(matches!(parse_amount("amount", "12abc"), Err(SimError::Parse { .. })));
        assert!(matches!(parse_amount("amount", "NaN"), Err(SimError::Parse { .. })));
        assert!(matches!(
            parse_amount("amount", "-3"),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_parse_rate_allows_negative() {
        assert_eq!(parse_rate("rate", "-2.5").unwrap(), -2.5);
        assert!(parse_rate("rate", "inf").is_err());
    }

    #[test]
    fn test_parse_years() {
        assert_eq!(parse_years("years", "10").unwrap(), 10);
        assert!(parse_years("years", "-1").is_err());
        assert!(parse_years("years", "2.5").is_err());
    }
}
