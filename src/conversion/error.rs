//! Conversion error types

use thiserror::Error;

use super::units::UnitCategory;

/// Errors reported by every converter in this crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Non-finite, negative or zero where a positive value is required
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Unit or currency pair not present in the relevant table
    #[error("Unsupported {category} conversion: '{from}' to '{to}'")]
    UnsupportedUnitPair {
        category: UnitCategory,
        from: String,
        to: String,
    },

    /// Category name that does not match any known category
    #[error("Unknown conversion category: '{0}'")]
    UnknownCategory(String),

    /// Category has no unit-pair conversion (BMI)
    #[error("{category} has no unit-to-unit conversion")]
    Unimplemented { category: UnitCategory },
}

impl ConversionError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn unsupported_pair(category: UnitCategory, from: &str, to: &str) -> Self {
        Self::UnsupportedUnitPair {
            category,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Reject NaN/infinite values and, for physical quantities, negatives
pub(crate) fn ensure_non_negative(value: f64, what: &str) -> ConversionResult<()> {
    if !value.is_finite() {
        return Err(ConversionError::invalid_input(format!(
            "{} must be a finite number",
            what
        )));
    }
    if value < 0.0 {
        return Err(ConversionError::invalid_input(format!(
            "{} cannot be negative (got {})",
            what, value
        )));
    }
    Ok(())
}

/// Reject results that overflowed the f64 range
pub(crate) fn ensure_finite_result(result: f64) -> ConversionResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::invalid_input(
            "Result is out of range for a finite number",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConversionError::unsupported_pair(UnitCategory::Currency, "INR", "USD");
        assert_eq!(
            err.to_string(),
            "Unsupported Currency conversion: 'INR' to 'USD'"
        );

        let err = ConversionError::Unimplemented {
            category: UnitCategory::Bmi,
        };
        assert_eq!(err.to_string(), "BMI has no unit-to-unit conversion");
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative(0.0, "Value").is_ok());
        assert!(ensure_non_negative(12.5, "Value").is_ok());
        assert!(matches!(
            ensure_non_negative(-1.0, "Value"),
            Err(ConversionError::InvalidInput { .. })
        ));
        assert!(ensure_non_negative(f64::NAN, "Value").is_err());
        assert!(ensure_non_negative(f64::INFINITY, "Value").is_err());
    }

    #[test]
    fn test_ensure_finite_result() {
        assert_eq!(ensure_finite_result(1.5), Ok(1.5));
        assert!(matches!(
            ensure_finite_result(f64::INFINITY),
            Err(ConversionError::InvalidInput { .. })
        ));
        assert!(ensure_finite_result(f64::NAN).is_err());
    }
}
