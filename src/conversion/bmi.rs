//! Body Mass Index calculator
//!
//! The published classification leaves a gap between the upper bound of
//! "Normal" (24.9, exclusive) and the lower bound of "Overweight" (25.0,
//! inclusive). Values in that gap fall through to "Above healthy range",
//! as do values at or above 29.9. The gap is reported explicitly on the
//! [`BmiReport`] rather than being silently folded into a class.

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite_result, ConversionError, ConversionResult};

/// Below this value is Underweight
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// Normal is `[UNDERWEIGHT_BELOW, NORMAL_BELOW)`
pub const NORMAL_BELOW: f64 = 24.9;
/// Overweight is `[OVERWEIGHT_FROM, OVERWEIGHT_BELOW)`
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OVERWEIGHT_BELOW: f64 = 29.9;

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    AboveHealthyRange,
}

impl BmiClass {
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiClass::Underweight
        } else if bmi < NORMAL_BELOW {
            BmiClass::Normal
        } else if (OVERWEIGHT_FROM..OVERWEIGHT_BELOW).contains(&bmi) {
            BmiClass::Overweight
        } else {
            BmiClass::AboveHealthyRange
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal",
            BmiClass::Overweight => "Overweight",
            BmiClass::AboveHealthyRange => "Above healthy range",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Focus on a nutritious diet!",
            BmiClass::Normal => "Your BMI is in the healthy range - stay healthy!",
            BmiClass::Overweight => "Focus on a balanced diet and exercise!",
            BmiClass::AboveHealthyRange => "Consider a healthier routine!",
        }
    }
}

/// True for values between the Normal and Overweight bounds
pub fn in_boundary_gap(bmi: f64) -> bool {
    (NORMAL_BELOW..OVERWEIGHT_FROM).contains(&bmi)
}

/// `weight / height²`, both strictly positive
pub fn bmi(weight_kg: f64, height_m: f64) -> ConversionResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ConversionError::invalid_input(format!(
            "Weight must be a positive number of kilograms (got {})",
            weight_kg
        )));
    }
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(ConversionError::invalid_input(format!(
            "Height must be a positive number of meters (got {})",
            height_m
        )));
    }
    ensure_finite_result(weight_kg / (height_m * height_m))
}

/// Computed BMI with its classification
#[derive(Debug, Clone, Serialize)]
pub struct BmiReport {
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    /// BMI rounded to two decimals for display
    pub bmi_display: String,
    pub class: BmiClass,
    pub class_display: &'static str,
    pub advice: &'static str,
    /// Value sits in the unclassified gap between Normal and Overweight
    pub in_boundary_gap: bool,
    /// Result in the healthy range
    pub celebrate: bool,
}

impl BmiReport {
    pub fn calculate(weight_kg: f64, height_m: f64) -> ConversionResult<Self> {
        let value = bmi(weight_kg, height_m)?;
        let class = BmiClass::classify(value);
        Ok(Self {
            weight_kg,
            height_m,
            bmi: value,
            bmi_display: format!("{:.2}", value),
            class,
            class_display: class.display_name(),
            advice: class.advice(),
            in_boundary_gap: in_boundary_gap(value),
            celebrate: class == BmiClass::Normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal_examples() {
        let report = BmiReport::calculate(70.0, 1.75).unwrap();
        assert!((report.bmi - 22.857).abs() < 0.001);
        assert_eq!(report.class, BmiClass::Normal);
        assert_eq!(report.bmi_display, "22.86");
        assert!(report.celebrate);

        let report = BmiReport::calculate(50.0, 1.60).unwrap();
        assert!((report.bmi - 19.53).abs() < 0.01);
        assert_eq!(report.class, BmiClass::Normal);
    }

    #[test]
    fn test_classification_bounds() {
        assert_eq!(BmiClass::classify(18.49), BmiClass::Underweight);
        assert_eq!(BmiClass::classify(18.5), BmiClass::Normal);
        assert_eq!(BmiClass::classify(24.89), BmiClass::Normal);
        assert_eq!(BmiClass::classify(25.0), BmiClass::Overweight);
        assert_eq!(BmiClass::classify(29.89), BmiClass::Overweight);
        assert_eq!(BmiClass::classify(29.9), BmiClass::AboveHealthyRange);
        assert_eq!(BmiClass::classify(35.0), BmiClass::AboveHealthyRange);
    }

    #[test]
    fn test_boundary_gap_is_flagged() {
        assert_eq!(BmiClass::classify(24.9), BmiClass::AboveHealthyRange);
        assert_eq!(BmiClass::classify(24.95), BmiClass::AboveHealthyRange);
        assert!(in_boundary_gap(24.9));
        assert!(in_boundary_gap(24.95));
        assert!(!in_boundary_gap(25.0));
        assert!(!in_boundary_gap(30.0));

        // 24.95 * 2.0^2 = 99.8
        let report = BmiReport::calculate(99.8, 2.0).unwrap();
        assert!(report.in_boundary_gap);
        assert_eq!(report.class, BmiClass::AboveHealthyRange);
        assert!(!report.celebrate);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(bmi(0.0, 1.75), Err(ConversionError::InvalidInput { .. })));
        assert!(matches!(bmi(70.0, 0.0), Err(ConversionError::InvalidInput { .. })));
        assert!(bmi(-70.0, 1.75).is_err());
        assert!(bmi(70.0, -1.75).is_err());
        assert!(bmi(f64::NAN, 1.75).is_err());
    }

    #[test]
    fn test_overflowing_bmi_rejected() {
        // Height squares to 0.0
        assert!(matches!(bmi(70.0, 1e-200), Err(ConversionError::InvalidInput { .. })));
        assert!(BmiReport::calculate(70.0, 1e-200).is_err());
        assert!(bmi(f64::MAX, 0.5).is_err());
    }
}
