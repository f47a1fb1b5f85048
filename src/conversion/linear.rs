//! Linear (scalar ratio) conversion

use super::error::{ensure_finite_result, ensure_non_negative, ConversionError, ConversionResult};
use super::units::ConversionTable;

/// Convert `value` between two units of the same linear table
///
/// `result = value * (factor[to] / factor[from])`. Either unit missing from
/// the table is an unsupported pair.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    table: &ConversionTable,
) -> ConversionResult<f64> {
    ensure_non_negative(value, "Value")?;

    let (Some(from), Some(to)) = (table.lookup(from_unit), table.lookup(to_unit)) else {
        return Err(ConversionError::unsupported_pair(
            table.category,
            from_unit,
            to_unit,
        ));
    };

    // Same unit (possibly spelled differently) is exact, no rounding drift
    if from.name == to.name {
        return Ok(value);
    }

    ensure_finite_result(value * (to.factor / from.factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::units::{UnitCategory, DATA_STORAGE, LENGTH, WEIGHT};

    #[test]
    fn test_meters_to_feet() {
        let feet = convert(1.0, "Meters", "Feet", &LENGTH).unwrap();
        assert!((feet - 3.28084).abs() < 1e-9);
    }

    #[test]
    fn test_kilograms_to_pounds() {
        let pounds = convert(10.0, "Kilograms", "Pounds", &WEIGHT).unwrap();
        assert!((pounds - 22.0462).abs() < 1e-9);
    }

    #[test]
    fn test_kilometers_to_miles() {
        let miles = convert(5.0, "km", "mi", &LENGTH).unwrap();
        assert!((miles - 3.106855).abs() < 1e-6);
    }

    #[test]
    fn test_identity_for_every_unit() {
        for category in UnitCategory::ALL {
            let Some(table) = category.table() else { continue };
            for unit in table.units {
                assert_eq!(convert(42.5, unit.name, unit.name, table).unwrap(), 42.5);
                assert_eq!(convert(42.5, unit.name, unit.symbol, table).unwrap(), 42.5);
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for category in UnitCategory::ALL {
            let Some(table) = category.table() else { continue };
            for a in table.units {
                for b in table.units {
                    for x in [0.0, 1.0, 12.34, 98765.0] {
                        let there = convert(x, a.name, b.name, table).unwrap();
                        let back = convert(there, b.name, a.name, table).unwrap();
                        let tolerance = 1e-9 * x.max(1.0);
                        assert!(
                            (back - x).abs() <= tolerance,
                            "{} {} -> {} -> back = {}",
                            x,
                            a.name,
                            b.name,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_is_unsupported() {
        let err = convert(1.0, "Meters", "Furlongs", &LENGTH).unwrap_err();
        assert_eq!(
            err,
            ConversionError::unsupported_pair(UnitCategory::Length, "Meters", "Furlongs")
        );

        // Units from another category are not in this table
        assert!(convert(1.0, "Kilograms", "Feet", &LENGTH).is_err());
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = convert(-1.0, "Meters", "Feet", &LENGTH).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
    }

    #[test]
    fn test_overflowing_result_rejected() {
        let err = convert(1e300, "Terabytes", "Bytes", &DATA_STORAGE).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));

        // Large values that still fit convert normally
        assert!(convert(1e290, "Terabytes", "Bytes", &DATA_STORAGE).is_ok());
    }

    #[test]
    fn test_zero_converts_to_zero() {
        assert_eq!(convert(0.0, "Miles", "Inches", &LENGTH).unwrap(), 0.0);
    }
}
