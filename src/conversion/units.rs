//! Unit categories and conversion tables
//!
//! Every linear category is a static table of factors expressed against one
//! implicit base unit (factor = units per base unit, so Feet is 3.28084 per
//! Meter). Table order is display order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Time,
    Speed,
    Area,
    Volume,
    DataStorage,
    Energy,
    Pressure,
    /// Body mass index calculator (not a unit pair conversion)
    Bmi,
    /// Currency converter backed by a rate table
    Currency,
}

impl UnitCategory {
    /// All categories in menu order
    pub const ALL: [UnitCategory; 12] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Time,
        UnitCategory::Speed,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::DataStorage,
        UnitCategory::Energy,
        UnitCategory::Pressure,
        UnitCategory::Currency,
        UnitCategory::Bmi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Time => "time",
            UnitCategory::Speed => "speed",
            UnitCategory::Area => "area",
            UnitCategory::Volume => "volume",
            UnitCategory::DataStorage => "data_storage",
            UnitCategory::Energy => "energy",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Bmi => "bmi",
            UnitCategory::Currency => "currency",
        }
    }

    /// Parse from a snake_case tag, a display name or a menu label
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "length" | "distance" => Some(UnitCategory::Length),
            "weight" | "mass" => Some(UnitCategory::Weight),
            "temperature" | "temp" => Some(UnitCategory::Temperature),
            "time" | "duration" => Some(UnitCategory::Time),
            "speed" | "velocity" => Some(UnitCategory::Speed),
            "area" => Some(UnitCategory::Area),
            "volume" => Some(UnitCategory::Volume),
            "data_storage" | "data" | "storage" => Some(UnitCategory::DataStorage),
            "energy" => Some(UnitCategory::Energy),
            "pressure" => Some(UnitCategory::Pressure),
            "bmi" | "bmi_calculator" | "body_mass_index" => Some(UnitCategory::Bmi),
            "currency" | "currency_converter" => Some(UnitCategory::Currency),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Time => "Time",
            UnitCategory::Speed => "Speed",
            UnitCategory::Area => "Area",
            UnitCategory::Volume => "Volume",
            UnitCategory::DataStorage => "Data Storage",
            UnitCategory::Energy => "Energy",
            UnitCategory::Pressure => "Pressure",
            UnitCategory::Bmi => "BMI",
            UnitCategory::Currency => "Currency",
        }
    }

    /// Whether conversion is a pure scalar ratio
    pub fn is_linear(&self) -> bool {
        self.table().is_some()
    }

    /// Factor table for linear categories
    pub fn table(&self) -> Option<&'static ConversionTable> {
        match self {
            UnitCategory::Length => Some(&LENGTH),
            UnitCategory::Weight => Some(&WEIGHT),
            UnitCategory::Time => Some(&TIME),
            UnitCategory::Speed => Some(&SPEED),
            UnitCategory::Area => Some(&AREA),
            UnitCategory::Volume => Some(&VOLUME),
            UnitCategory::DataStorage => Some(&DATA_STORAGE),
            UnitCategory::Energy => Some(&ENERGY),
            UnitCategory::Pressure => Some(&PRESSURE),
            UnitCategory::Temperature | UnitCategory::Bmi | UnitCategory::Currency => None,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One unit of a linear category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitFactor {
    /// Display name, unique within its table
    pub name: &'static str,
    pub symbol: &'static str,
    /// Units per base unit
    pub factor: f64,
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

impl UnitFactor {
    const fn new(
        name: &'static str,
        symbol: &'static str,
        factor: f64,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            symbol,
            factor,
            aliases,
        }
    }

    /// Case-insensitive match on name, symbol or alias
    pub fn matches(&self, unit: &str) -> bool {
        let trimmed = unit.trim();
        self.name.eq_ignore_ascii_case(trimmed)
            || self.symbol.eq_ignore_ascii_case(trimmed)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(trimmed))
    }
}

/// Static factor table for one linear category
#[derive(Debug)]
pub struct ConversionTable {
    pub category: UnitCategory,
    pub units: &'static [UnitFactor],
}

impl ConversionTable {
    /// Find a unit by name, symbol or alias
    pub fn lookup(&self, unit: &str) -> Option<&UnitFactor> {
        self.units.iter().find(|u| u.matches(unit))
    }

    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.lookup(unit).map(|u| u.factor)
    }

    /// Unit display names in table order
    pub fn names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }
}

// ============================================================================
// Linear Tables
// ============================================================================

/// Length, base Meters
pub static LENGTH: ConversionTable = ConversionTable {
    category: UnitCategory::Length,
    units: &[
        UnitFactor::new("Meters", "m", 1.0, &["meter", "metre", "metres"]),
        UnitFactor::new("Kilometers", "km", 0.001, &["kilometer", "kilometre", "kilometres"]),
        UnitFactor::new("Centimeters", "cm", 100.0, &["centimeter", "centimetre", "centimetres"]),
        UnitFactor::new("Millimeters", "mm", 1000.0, &["millimeter", "millimetre", "millimetres"]),
        UnitFactor::new("Miles", "mi", 0.000621371, &["mile"]),
        UnitFactor::new("Yards", "yd", 1.09361, &["yard"]),
        UnitFactor::new("Feet", "ft", 3.28084, &["foot"]),
        UnitFactor::new("Inches", "in", 39.3701, &["inch"]),
    ],
};

/// Weight, base Kilograms
pub static WEIGHT: ConversionTable = ConversionTable {
    category: UnitCategory::Weight,
    units: &[
        UnitFactor::new("Kilograms", "kg", 1.0, &["kilogram"]),
        UnitFactor::new("Grams", "g", 1000.0, &["gram"]),
        UnitFactor::new("Milligrams", "mg", 1_000_000.0, &["milligram"]),
        UnitFactor::new("Pounds", "lb", 2.20462, &["pound", "lbs"]),
        UnitFactor::new("Ounces", "oz", 35.274, &["ounce"]),
    ],
};

/// Time, base Seconds
pub static TIME: ConversionTable = ConversionTable {
    category: UnitCategory::Time,
    units: &[
        UnitFactor::new("Seconds", "s", 1.0, &["second", "sec", "secs"]),
        UnitFactor::new("Minutes", "min", 1.0 / 60.0, &["minute", "mins"]),
        UnitFactor::new("Hours", "h", 1.0 / 3600.0, &["hour", "hr", "hrs"]),
        UnitFactor::new("Days", "d", 1.0 / 86400.0, &["day"]),
    ],
};

/// Speed, base meters per second
pub static SPEED: ConversionTable = ConversionTable {
    category: UnitCategory::Speed,
    units: &[
        UnitFactor::new("Meters per second", "m/s", 1.0, &["mps"]),
        UnitFactor::new("Kilometers per hour", "km/h", 3.6, &["kph", "kmh"]),
        UnitFactor::new("Miles per hour", "mph", 2.23694, &["mi/h"]),
        UnitFactor::new("Feet per second", "ft/s", 3.28084, &["fps"]),
    ],
};

/// Area, base square meters
pub static AREA: ConversionTable = ConversionTable {
    category: UnitCategory::Area,
    units: &[
        UnitFactor::new("Square meters", "m2", 1.0, &["m²", "sq m"]),
        UnitFactor::new("Square kilometers", "km2", 0.000001, &["km²", "sq km"]),
        UnitFactor::new("Square feet", "ft2", 10.7639, &["ft²", "sq ft"]),
        UnitFactor::new("Square inches", "in2", 1550.0, &["in²", "sq in"]),
        UnitFactor::new("Hectares", "ha", 0.0001, &["hectare"]),
        UnitFactor::new("Acres", "ac", 0.000247105, &["acre"]),
    ],
};

/// Volume, base Liters
pub static VOLUME: ConversionTable = ConversionTable {
    category: UnitCategory::Volume,
    units: &[
        UnitFactor::new("Liters", "l", 1.0, &["liter", "litre", "litres"]),
        UnitFactor::new("Milliliters", "ml", 1000.0, &["milliliter", "millilitre", "millilitres"]),
        UnitFactor::new("Cubic meters", "m3", 0.001, &["m³", "cubic meter"]),
        UnitFactor::new("Cubic inches", "in3", 61.0237, &["in³", "cubic inch"]),
        UnitFactor::new("Gallons", "gal", 0.264172, &["gallon"]),
        UnitFactor::new("Cups", "cup", 4.16667, &[]),
    ],
};

/// Data storage, base Bytes, decimal prefixes
pub static DATA_STORAGE: ConversionTable = ConversionTable {
    category: UnitCategory::DataStorage,
    units: &[
        UnitFactor::new("Bytes", "B", 1.0, &["byte"]),
        UnitFactor::new("Kilobytes", "KB", 0.001, &["kilobyte"]),
        UnitFactor::new("Megabytes", "MB", 0.000001, &["megabyte"]),
        UnitFactor::new("Gigabytes", "GB", 0.000000001, &["gigabyte"]),
        UnitFactor::new("Terabytes", "TB", 0.000000000001, &["terabyte"]),
    ],
};

/// Energy, base Joules
pub static ENERGY: ConversionTable = ConversionTable {
    category: UnitCategory::Energy,
    units: &[
        UnitFactor::new("Joules", "J", 1.0, &["joule"]),
        UnitFactor::new("Kilojoules", "kJ", 0.001, &["kilojoule"]),
        UnitFactor::new("Calories", "cal", 0.239006, &["calorie"]),
        UnitFactor::new("Kilocalories", "kcal", 0.000239006, &["kilocalorie"]),
        UnitFactor::new("Watt-hours", "Wh", 0.000277778, &["watt-hour", "watt hours"]),
    ],
};

/// Pressure, base Pascals
pub static PRESSURE: ConversionTable = ConversionTable {
    category: UnitCategory::Pressure,
    units: &[
        UnitFactor::new("Pascals", "Pa", 1.0, &["pascal"]),
        UnitFactor::new("Kilopascals", "kPa", 0.001, &["kilopascal"]),
        UnitFactor::new("Bars", "bar", 0.00001, &[]),
        UnitFactor::new("PSI", "psi", 0.000145038, &["lbf/in2"]),
    ],
};
