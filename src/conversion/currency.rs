//! Currency conversion against a static rate table
//!
//! The published table only has USD, EUR and GBP as source currencies and its
//! rates are not reciprocal. Which pairs are answerable is a product decision
//! expressed through [`CurrencyCoverage`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite_result, ensure_non_negative, ConversionError, ConversionResult};
use super::units::UnitCategory;

/// Currencies offered for selection, in menu order
pub const CURRENCIES: [&str; 9] = ["USD", "EUR", "GBP", "INR", "PKR", "AUD", "CAD", "JPY", "CNY"];

const PUBLISHED: &[(&str, &[(&str, f64)])] = &[
    (
        "USD",
        &[
            ("EUR", 0.92),
            ("GBP", 0.78),
            ("INR", 82.5),
            ("PKR", 280.0),
            ("AUD", 1.48),
            ("CAD", 1.34),
            ("JPY", 148.5),
            ("CNY", 7.1),
        ],
    ),
    (
        "EUR",
        &[
            ("USD", 1.09),
            ("GBP", 0.85),
            ("INR", 89.7),
            ("PKR", 304.0),
            ("AUD", 1.61),
            ("CAD", 1.46),
            ("JPY", 161.2),
            ("CNY", 7.8),
        ],
    ),
    (
        "GBP",
        &[
            ("USD", 1.27),
            ("EUR", 1.17),
            ("INR", 105.2),
            ("PKR", 356.0),
            ("AUD", 1.90),
            ("CAD", 1.72),
            ("JPY", 188.4),
            ("CNY", 9.1),
        ],
    ),
];

/// Published table, built once on first use
pub static PUBLISHED_RATES: LazyLock<CurrencyRateTable> =
    LazyLock::new(|| CurrencyRateTable::new(CurrencyCoverage::Published));

/// Which currency pairs the rate table answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyCoverage {
    /// Only the published rates
    #[default]
    Published,
    /// Published rates plus identity pairs and reciprocals of published pairs
    Derived,
}

impl CurrencyCoverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCoverage::Published => "published",
            CurrencyCoverage::Derived => "derived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "published" | "partial" => Some(CurrencyCoverage::Published),
            "derived" | "symmetric" => Some(CurrencyCoverage::Derived),
            _ => None,
        }
    }
}

/// Source currency -> destination currency -> rate
#[derive(Debug, Clone, Serialize)]
pub struct CurrencyRateTable {
    coverage: CurrencyCoverage,
    rates: BTreeMap<&'static str, BTreeMap<&'static str, f64>>,
}

impl CurrencyRateTable {
    pub fn new(coverage: CurrencyCoverage) -> Self {
        let mut rates: BTreeMap<&'static str, BTreeMap<&'static str, f64>> = BTreeMap::new();
        for (from, row) in PUBLISHED {
            let entry = rates.entry(*from).or_default();
            for (to, rate) in row.iter() {
                entry.insert(*to, *rate);
            }
        }

        if coverage == CurrencyCoverage::Derived {
            let mut reciprocals = Vec::new();
            for (from, row) in &rates {
                for (to, rate) in row {
                    let reverse_published = rates.get(to).is_some_and(|r| r.contains_key(from));
                    if !reverse_published {
                        reciprocals.push((*to, *from, 1.0 / rate));
                    }
                }
            }
            for (from, to, rate) in reciprocals {
                rates.entry(from).or_default().entry(to).or_insert(rate);
            }
            for code in CURRENCIES {
                rates.entry(code).or_default().insert(code, 1.0);
            }
        }

        Self { coverage, rates }
    }

    pub fn coverage(&self) -> CurrencyCoverage {
        self.coverage
    }

    /// Rate for a pair, codes matched case-insensitively
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        let from = from.trim().to_uppercase();
        let to = to.trim().to_uppercase();
        self.rates.get(from.as_str())?.get(to.as_str()).copied()
    }

    /// Source currencies with at least one rate
    pub fn sources(&self) -> Vec<&'static str> {
        self.rates.keys().copied().collect()
    }

    /// All answerable pairs as `(from, to, rate)`
    pub fn pairs(&self) -> Vec<(&'static str, &'static str, f64)> {
        self.rates
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(to, rate)| (*from, *to, *rate)))
            .collect()
    }
}

impl Default for CurrencyRateTable {
    fn default() -> Self {
        PUBLISHED_RATES.clone()
    }
}

/// `amount * rates[from][to]`; an absent pair is unsupported
pub fn convert_currency(
    amount: f64,
    from_currency: &str,
    to_currency: &str,
    rates: &CurrencyRateTable,
) -> ConversionResult<f64> {
    ensure_non_negative(amount, "Amount")?;
    let rate = rates.rate(from_currency, to_currency).ok_or_else(|| {
        ConversionError::unsupported_pair(UnitCategory::Currency, from_currency, to_currency)
    })?;
    ensure_finite_result(amount * rate)
}
