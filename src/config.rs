//! Runtime configuration
//!
//! Read once from the environment at startup.

use serde::Serialize;

use crate::conversion::CurrencyCoverage;

/// Environment variable selecting currency pair coverage
pub const CURRENCY_COVERAGE_VAR: &str = "UUC_CURRENCY_COVERAGE";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub currency_coverage: CurrencyCoverage,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_coverage = match lookup(CURRENCY_COVERAGE_VAR) {
            Some(raw) => CurrencyCoverage::from_str(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown {} value '{}', using published rates",
                    CURRENCY_COVERAGE_VAR,
                    raw
                );
                CurrencyCoverage::Published
            }),
            None => CurrencyCoverage::Published,
        };

        Self { currency_coverage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_published() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.currency_coverage, CurrencyCoverage::Published);
    }

    #[test]
    fn test_derived_coverage() {
        let config = Config::from_lookup(|key| {
            (key == CURRENCY_COVERAGE_VAR).then(|| "derived".to_string())
        });
        assert_eq!(config.currency_coverage, CurrencyCoverage::Derived);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let config = Config::from_lookup(|_| Some("live".to_string()));
        assert_eq!(config.currency_coverage, CurrencyCoverage::Published);
    }
}
