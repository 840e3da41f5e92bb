//! Settings for a demo-data run.
//!
//! Defaults reproduce the canonical dataset. Two environment variables override them:
//!
//! - `BAKERY_SEED` - seed of the random stream (`u64`)
//! - `BAKERY_TODAY` - the date the timeline is anchored on (`YYYY-MM-DD`)

use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const SEED_VAR: &str = "BAKERY_SEED";
pub const TODAY_VAR: &str = "BAKERY_TODAY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed of the single random stream every draw comes from.
    pub seed: u64,
    /// Anchor date of the timeline. `None` means the local date at run time.
    pub today: Option<NaiveDate>,
    /// Whole calendar years of history before the current one.
    pub years_to_include: i32,
    /// Products that orders are drawn from.
    pub order_product_count: usize,
    /// Extra products that no order references.
    pub deletable_product_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            today: None,
            years_to_include: 2,
            order_product_count: 8,
            deletable_product_count: 4,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `BAKERY_SEED` / `BAKERY_TODAY` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: SEED_VAR,
                expected: "unsigned integer",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(TODAY_VAR) {
            let today = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                ConfigError::InvalidValue {
                    var: TODAY_VAR,
                    expected: "date (YYYY-MM-DD)",
                    value: value.clone(),
                }
            })?;
            config.today = Some(today);
        }
        Ok(config)
    }

    /// The configured anchor date, or the local date when none is set.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
