//! A seeded generator of placeholder market data.
//!
//! Every column of the table is drawn independently from a normal
//! distribution with a fixed mean and standard deviation. Columns are drawn
//! one after the other from a single generator, so a given seed always
//! produces the same table.

use rand::{SeedableRng as _, rngs::StdRng};
use rand_distr::{Distribution as _, Normal, NormalError};
use roma_core::{
    models::{BalanceProduct, Dataset, FlowSheet, Observation, PriceSheet, Product, month_end},
    ports::DataSource,
};
use serde::{Deserialize, Serialize};
use time::{Month, error::ComponentRange};
use tracing::{Level, event};

/// The quantity a generated column holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// The price of a product
    Price(Product),
    /// The supply of a balance product
    Supply(BalanceProduct),
    /// The demand for a balance product
    Demand(BalanceProduct),
}

/// A generated column and the distribution it is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// What the column holds
    pub metric: Metric,
    /// Mean of the normal distribution
    pub mean: f64,
    /// Standard deviation of the normal distribution
    pub std_dev: f64,
}

const fn column(metric: Metric, mean: f64, std_dev: f64) -> Column {
    Column {
        metric,
        mean,
        std_dev,
    }
}

/// The generated columns, in draw order.
pub const COLUMNS: [Column; 11] = [
    column(Metric::Price(Product::Gasoline), 2.5, 0.3),
    column(Metric::Price(Product::Diesel), 2.8, 0.4),
    column(Metric::Price(Product::JetFuel), 2.2, 0.35),
    column(Metric::Price(Product::FuelOils), 1.8, 0.25),
    column(Metric::Price(Product::LubricatingOil), 3.0, 0.5),
    column(Metric::Price(Product::Asphalt), 1.5, 0.2),
    column(Metric::Price(Product::Lpg), 1.2, 0.15),
    column(Metric::Supply(BalanceProduct::Gasoline), 100.0, 10.0),
    column(Metric::Demand(BalanceProduct::Gasoline), 95.0, 12.0),
    column(Metric::Supply(BalanceProduct::Diesel), 80.0, 8.0),
    column(Metric::Demand(BalanceProduct::Diesel), 82.0, 9.0),
];

/// Configuration of the synthetic table.
///
/// # Examples
///
/// ```
/// use roma_analysis::synthetic::SyntheticConfig;
///
/// // Sixty month-ends from January 2020, seed 42
/// let config = SyntheticConfig::default();
///
/// // A shorter table with a different seed
/// let config = SyntheticConfig {
///     seed: 7,
///     months: 24,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Seed for the random number generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Calendar year of the first observation
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Calendar month (1-12) of the first observation
    #[serde(default = "default_start_month")]
    pub start_month: u8,

    /// Number of monthly observations
    #[serde(default = "default_months")]
    pub months: usize,
}

fn default_seed() -> u64 {
    42
}

fn default_start_year() -> i32 {
    2020
}

fn default_start_month() -> u8 {
    1
}

fn default_months() -> usize {
    60
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_year: default_start_year(),
            start_month: default_start_month(),
            months: default_months(),
        }
    }
}

/// A [`DataSource`] that draws its table from a seeded generator.
#[derive(Clone, Debug, Default)]
pub struct SyntheticSource {
    config: SyntheticConfig,
}

impl SyntheticSource {
    /// Create a source from its configuration.
    pub fn new(config: SyntheticConfig) -> Self {
        Self { config }
    }

    /// The configuration this source generates from.
    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// The month-end dates of the table.
    pub fn dates(&self) -> Result<Vec<time::Date>, SyntheticError> {
        let SyntheticConfig {
            start_year,
            start_month,
            months,
            ..
        } = self.config;

        if months == 0 {
            return Err(SyntheticError::EmptyRange);
        }
        let first = Month::try_from(start_month)
            .map_err(|_| SyntheticError::StartMonth(start_month))?;

        (0..months)
            .map(|i| {
                let offset = (u8::from(first) as i64 - 1) + i as i64;
                let year = start_year as i64 + offset.div_euclid(12);
                let year = i32::try_from(year).map_err(|_| SyntheticError::YearOverflow)?;
                // offset.rem_euclid(12) is in 0..12
                let month = Month::try_from(offset.rem_euclid(12) as u8 + 1)?;
                Ok(month_end(year, month)?)
            })
            .collect()
    }
}

impl DataSource for SyntheticSource {
    type Error = SyntheticError;

    fn load(&self) -> Result<Dataset, Self::Error> {
        let dates = self.dates()?;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let mut rows = dates
            .into_iter()
            .map(|date| Observation {
                date,
                prices: PriceSheet::default(),
                flows: FlowSheet::default(),
            })
            .collect::<Vec<_>>();

        for Column {
            metric,
            mean,
            std_dev,
        } in COLUMNS
        {
            let normal = Normal::new(mean, std_dev)?;
            for row in rows.iter_mut() {
                let value = normal.sample(&mut rng);
                match metric {
                    Metric::Price(product) => row.prices[product] = value,
                    Metric::Supply(product) => row.flows[product].supply = value,
                    Metric::Demand(product) => row.flows[product].demand = value,
                }
            }
        }

        event!(
            Level::DEBUG,
            seed = self.config.seed,
            rows = rows.len(),
            "generated synthetic dataset"
        );

        Ok(Dataset::new(rows))
    }
}

/// Errors that can occur when generating the synthetic table
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The configured table has no rows
    #[error("the synthetic table must span at least one month")]
    EmptyRange,
    /// The configured start month is not in 1..=12
    #[error("start month {0} is not a calendar month")]
    StartMonth(u8),
    /// The date range runs past the representable years
    #[error("the synthetic date range overflows the calendar")]
    YearOverflow,
    /// A date in the range could not be constructed
    #[error("invalid calendar date: {0}")]
    Calendar(#[from] ComponentRange),
    /// A column distribution is invalid
    #[error("invalid column distribution: {0}")]
    Distribution(#[from] NormalError),
}
