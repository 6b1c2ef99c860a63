#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod balance;
pub use balance::supply_demand_balance;

mod commentary;

mod forecast;
pub use forecast::forecast_prices;

/// Ordinary least-squares trend fitting.
pub mod ols;

/// The presentation router.
pub mod present;

/// The seeded synthetic data source.
pub mod synthetic;
