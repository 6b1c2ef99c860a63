use clap::Parser;
use roma_analysis::{
    forecast_prices,
    ols::{FitError, OlsForecaster},
    present::{self, PresentError},
    supply_demand_balance,
    synthetic::SyntheticError,
};
use roma_core::{
    models::{BalanceProduct, BalanceRecord, BalanceSummary, Session, UnsupportedProduct},
    ports::DataSource as _,
};
use serde::Serialize;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Serialize)]
struct BalanceExport {
    product: BalanceProduct,
    records: Vec<BalanceRecord>,
    summary: BalanceSummary,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Observations { data, io } => {
                let dataset = data.source().load().map_err(CliError::from)?;
                io.write_json(&dataset)?;
            }
            Commands::Forecast {
                data,
                io,
                product,
                horizon,
            } => {
                let dataset = data.source().load().map_err(CliError::from)?;
                let points = forecast_prices(&dataset, product, horizon.year(), &OlsForecaster)
                    .map_err(CliError::from)?;
                io.write_json(&points)?;
            }
            Commands::Balance { data, io, product } => {
                let product = BalanceProduct::try_from(product).map_err(CliError::from)?;
                let dataset = data.source().load().map_err(CliError::from)?;
                let records = supply_demand_balance(&dataset, product);
                let summary = BalanceSummary::of(&records);
                let export = BalanceExport {
                    product,
                    records,
                    summary,
                };
                io.write_json(&export)?;
            }
            Commands::Report {
                data,
                io,
                product,
                horizon,
                analysis,
            } => {
                let session = Session {
                    product,
                    horizon,
                    analysis,
                };
                let dataset = data.source().load().map_err(CliError::from)?;
                let report =
                    present::render(&dataset, &OlsForecaster, &session).map_err(CliError::from)?;
                io.write_json(&report)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to generate market data: {0}")]
    Data(#[from] SyntheticError),
    #[error("Unable to fit price trend: {0}")]
    Fit(#[from] FitError),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedProduct),
}

impl From<PresentError<FitError>> for CliError {
    fn from(value: PresentError<FitError>) -> Self {
        match value {
            PresentError::Unsupported(err) => Self::Unsupported(err),
            PresentError::Fit(err) => Self::Fit(err),
        }
    }
}
