use super::{DataArgs, OutputArgs};
use clap::Subcommand;
use roma_core::models::{AnalysisType, Horizon, Product};

#[derive(Subcommand)]
pub enum Commands {
    /// Export the full observation table
    Observations {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        io: OutputArgs,
    },

    /// Project a product's price through the horizon
    Forecast {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        io: OutputArgs,

        /// The product to forecast (e.g. "jet-fuel")
        #[arg(short, long, default_value_t)]
        product: Product,

        /// The last year of the forecast (2025-2030)
        #[arg(long, default_value_t)]
        horizon: Horizon,
    },

    /// Compute supply minus demand for a product
    Balance {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        io: OutputArgs,

        /// The product (only gasoline and diesel record supply and demand)
        #[arg(short, long, default_value_t)]
        product: Product,
    },

    /// Render one dashboard view
    Report {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        io: OutputArgs,

        /// The product to analyze
        #[arg(short, long, default_value_t)]
        product: Product,

        /// The last year of the forecast (2025-2030)
        #[arg(long, default_value_t)]
        horizon: Horizon,

        /// The view to render (e.g. "supply-demand-balance")
        #[arg(short, long, default_value_t)]
        analysis: AnalysisType,
    },
}
