//! Routes a dashboard session to exactly one of the three views.
//!
//! Every render starts from the dataset it is handed and keeps no state, so
//! rendering the same session twice produces the same [`Report`].

use crate::{commentary, forecast_prices, supply_demand_balance};
use roma_core::{
    models::{
        AnalysisType, BalanceProduct, BalanceSummary, Block, Chart, ChartKind, Dataset, Horizon,
        Product, Report, Series, Session, UnsupportedProduct,
    },
    ports::Forecaster,
};
use tracing::{Level, span};

/// Render the view selected by `session`.
///
/// # Errors
///
/// - [`PresentError::Unsupported`] if the balance view is requested for a
///   product without supply and demand figures
/// - [`PresentError::Fit`] if the forecaster cannot fit the price history
pub fn render<F: Forecaster>(
    dataset: &Dataset,
    forecaster: &F,
    session: &Session,
) -> Result<Report, PresentError<F::Error>> {
    let _span = span!(
        Level::INFO,
        "render",
        product = session.product.slug(),
        analysis = session.analysis.slug()
    )
    .entered();

    match session.analysis {
        AnalysisType::PriceForecast => {
            price_forecast(dataset, forecaster, session.product, session.horizon)
        }
        AnalysisType::SupplyDemandBalance => {
            let product = BalanceProduct::try_from(session.product)?;
            Ok(balance(dataset, product))
        }
        AnalysisType::MarketCommentary => Ok(market_commentary(session.product)),
    }
}

fn price_forecast<F: Forecaster>(
    dataset: &Dataset,
    forecaster: &F,
    product: Product,
    horizon: Horizon,
) -> Result<Report, PresentError<F::Error>> {
    let forecast = forecast_prices(dataset, product, horizon.year(), forecaster)
        .map_err(PresentError::Fit)?;

    let (dates, prices): (Vec<_>, Vec<_>) = dataset
        .price_series(product)
        .map(|(date, price)| (date.to_string(), price))
        .unzip();

    let historical = Chart {
        title: format!("{product} Historical Prices"),
        kind: ChartKind::Line,
        x_label: "Date".to_owned(),
        y_label: format!("{product} Price"),
        labels: dates,
        series: vec![Series {
            name: format!("{product} Price"),
            values: prices,
        }],
    };

    let projected = Chart {
        title: format!("{product} Price Forecast"),
        kind: ChartKind::Line,
        x_label: "Year".to_owned(),
        y_label: "Forecasted Price".to_owned(),
        labels: forecast.iter().map(|point| point.year.to_string()).collect(),
        series: vec![Series {
            name: "Forecasted Price".to_owned(),
            values: forecast.iter().map(|point| point.price).collect(),
        }],
    };

    Ok(Report {
        heading: format!("{product} Price Forecast through {horizon}"),
        blocks: vec![
            Block::Chart(historical),
            Block::Chart(projected),
            commentary::forecast_insight(product),
        ],
    })
}

fn balance(dataset: &Dataset, product: BalanceProduct) -> Report {
    let records = supply_demand_balance(dataset, product);
    let summary = BalanceSummary::of(&records);
    let labels = records
        .iter()
        .map(|record| record.date.to_string())
        .collect::<Vec<_>>();

    let flows = Chart {
        title: format!("{product} Supply vs. Demand"),
        kind: ChartKind::Line,
        x_label: "Date".to_owned(),
        y_label: "Volume".to_owned(),
        labels: labels.clone(),
        series: vec![
            Series {
                name: "Supply".to_owned(),
                values: records.iter().map(|record| record.supply).collect(),
            },
            Series {
                name: "Demand".to_owned(),
                values: records.iter().map(|record| record.demand).collect(),
            },
        ],
    };

    let balance = Chart {
        title: format!("{product} Supply-Demand Balance"),
        kind: ChartKind::Bar,
        x_label: "Date".to_owned(),
        y_label: "Balance".to_owned(),
        labels,
        series: vec![Series {
            name: "Balance".to_owned(),
            values: records.iter().map(|record| record.balance).collect(),
        }],
    };

    Report {
        heading: format!("{product} Supply and Demand Balance"),
        blocks: vec![
            Block::Chart(flows),
            Block::Chart(balance),
            commentary::balance_insight(),
            commentary::balance_summary(&summary),
        ],
    }
}

fn market_commentary(product: Product) -> Report {
    Report {
        heading: format!("{product} Market Commentary"),
        blocks: commentary::market_commentary(product),
    }
}

/// Errors that can occur when rendering a view
#[derive(Debug, thiserror::Error)]
pub enum PresentError<E: std::error::Error> {
    /// The selected view needs data the product does not carry
    #[error(transparent)]
    Unsupported(#[from] UnsupportedProduct),
    /// The price history could not be fitted
    #[error("failed to fit price trend: {0}")]
    Fit(#[source] E),
}
