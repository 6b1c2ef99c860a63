//! REST API endpoints for forecasts, balances and rendered reports.

use crate::{ApiApplication, load_dataset};
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use roma_analysis::{forecast_prices, present, supply_demand_balance};
use roma_core::{
    models::{
        BalanceProduct, BalanceRecord, BalanceSummary, ForecastPoint, Horizon, Product, Report,
        Session,
    },
    ports::Application as _,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// Query parameters for the forecast endpoint.
#[derive(Deserialize, JsonSchema)]
struct ForecastQuery {
    /// The product to forecast
    #[serde(default)]
    product: Product,
    /// The last year of the forecast
    #[serde(default)]
    horizon: Horizon,
}

/// A projected price path.
#[derive(Serialize, JsonSchema)]
struct ForecastResponse {
    /// The forecast product
    product: Product,
    /// The last year of the forecast
    horizon: Horizon,
    /// One point per year after the observed history, through the horizon
    points: Vec<ForecastPoint>,
}

/// Path parameter for the balance endpoint.
#[derive(Deserialize, JsonSchema)]
#[schemars(inline)]
struct ProductPath {
    /// The product to compute the balance of
    product: Product,
}

/// Supply, demand and balance for every observation.
#[derive(Serialize, JsonSchema)]
struct BalanceResponse {
    /// The balance product
    product: BalanceProduct,
    /// One record per observation
    records: Vec<BalanceRecord>,
    /// Aggregates over the records
    summary: BalanceSummary,
}

/// Creates a router with analysis endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/forecast",
            get_with(get_forecast::<T>, get_forecast_docs),
            |route| route.tag("analysis"),
        )
        .api_route_with(
            "/balance/{product}",
            get_with(get_balance::<T>, get_balance_docs),
            |route| route.tag("analysis"),
        )
        .api_route_with(
            "/report",
            get_with(get_report::<T>, get_report_docs),
            |route| route.tag("analysis"),
        )
}

async fn get_forecast<T: ApiApplication>(
    State(app): State<T>,
    Query(ForecastQuery { product, horizon }): Query<ForecastQuery>,
) -> Result<Json<ForecastResponse>, (StatusCode, String)> {
    let dataset = load_dataset(&app)?;
    let points = forecast_prices(&dataset, product, horizon.year(), &app.forecaster()).map_err(
        |err| {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to forecast {product}"),
            )
        },
    )?;

    Ok(Json(ForecastResponse {
        product,
        horizon,
        points,
    }))
}

fn get_forecast_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Forecast prices")
        .description(
            r#"
            Fit a least-squares line to (year, price) over the whole history
            and evaluate it at every year after the last observation, through
            the horizon. A horizon at or before the last observed year gives
            an empty forecast.
            "#,
        )
        .response_with::<400, String, _>(|res| res.description("Unknown product or horizon outside 2025-2030"))
        .response_with::<500, String, _>(|res| res.description("Market data could not be loaded or fitted"))
}

async fn get_balance<T: ApiApplication>(
    State(app): State<T>,
    Path(ProductPath { product }): Path<ProductPath>,
) -> Result<Json<BalanceResponse>, (StatusCode, String)> {
    let product = BalanceProduct::try_from(product)
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    let dataset = load_dataset(&app)?;
    let records = supply_demand_balance(&dataset, product);
    let summary = BalanceSummary::of(&records);

    Ok(Json(BalanceResponse {
        product,
        records,
        summary,
    }))
}

fn get_balance_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Supply/demand balance")
        .description(
            r#"
            Supply minus demand for every observation. Positive values are a
            surplus, negative values a shortage. Only gasoline and diesel
            record supply and demand.
            "#,
        )
        .response_with::<422, String, _>(|res| res.description("The product has no supply/demand figures"))
        .response_with::<500, String, _>(|res| res.description("Market data could not be loaded"))
}

/// Render a session into a [`Report`], mapping failures to HTTP statuses.
///
/// Shared by the JSON report endpoint and the dashboard page.
pub(crate) fn render_session<T: ApiApplication>(
    app: &T,
    session: &Session,
) -> Result<Report, (StatusCode, String)> {
    let dataset = load_dataset(app)?;
    present::render(&dataset, &app.forecaster(), session).map_err(|err| match err {
        present::PresentError::Unsupported(err) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        present::PresentError::Fit(err) => {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to forecast {}", session.product),
            )
        }
    })
}

async fn get_report<T: ApiApplication>(
    State(app): State<T>,
    Query(session): Query<Session>,
) -> Result<Json<Report>, (StatusCode, String)> {
    render_session(&app, &session).map(Json)
}

fn get_report_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Render a report")
        .description(
            r#"
            Render one dashboard view as data: a heading followed by charts,
            insights and commentary blocks, in display order. Omitted
            parameters take their defaults (gasoline, 2030, price forecast).
            "#,
        )
        .response_with::<400, String, _>(|res| res.description("Unknown product or analysis type, or horizon outside 2025-2030"))
        .response_with::<422, String, _>(|res| res.description("The selected view is not available for the product"))
        .response_with::<500, String, _>(|res| res.description("Market data could not be loaded or fitted"))
}
