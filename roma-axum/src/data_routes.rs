//! REST API endpoints for the product catalogue and the raw observation table.

use crate::{ApiApplication, load_dataset};
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::{Json, extract::State, http::StatusCode};
use roma_core::models::{Dataset, MetricSet, Product};
use schemars::JsonSchema;
use serde::Serialize;

/// A catalogue entry.
#[derive(Serialize, JsonSchema)]
pub(crate) struct ProductInfo {
    /// The identifier used in URLs
    product: Product,
    /// The display name
    name: &'static str,
    /// The metrics recorded for the product
    metrics: MetricSet,
}

/// Creates a router with catalogue and data endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/products", get_with(list_products, list_products_docs), |route| {
            route.tag("data")
        })
        .api_route_with(
            "/observations",
            get_with(get_observations::<T>, get_observations_docs),
            |route| route.tag("data"),
        )
}

async fn list_products() -> Json<Vec<ProductInfo>> {
    Json(
        Product::ALL
            .into_iter()
            .map(|product| ProductInfo {
                product,
                name: product.name(),
                metrics: product.metrics(),
            })
            .collect(),
    )
}

fn list_products_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List products").description(
        r#"
        The closed catalogue of refined products, in selector order, with
        the metrics each one records. Only products whose metrics include
        supply and demand can be used with the balance endpoint.
        "#,
    )
}

async fn get_observations<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Dataset>, (StatusCode, String)> {
    load_dataset(&app).map(Json)
}

fn get_observations_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Get observations")
        .description(
            r#"
            The full monthly observation table, ordered by date. Every row
            carries a price for each product and supply/demand figures for
            gasoline and diesel.
            "#,
        )
        .response_with::<500, String, _>(|res| res.description("Market data could not be loaded"))
}
