use approx::assert_abs_diff_eq;
use axum::http::StatusCode;
use axum_test::TestServer;
use roma_axum::{config::AxumConfig, router};
use rstest::*;
use serde_json::{Value, json};

mod app;
use app::{OfflineApp, TestApp};

#[fixture]
fn server() -> TestServer {
    let (router, _) = router(TestApp::default(), AxumConfig::default());
    TestServer::new(router).unwrap()
}

#[rstest]
#[test_log::test(tokio::test)]
async fn health(server: TestServer) {
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn products_are_the_closed_catalogue(server: TestServer) {
    let products = server.get("/api/products").await.json::<Vec<Value>>();

    let slugs = products
        .iter()
        .map(|p| p["product"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        slugs,
        vec![
            "gasoline",
            "diesel",
            "jet-fuel",
            "fuel-oils",
            "lubricating-oil",
            "asphalt",
            "lpg"
        ]
    );
    assert_eq!(products[0]["metrics"], "price-supply-demand");
    assert_eq!(products[2]["name"], "Jet Fuel");
    assert_eq!(products[6]["metrics"], "price-only");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn observations_are_reproducible(server: TestServer) {
    let first = server.get("/api/observations").await.json::<Vec<Value>>();
    let second = server.get("/api/observations").await.json::<Vec<Value>>();

    assert_eq!(first.len(), 60);
    assert_eq!(first[0]["date"], "2020-01-31");
    assert_eq!(first[59]["date"], "2024-12-31");
    assert_eq!(first, second);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn forecast_through_horizon(server: TestServer) {
    let response = server
        .get("/api/forecast")
        .add_query_param("product", "diesel")
        .add_query_param("horizon", 2028)
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["product"], "diesel");
    assert_eq!(body["horizon"], 2028);
    let years = body["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["year"].as_i64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(years, vec![2025, 2026, 2027, 2028]);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn forecast_defaults(server: TestServer) {
    let body = server.get("/api/forecast").await.json::<Value>();
    assert_eq!(body["product"], "gasoline");
    assert_eq!(body["points"].as_array().unwrap().len(), 6);
}

#[rstest]
#[case("/api/forecast?horizon=2024")]
#[case("/api/forecast?horizon=2031")]
#[case("/api/forecast?horizon=soon")]
#[case("/api/forecast?product=kerosene")]
#[case("/api/report?analysis=sentiment")]
#[case("/api/balance/kerosene")]
#[test_log::test(tokio::test)]
async fn invalid_selections_are_rejected(server: TestServer, #[case] uri: &str) {
    server.get(uri).await.assert_status_bad_request();
}

#[rstest]
#[case("gasoline")]
#[case("diesel")]
#[test_log::test(tokio::test)]
async fn balance_records(server: TestServer, #[case] product: &str) {
    let response = server.get(&format!("/api/balance/{product}")).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["product"], product);

    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 60);
    for record in records {
        let supply = record["supply"].as_f64().unwrap();
        let demand = record["demand"].as_f64().unwrap();
        let balance = record["balance"].as_f64().unwrap();
        assert_abs_diff_eq!(balance, supply - demand, epsilon = 1e-9);
    }

    let summary = &body["summary"];
    let periods = summary["surplus_periods"].as_u64().unwrap()
        + summary["shortage_periods"].as_u64().unwrap();
    assert!(periods <= 60);
}

#[rstest]
#[case("jet-fuel", "Jet Fuel")]
#[case("fuel-oils", "Fuel Oils")]
#[case("lubricating-oil", "Lubricating Oil")]
#[case("asphalt", "Asphalt")]
#[case("lpg", "LPG")]
#[test_log::test(tokio::test)]
async fn balance_unavailable_for_price_only_products(
    server: TestServer,
    #[case] slug: &str,
    #[case] name: &str,
) {
    let response = server.get(&format!("/api/balance/{slug}")).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_text(format!("supply/demand balance is not available for {name}"));

    let report = server
        .get("/api/report")
        .add_query_param("product", slug)
        .add_query_param("analysis", "supply-demand-balance")
        .await;
    report.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn report_blocks(server: TestServer) {
    let forecast = server
        .get("/api/report?product=jet-fuel&horizon=2026&analysis=price-forecast")
        .await
        .json::<Value>();
    assert_eq!(forecast["heading"], "Jet Fuel Price Forecast through 2026");
    let types = forecast["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["type"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(types, vec!["chart", "chart", "insight"]);
    assert_eq!(forecast["blocks"][1]["labels"], json!(["2025", "2026"]));

    let commentary = server
        .get("/api/report?product=lpg&analysis=market-commentary")
        .await
        .json::<Value>();
    assert_eq!(commentary["heading"], "LPG Market Commentary");
    assert_eq!(commentary["blocks"][0]["type"], "commentary");
    assert_eq!(commentary["blocks"][0]["items"].as_array().unwrap().len(), 4);
    assert_eq!(commentary["blocks"][1]["type"], "note");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn dashboard_page(server: TestServer) {
    let response = server
        .get("/")
        .add_query_param("product", "diesel")
        .add_query_param("horizon", 2028)
        .add_query_param("analysis", "supply-demand-balance")
        .await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains("Refined Oil Products Market Analysis and Forecasting"));
    assert!(page.contains("Diesel Supply and Demand Balance"));
    assert!(page.contains(r#"<option value="diesel" selected>"#));
    assert!(page.contains("chart-1"));
    assert!(page.contains("Balance Insights"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn dashboard_defaults(server: TestServer) {
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Gasoline Price Forecast through 2030"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn dashboard_reports_errors_in_page(server: TestServer) {
    let unsupported = server
        .get("/?product=asphalt&analysis=supply-demand-balance")
        .await;
    unsupported.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let page = unsupported.text();
    assert!(page.contains("role=\"alert\""));
    assert!(page.contains("supply/demand balance is not available for Asphalt"));
    assert!(page.contains("Analysis Parameters"));

    let malformed = server.get("/?horizon=1999").await;
    malformed.assert_status_bad_request();
    assert!(malformed.text().contains("role=\"alert\""));
}

#[test_log::test(tokio::test)]
async fn data_source_failures_are_internal_errors() {
    let (router, _) = router(OfflineApp::default(), AxumConfig::default());
    let server = TestServer::new(router).unwrap();

    let response = server.get("/api/observations").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("failed to load market data");

    server
        .get("/api/report")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    server
        .get("/")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn openapi_document(server: TestServer) {
    let response = server.get("/docs/api.json").await;
    response.assert_status_ok();

    let doc = response.json::<Value>();
    assert_eq!(doc["info"]["title"], "Refined Oil Products Market Analysis API");
    for path in [
        "/health",
        "/api/products",
        "/api/observations",
        "/api/forecast",
        "/api/balance/{product}",
        "/api/report",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }

    server.get("/docs").await.assert_status_ok();
}
