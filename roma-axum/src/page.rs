//! The HTML dashboard.
//!
//! The page is a single form-driven view: the sidebar submits the session
//! as query parameters and the server answers with the rendered report.
//! Charts are drawn client-side by Chart.js from JSON embedded in the page.

use crate::{ApiApplication, analysis_routes::render_session};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use roma_core::models::{
    AnalysisType, Block, Chart, ChartKind, Horizon, Product, Report, Session,
};
use serde_json::json;
use std::fmt::Write as _;

const TITLE: &str = "Refined Oil Products Market Analysis and Forecasting";

const DESCRIPTION: &str = "This app provides forecasts, supply/demand balances, and market \
    commentary for refined oil products (e.g., Gasoline, Diesel, Jet Fuel, etc.) through 2030. \
    Use the sidebar to select products and explore data, forecasts, and investment insights.";

const ABOUT: &str = "This app is designed for the Commodities Research Team to analyze refined \
    oil product markets, forecast prices, and provide investment insights. Contact the Macro \
    Research team for custom analyses or data integration.";

// line colour, fill colour
const PALETTE: [(&str, &str); 3] = [
    ("rgb(37, 99, 235)", "rgba(37, 99, 235, 0.15)"),
    ("rgb(220, 38, 38)", "rgba(220, 38, 38, 0.15)"),
    ("rgb(22, 163, 74)", "rgba(22, 163, 74, 0.15)"),
];

/// Render the dashboard for the session in the query string.
///
/// A malformed query still produces the page (with default selections and
/// an error panel) but keeps the 400 status of the rejection.
pub(crate) async fn dashboard<T: ApiApplication>(
    State(app): State<T>,
    query: Result<Query<Session>, QueryRejection>,
) -> Response {
    let (session, outcome) = match query {
        Ok(Query(session)) => (session, render_session(&app, &session)),
        Err(rejection) => (
            Session::default(),
            Err((rejection.status(), rejection.body_text())),
        ),
    };

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err((status, _)) => *status,
    };
    let body = render_page(&session, outcome.as_ref().map_err(|(_, message)| message.as_str()));

    (status, Html(body)).into_response()
}

pub(crate) fn render_page(session: &Session, outcome: Result<&Report, &str>) -> String {
    let main = match outcome {
        Ok(report) => render_report(report),
        Err(message) => format!(
            r#"<div role="alert" class="rounded-lg border border-red-300 bg-red-50 p-4 text-red-800">{}</div>"#,
            html_escape(message)
        ),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Refined Oil Products Market Analysis</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
</head>
<body class="bg-gray-100 text-gray-900">
    <div class="flex min-h-screen">
        <aside class="w-72 shrink-0 bg-white shadow p-6">
            {sidebar}
        </aside>
        <main class="flex-1 p-8 space-y-6">
            <header>
                <h1 class="text-3xl font-bold">{TITLE}</h1>
                <p class="mt-2 text-gray-600">{DESCRIPTION}</p>
            </header>
            {main}
            <footer class="border-t border-gray-300 pt-4 text-sm text-gray-600">
                <strong>About</strong>: {ABOUT}
            </footer>
        </main>
    </div>
</body>
</html>"#,
        sidebar = render_sidebar(session),
    )
}

fn render_sidebar(session: &Session) -> String {
    let mut products = String::new();
    for product in Product::ALL {
        let selected = if product == session.product { " selected" } else { "" };
        let _ = write!(
            products,
            r#"<option value="{}"{selected}>{}</option>"#,
            product.slug(),
            product.name()
        );
    }

    let mut analyses = String::new();
    for analysis in AnalysisType::ALL {
        let checked = if analysis == session.analysis { " checked" } else { "" };
        let _ = write!(
            analyses,
            r#"<label class="block"><input type="radio" name="analysis" value="{}"{checked} onchange="this.form.submit()"> {}</label>"#,
            analysis.slug(),
            analysis.label()
        );
    }

    format!(
        r#"<h2 class="text-lg font-semibold mb-4">Analysis Parameters</h2>
            <form method="get" action="/" class="space-y-4">
                <label class="block text-sm font-medium">Select Refined Oil Product
                    <select name="product" class="mt-1 block w-full rounded border-gray-300" onchange="this.form.submit()">{products}</select>
                </label>
                <label class="block text-sm font-medium">Forecast Horizon (Years): <output id="horizon-value">{horizon}</output>
                    <input type="range" name="horizon" min="{min}" max="{max}" step="1" value="{horizon}" class="mt-1 block w-full"
                        oninput="document.getElementById('horizon-value').value = this.value" onchange="this.form.submit()">
                </label>
                <fieldset class="text-sm">
                    <legend class="font-medium">Analysis Type</legend>
                    {analyses}
                </fieldset>
                <noscript><button type="submit" class="rounded bg-blue-600 px-3 py-1 text-white">Update</button></noscript>
            </form>"#,
        horizon = session.horizon,
        min = Horizon::MIN,
        max = Horizon::MAX,
    )
}

fn render_report(report: &Report) -> String {
    let mut html = format!(
        r#"<section class="space-y-6"><h2 class="text-2xl font-semibold">{}</h2>"#,
        html_escape(&report.heading)
    );

    let mut charts = 0;
    for block in &report.blocks {
        match block {
            Block::Chart(chart) => {
                html.push_str(&render_chart(chart, charts));
                charts += 1;
            }
            Block::Insight { label, text } => {
                let _ = write!(
                    html,
                    r#"<p class="bg-white rounded-lg shadow p-4"><strong>{}</strong>: {}</p>"#,
                    html_escape(label),
                    html_escape(text)
                );
            }
            Block::Commentary { title, items } => {
                let _ = write!(
                    html,
                    r#"<div class="bg-white rounded-lg shadow p-6"><h3 class="text-xl font-semibold mb-3">{}</h3><ul class="list-disc pl-6 space-y-2">"#,
                    html_escape(title)
                );
                for item in items {
                    let _ = write!(
                        html,
                        "<li><strong>{}</strong>: {}</li>",
                        html_escape(&item.label),
                        html_escape(&item.text)
                    );
                }
                html.push_str("</ul></div>");
            }
            Block::Note { label, text } => {
                let _ = write!(
                    html,
                    r#"<p class="text-sm text-gray-600"><strong>{}</strong>: {}</p>"#,
                    html_escape(label),
                    html_escape(text)
                );
            }
        }
    }

    html.push_str("</section>");
    html
}

fn render_chart(chart: &Chart, index: usize) -> String {
    let datasets = chart
        .series
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(series, (line, fill))| {
            let background = match chart.kind {
                ChartKind::Line => fill,
                ChartKind::Bar => line,
            };
            json!({
                "label": series.name,
                "data": series.values,
                "borderColor": line,
                "backgroundColor": background,
                "pointRadius": 2,
            })
        })
        .collect::<Vec<_>>();

    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
    };
    let config = json!({
        "type": kind,
        "data": {
            "labels": chart.labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": true,
            "plugins": {
                "title": { "display": true, "text": chart.title },
                "legend": { "display": chart.series.len() > 1 },
            },
            "scales": {
                "x": { "title": { "display": true, "text": chart.x_label } },
                "y": { "title": { "display": true, "text": chart.y_label } },
            },
        },
    });

    format!(
        r#"<div class="bg-white rounded-lg shadow p-6">
                <canvas id="chart-{index}" height="120" aria-label="{title}"></canvas>
            </div>
            <script>
                new Chart(document.getElementById('chart-{index}'), {config});
            </script>"#,
        title = html_escape(&chart.title),
        config = script_safe(&config.to_string()),
    )
}

/// JSON is valid JavaScript, but a `</script>` inside a string would still
/// end the element early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
