// Fixed text templates for the report blocks. Only the product name is
// substituted into the insights and commentary; the bracketed phrases are
// placeholders to be replaced by real analysis. Balance statistics go in a
// separate note.

use roma_core::models::{BalanceSummary, Block, Bullet, Product};

pub(crate) fn forecast_insight(product: Product) -> Block {
    Block::Insight {
        label: "Forecast Insights".to_owned(),
        text: format!(
            "Based on historical trends, {product} prices are projected to follow a linear \
             trend. Adjust model parameters or incorporate additional factors (e.g., \
             geopolitical events, supply shocks) for more accurate forecasts."
        ),
    }
}

pub(crate) fn balance_insight() -> Block {
    Block::Insight {
        label: "Balance Insights".to_owned(),
        text: "Positive balance indicates surplus; negative indicates shortage. Monitor for \
               market-moving events like refinery outages or demand spikes."
            .to_owned(),
    }
}

pub(crate) fn balance_summary(summary: &BalanceSummary) -> Block {
    Block::Note {
        label: "Period Summary".to_owned(),
        text: format!(
            "{} months were in surplus and {} in shortage (mean balance {:+.2}).",
            summary.surplus_periods, summary.shortage_periods, summary.mean_balance
        ),
    }
}

pub(crate) fn market_commentary(product: Product) -> Vec<Block> {
    let bullet = |label: &str, text: String| Bullet {
        label: label.to_owned(),
        text,
    };

    vec![
        Block::Commentary {
            title: format!("Daily Market Update for {product}"),
            items: vec![
                bullet(
                    "Price Drivers",
                    format!(
                        "Recent price movements in {product} are driven by [e.g., seasonal \
                         demand, refinery maintenance schedules, or geopolitical tensions]."
                    ),
                ),
                bullet(
                    "Supply/Demand Dynamics",
                    "Current supply is [stable/tight], with demand influenced by [e.g., \
                     economic growth, transportation trends]."
                        .to_owned(),
                ),
                bullet(
                    "Investment/Hedging Strategy",
                    format!(
                        "Consider [e.g., long positions in {product} futures for Q1 2026 due \
                         to expected demand growth or hedging against supply disruptions]."
                    ),
                ),
                bullet(
                    "Key Events to Watch",
                    "Monitor [e.g., OPEC meetings, EIA inventory reports, or regulatory \
                     changes] for potential market impacts."
                        .to_owned(),
                ),
            ],
        },
        Block::Note {
            label: "Note".to_owned(),
            text: "This is a placeholder commentary. Integrate real-time data from sources \
                   like EIA, Bloomberg, or X posts for accurate insights."
                .to_owned(),
        },
    ]
}
