/// A rendered dashboard view, independent of any particular output surface.
///
/// The presentation router produces a report; adapters decide how to draw
/// it (an HTML page with charts, a JSON document, ...).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// The section heading, e.g. "Diesel Price Forecast through 2028"
    pub heading: String,
    /// The content of the section, in display order
    pub blocks: Vec<Block>,
}

impl Report {
    /// The charts of the report, in display order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Chart(chart) => Some(chart),
            _ => None,
        })
    }
}

/// One piece of report content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum Block {
    /// A chart
    Chart(Chart),
    /// A short emphasized insight, e.g. "**Forecast Insights**: ..."
    Insight {
        /// The emphasized lead-in
        label: String,
        /// The body text
        text: String,
    },
    /// A titled list of labelled commentary points
    Commentary {
        /// The list title
        title: String,
        /// The commentary points
        items: Vec<Bullet>,
    },
    /// A disclaimer or side remark
    Note {
        /// The emphasized lead-in
        label: String,
        /// The body text
        text: String,
    },
}

/// A labelled commentary point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullet {
    /// The emphasized lead-in
    pub label: String,
    /// The body text
    pub text: String,
}

/// The drawing style of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ChartKind {
    /// Connected points
    Line,
    /// Vertical bars
    Bar,
}

/// A chart over a shared set of category labels.
///
/// Every series has exactly one value per label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// The chart title
    pub title: String,
    /// How to draw the series
    pub kind: ChartKind,
    /// The x-axis caption
    pub x_label: String,
    /// The y-axis caption
    pub y_label: String,
    /// The x-axis categories
    pub labels: Vec<String>,
    /// The plotted series
    pub series: Vec<Series>,
}

/// A named sequence of values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// The legend entry
    pub name: String,
    /// One value per chart label
    pub values: Vec<f64>,
}
