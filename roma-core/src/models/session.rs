use super::Product;
use std::{fmt, str::FromStr};

/// The three views the dashboard can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AnalysisType {
    /// Historical prices with a linear trend projected to the horizon
    #[default]
    PriceForecast,
    /// Supply against demand, with the signed balance
    SupplyDemandBalance,
    /// Templated market commentary
    MarketCommentary,
}

impl AnalysisType {
    /// Every analysis type, in selector order.
    pub const ALL: [AnalysisType; 3] = [
        AnalysisType::PriceForecast,
        AnalysisType::SupplyDemandBalance,
        AnalysisType::MarketCommentary,
    ];

    /// The label shown in a selector, e.g. "Supply/Demand Balance".
    pub const fn label(self) -> &'static str {
        match self {
            AnalysisType::PriceForecast => "Price Forecast",
            AnalysisType::SupplyDemandBalance => "Supply/Demand Balance",
            AnalysisType::MarketCommentary => "Market Commentary",
        }
    }

    /// The identifier used in URLs and on the command line.
    pub const fn slug(self) -> &'static str {
        match self {
            AnalysisType::PriceForecast => "price-forecast",
            AnalysisType::SupplyDemandBalance => "supply-demand-balance",
            AnalysisType::MarketCommentary => "market-commentary",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalysisType {
    type Err = ParseAnalysisTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AnalysisType::ALL
            .into_iter()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(needle) || kind.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseAnalysisTypeError(s.to_owned()))
    }
}

/// Error when a string does not name one of the analysis types
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown analysis type \"{0}\"")]
pub struct ParseAnalysisTypeError(pub String);

/// The final calendar year a forecast runs through, restricted to the range
/// offered by the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Horizon(i32);

impl Horizon {
    /// The earliest selectable horizon.
    pub const MIN: i32 = 2025;
    /// The latest selectable horizon (also the default).
    pub const MAX: i32 = 2030;

    /// Validate a horizon year.
    pub fn new(year: i32) -> Result<Self, HorizonError> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(HorizonError::OutOfRange(year))
        }
    }

    /// The horizon as a calendar year.
    pub const fn year(self) -> i32 {
        self.0
    }

    /// Every selectable horizon, ascending.
    pub fn all() -> impl Iterator<Item = Horizon> {
        (Self::MIN..=Self::MAX).map(Horizon)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<i32> for Horizon {
    type Error = HorizonError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Horizon> for i32 {
    fn from(value: Horizon) -> Self {
        value.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Horizon {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s
            .trim()
            .parse::<i32>()
            .map_err(|_| HorizonError::NotAYear(s.to_owned()))?;
        Self::new(year)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Horizon {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Horizon".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "integer",
            "format": "int32",
            "minimum": Horizon::MIN,
            "maximum": Horizon::MAX,
        })
    }
}

/// Errors that can occur when constructing a [`Horizon`]
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum HorizonError {
    /// The year falls outside the selectable range
    #[error("forecast horizon {0} is outside {min}..={max}", min = Horizon::MIN, max = Horizon::MAX)]
    OutOfRange(i32),
    /// The input is not an integer year
    #[error("forecast horizon \"{0}\" is not a year")]
    NotAYear(String),
}

/// The selections of one dashboard session.
///
/// A session is passed explicitly into every render; nothing about it is
/// remembered between renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// The product to analyze
    #[cfg_attr(feature = "serde", serde(default))]
    pub product: Product,
    /// The last year of the forecast
    #[cfg_attr(feature = "serde", serde(default))]
    pub horizon: Horizon,
    /// The view to render
    #[cfg_attr(feature = "serde", serde(default))]
    pub analysis: AnalysisType,
}
