use crate::models::TrendLine;

/// Interface for fitting a trend line to (x, y) samples.
///
/// The dashboard uses calendar years as `x` and prices as `y`; the fitted
/// line is then evaluated at future years to produce a forecast.
pub trait Forecaster {
    /// Error type for fitting failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fit a line to the samples.
    ///
    /// # Arguments
    ///
    /// - `samples`: (x, y) pairs, in any order
    ///
    /// # Returns
    ///
    /// The fitted line, or an error if no line can be fitted (for example
    /// when there are no samples).
    fn fit(&self, samples: &[(f64, f64)]) -> Result<TrendLine, Self::Error>;
}
