use roma_core::{models::TrendLine, ports::Forecaster};
use tracing::{Level, event};

/// Fits `y = slope * x + intercept` by minimizing the sum of squared residuals.
///
/// The sums are taken about the sample means, which keeps the computation
/// well conditioned when `x` is a calendar year (large, tightly clustered
/// values).
#[derive(Clone, Copy, Debug, Default)]
pub struct OlsForecaster;

impl Forecaster for OlsForecaster {
    type Error = FitError;

    fn fit(&self, samples: &[(f64, f64)]) -> Result<TrendLine, Self::Error> {
        if samples.is_empty() {
            return Err(FitError::Empty);
        }
        if samples
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(FitError::NonFinite);
        }

        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy) = samples.iter().fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy))
        });

        // Every sample shares the same x: any slope fits equally well, so we
        // settle on the flat line through the mean.
        if sxx == 0.0 {
            event!(
                Level::WARN,
                samples = samples.len(),
                x = mean_x,
                "degenerate least-squares fit, using zero slope"
            );
            return Ok(TrendLine::flat(mean_y));
        }

        let slope = sxy / sxx;
        Ok(TrendLine {
            slope,
            intercept: slope.mul_add(-mean_x, mean_y),
        })
    }
}

/// Errors that can occur when fitting a trend line
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Error when no samples are provided
    #[error("No samples provided")]
    Empty,
    /// Error when a sample coordinate is NaN or infinite
    #[error("Samples must be finite")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(OlsForecaster.fit(&[]).unwrap_err(), FitError::Empty);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            OlsForecaster
                .fit(&[(2020.0, 1.0), (2021.0, f64::NAN)])
                .unwrap_err(),
            FitError::NonFinite
        );
        assert_eq!(
            OlsForecaster
                .fit(&[(f64::INFINITY, 1.0), (2021.0, 2.0)])
                .unwrap_err(),
            FitError::NonFinite
        );
    }

    #[test]
    fn test_two_points() {
        let line = OlsForecaster.fit(&[(0.0, 1.0), (2.0, 5.0)]).unwrap();
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 1.0);
    }

    #[test]
    fn test_single_distinct_x_is_flat() {
        let line = OlsForecaster
            .fit(&[(2024.0, 1.0), (2024.0, 2.0), (2024.0, 6.0)])
            .unwrap();
        assert_eq!(line, TrendLine::flat(3.0));
    }

    #[test]
    fn test_noise_is_averaged_out() {
        // symmetric residuals around y = x leave the fit unchanged
        let line = OlsForecaster
            .fit(&[(0.0, 1.0), (0.0, -1.0), (1.0, 2.0), (1.0, 0.0)])
            .unwrap();
        assert_eq!(line.slope, 1.0);
        assert_eq!(line.intercept, 0.0);
    }
}
