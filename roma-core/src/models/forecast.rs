/// A fitted straight line, `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendLine {
    /// Change in the dependent variable per unit of the independent variable
    pub slope: f64,
    /// Value of the line at x = 0
    pub intercept: f64,
}

impl TrendLine {
    /// A line with zero slope through `level`.
    pub fn flat(level: f64) -> Self {
        Self {
            slope: 0.0,
            intercept: level,
        }
    }

    /// Evaluate the line at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// A projected price for a calendar year beyond the observed history.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastPoint {
    /// The calendar year of the projection
    pub year: i32,
    /// The projected price
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let line = TrendLine {
            slope: 2.0,
            intercept: -4000.0,
        };
        assert_eq!(line.evaluate(2025.0), 50.0);
        assert_eq!(TrendLine::flat(3.5).evaluate(1e6), 3.5);
    }
}
