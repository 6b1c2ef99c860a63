//! The production [`Application`]: seeded synthetic data fitted by ordinary
//! least squares.

use roma_analysis::{
    ols::OlsForecaster,
    synthetic::{SyntheticConfig, SyntheticError, SyntheticSource},
};
use roma_core::ports::Application;

/// The dashboard application state.
///
/// Holds only the generator configuration, so cloning it per request is cheap
/// and every request regenerates the same table.
#[derive(Clone, Debug, Default)]
pub struct DashApp {
    source: SyntheticSource,
}

impl DashApp {
    /// Create the application from its data configuration.
    pub fn new(config: SyntheticConfig) -> Self {
        Self {
            source: SyntheticSource::new(config),
        }
    }

    /// Create the application, rejecting a configuration that cannot
    /// produce a table.
    pub fn try_new(config: SyntheticConfig) -> Result<Self, SyntheticError> {
        let app = Self::new(config);
        app.source.dates()?;
        Ok(app)
    }
}

impl Application for DashApp {
    type Source = SyntheticSource;
    type Forecaster = OlsForecaster;

    fn source(&self) -> &Self::Source {
        &self.source
    }

    fn forecaster(&self) -> Self::Forecaster {
        OlsForecaster
    }
}
