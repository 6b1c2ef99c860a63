use roma_analysis::{ols::OlsForecaster, synthetic::SyntheticSource};
use roma_core::{
    models::Dataset,
    ports::{Application, DataSource},
};

/// The production wiring: seeded synthetic data and least squares.
#[derive(Clone, Default)]
pub struct TestApp(pub SyntheticSource);

impl Application for TestApp {
    type Source = SyntheticSource;
    type Forecaster = OlsForecaster;

    fn source(&self) -> &Self::Source {
        &self.0
    }

    fn forecaster(&self) -> Self::Forecaster {
        OlsForecaster
    }
}

/// A source whose feed is always down.
#[derive(Clone, Default)]
pub struct OfflineSource;

impl DataSource for OfflineSource {
    type Error = std::io::Error;

    fn load(&self) -> Result<Dataset, Self::Error> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "market data feed unavailable",
        ))
    }
}

#[derive(Clone, Default)]
pub struct OfflineApp(pub OfflineSource);

impl Application for OfflineApp {
    type Source = OfflineSource;
    type Forecaster = OlsForecaster;

    fn source(&self) -> &Self::Source {
        &self.0
    }

    fn forecaster(&self) -> Self::Forecaster {
        OlsForecaster
    }
}
