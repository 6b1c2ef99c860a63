use super::{DataSource, Forecaster};

/// The integration point for an adapter.
///
/// An application bundles a data source with a forecaster. Adapters such as
/// the HTTP server are generic over this trait, so tests can swap in a
/// hand-built dataset or a different fitting routine.
pub trait Application {
    /// Where observations come from
    type Source: DataSource;

    /// How trend lines are fitted
    type Forecaster: Forecaster;

    /// Get a handle to the data source
    fn source(&self) -> &Self::Source;

    /// Get an instance of the forecaster
    fn forecaster(&self) -> Self::Forecaster;
}
