use crate::models::Dataset;

/// A provider of the observation table.
///
/// The dashboard regenerates its table on every render, so implementations
/// must return the same dataset for repeated calls if renders are to be
/// reproducible.
pub trait DataSource {
    /// Error type for load failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce the full observation table, ordered by date.
    fn load(&self) -> Result<Dataset, Self::Error>;
}
