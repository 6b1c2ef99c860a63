#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the market dashboard.
///
/// These are plain data structures with minimal behaviour: the product
/// catalogue, the observation table, and the records derived from it. The
/// computations that produce the derived records live in `roma-analysis`.
pub mod models;

/// Interface traits for the market dashboard.
///
/// These are the "ports" of a hexagonal architecture. Adapters (the HTTP
/// server, the offline report CLI, test harnesses) depend on these traits
/// rather than on a concrete data source or fitting routine.
pub mod ports;
