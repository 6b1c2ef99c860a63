mod application;
pub use application::Application;

mod forecaster;
pub use forecaster::Forecaster;

mod source;
pub use source::DataSource;
