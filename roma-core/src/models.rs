mod balance;
pub use balance::{BalanceRecord, BalanceSummary};

mod date;
pub use date::{ISO_DATE, month_end};

mod forecast;
pub use forecast::{ForecastPoint, TrendLine};

mod observation;
pub use observation::{Dataset, Flow, FlowSheet, Observation, PriceSheet};

mod product;
pub use product::{BalanceProduct, MetricSet, ParseProductError, Product, UnsupportedProduct};

mod report;
pub use report::{Block, Bullet, Chart, ChartKind, Report, Series};

mod session;
pub use session::{
    AnalysisType, Horizon, HorizonError, ParseAnalysisTypeError, Session,
};
