use roma_core::models::{BalanceProduct, BalanceRecord, Dataset};

/// Supply, demand and supply minus demand for every observation.
pub fn supply_demand_balance(dataset: &Dataset, product: BalanceProduct) -> Vec<BalanceRecord> {
    dataset
        .flow_series(product)
        .map(|(date, flow)| BalanceRecord {
            date,
            supply: flow.supply,
            demand: flow.demand,
            balance: flow.balance(),
        })
        .collect()
}
