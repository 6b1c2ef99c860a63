use time::Date;

/// Supply, demand and their signed difference for one period.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceRecord {
    /// The (month-end) date of the period
    #[cfg_attr(feature = "schemars", schemars(schema_with = "super::date::date_schema"))]
    #[cfg_attr(feature = "serde", serde(with = "super::date::iso_date"))]
    pub date: Date,
    /// Quantity supplied
    pub supply: f64,
    /// Quantity demanded
    pub demand: f64,
    /// Supply minus demand: positive is a surplus, negative a shortage
    pub balance: f64,
}

/// Aggregate statistics over a run of balance records.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceSummary {
    /// Mean of the signed balance (zero when there are no records)
    pub mean_balance: f64,
    /// Number of periods with supply above demand
    pub surplus_periods: usize,
    /// Number of periods with demand above supply
    pub shortage_periods: usize,
}

impl BalanceSummary {
    /// Summarize a run of records.
    pub fn of(records: &[BalanceRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total = records.iter().map(|r| r.balance).sum::<f64>();
        Self {
            mean_balance: total / records.len() as f64,
            surplus_periods: records.iter().filter(|r| r.balance > 0.0).count(),
            shortage_periods: records.iter().filter(|r| r.balance < 0.0).count(),
        }
    }
}
