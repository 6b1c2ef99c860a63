use super::{BalanceProduct, Product};
use std::ops::{Index, IndexMut};
use time::Date;

/// A price for every product in the catalogue.
///
/// Indexing by [`Product`] is total, so there is no "missing column" case.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct PriceSheet {
    /// Gasoline price
    pub gasoline: f64,
    /// Diesel price
    pub diesel: f64,
    /// Jet fuel price
    pub jet_fuel: f64,
    /// Fuel oils price
    pub fuel_oils: f64,
    /// Lubricating oil price
    pub lubricating_oil: f64,
    /// Asphalt price
    pub asphalt: f64,
    /// LPG price
    pub lpg: f64,
}

impl PriceSheet {
    /// Build a sheet by evaluating `f` for each product, in catalogue order.
    pub fn from_fn(mut f: impl FnMut(Product) -> f64) -> Self {
        let mut sheet = Self::default();
        for product in Product::ALL {
            sheet[product] = f(product);
        }
        sheet
    }

    /// Iterate over (product, price) pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (Product, f64)> + '_ {
        Product::ALL.into_iter().map(|product| (product, self[product]))
    }
}

impl Index<Product> for PriceSheet {
    type Output = f64;

    fn index(&self, product: Product) -> &f64 {
        match product {
            Product::Gasoline => &self.gasoline,
            Product::Diesel => &self.diesel,
            Product::JetFuel => &self.jet_fuel,
            Product::FuelOils => &self.fuel_oils,
            Product::LubricatingOil => &self.lubricating_oil,
            Product::Asphalt => &self.asphalt,
            Product::Lpg => &self.lpg,
        }
    }
}

impl IndexMut<Product> for PriceSheet {
    fn index_mut(&mut self, product: Product) -> &mut f64 {
        match product {
            Product::Gasoline => &mut self.gasoline,
            Product::Diesel => &mut self.diesel,
            Product::JetFuel => &mut self.jet_fuel,
            Product::FuelOils => &mut self.fuel_oils,
            Product::LubricatingOil => &mut self.lubricating_oil,
            Product::Asphalt => &mut self.asphalt,
            Product::Lpg => &mut self.lpg,
        }
    }
}

/// Supply and demand for a single product and period.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flow {
    /// Quantity supplied
    pub supply: f64,
    /// Quantity demanded
    pub demand: f64,
}

impl Flow {
    /// Supply minus demand: positive is a surplus, negative a shortage.
    pub fn balance(&self) -> f64 {
        self.supply - self.demand
    }
}

/// Supply and demand for every product that records them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSheet {
    /// Gasoline supply and demand
    pub gasoline: Flow,
    /// Diesel supply and demand
    pub diesel: Flow,
}

impl FlowSheet {
    /// Build a sheet by evaluating `f` for each balance product, in catalogue order.
    pub fn from_fn(mut f: impl FnMut(BalanceProduct) -> Flow) -> Self {
        let mut sheet = Self::default();
        for product in BalanceProduct::ALL {
            sheet[product] = f(product);
        }
        sheet
    }

    /// Iterate over (product, flow) pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (BalanceProduct, Flow)> + '_ {
        BalanceProduct::ALL
            .into_iter()
            .map(|product| (product, self[product]))
    }
}

impl Index<BalanceProduct> for FlowSheet {
    type Output = Flow;

    fn index(&self, product: BalanceProduct) -> &Flow {
        match product {
            BalanceProduct::Gasoline => &self.gasoline,
            BalanceProduct::Diesel => &self.diesel,
        }
    }
}

impl IndexMut<BalanceProduct> for FlowSheet {
    fn index_mut(&mut self, product: BalanceProduct) -> &mut Flow {
        match product {
            BalanceProduct::Gasoline => &mut self.gasoline,
            BalanceProduct::Diesel => &mut self.diesel,
        }
    }
}

/// One row of the market table: a month-end date with every recorded metric.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// The (month-end) date of the observation
    #[cfg_attr(feature = "schemars", schemars(schema_with = "super::date::date_schema"))]
    #[cfg_attr(feature = "serde", serde(with = "super::date::iso_date"))]
    pub date: Date,
    /// Prices for all products
    pub prices: PriceSheet,
    /// Supply and demand for the products that record them
    pub flows: FlowSheet,
}

impl Observation {
    /// The calendar year of the observation.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// The full table of observations, ordered by date.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "schemars",
    derive(schemars::JsonSchema),
    schemars(transparent)
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dataset(Vec<Observation>);

impl Dataset {
    /// Wrap an ordered sequence of observations.
    pub fn new(observations: Vec<Observation>) -> Self {
        Self(observations)
    }

    /// The observations, in date order.
    pub fn observations(&self) -> &[Observation] {
        &self.0
    }

    /// The number of observations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last calendar year present in the table.
    pub fn last_year(&self) -> Option<i32> {
        self.0.iter().map(Observation::year).max()
    }

    /// (date, price) pairs for a product.
    pub fn price_series(&self, product: Product) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.0.iter().map(move |obs| (obs.date, obs.prices[product]))
    }

    /// (date, flow) pairs for a balance product.
    pub fn flow_series(
        &self,
        product: BalanceProduct,
    ) -> impl Iterator<Item = (Date, Flow)> + '_ {
        self.0.iter().map(move |obs| (obs.date, obs.flows[product]))
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn sample() -> Dataset {
        [
            date!(2023 - 11 - 30),
            date!(2023 - 12 - 31),
            date!(2024 - 01 - 31),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, date)| Observation {
            date,
            prices: PriceSheet::from_fn(|p| (p.index() + i) as f64),
            flows: FlowSheet::from_fn(|_| Flow {
                supply: 10.0 + i as f64,
                demand: 12.0,
            }),
        })
        .collect()
    }

    #[test]
    fn test_last_year() {
        assert_eq!(sample().last_year(), Some(2024));
        assert_eq!(Dataset::default().last_year(), None);
    }

    #[test]
    fn test_price_sheet_indexing() {
        let sheet = PriceSheet::from_fn(|p| p.index() as f64);
        for (product, price) in sheet.iter() {
            assert_eq!(price, product.index() as f64);
        }
        assert_eq!(sheet.lpg, 6.0);
    }

    #[test]
    fn test_price_series_follows_rows() {
        let prices = sample()
            .price_series(Product::Asphalt)
            .map(|(_, price)| price)
            .collect::<Vec<_>>();
        assert_eq!(prices, vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_flow_balance() {
        let balances = sample()
            .flow_series(BalanceProduct::Diesel)
            .map(|(_, flow)| flow.balance())
            .collect::<Vec<_>>();
        assert_eq!(balances, vec![-2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_serialized_shape() {
        let dataset = sample();
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json[0]["date"], "2023-11-30");
        assert_eq!(json[0]["prices"]["jet-fuel"], 2.0);
        assert_eq!(json[2]["flows"]["gasoline"]["supply"], 12.0);

        let back: Dataset = serde_json::from_value(json).unwrap();
        assert_eq!(back, dataset);
    }
}
