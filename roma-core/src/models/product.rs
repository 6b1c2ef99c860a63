use std::{fmt, str::FromStr};

/// The refined oil products tracked by the dashboard.
///
/// This is a closed set: every observation carries a price for each of
/// these products, and the selector in any user interface can only ever
/// offer these seven values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Product {
    /// Motor gasoline
    #[default]
    Gasoline,
    /// Road diesel
    Diesel,
    /// Kerosene-type jet fuel
    JetFuel,
    /// Residual and distillate fuel oils
    FuelOils,
    /// Lubricating base oils
    LubricatingOil,
    /// Asphalt and road oil
    Asphalt,
    /// Liquefied petroleum gases
    Lpg,
}

impl Product {
    /// Every product, in catalogue order.
    pub const ALL: [Product; 7] = [
        Product::Gasoline,
        Product::Diesel,
        Product::JetFuel,
        Product::FuelOils,
        Product::LubricatingOil,
        Product::Asphalt,
        Product::Lpg,
    ];

    /// The number of products in the catalogue.
    pub const COUNT: usize = Self::ALL.len();

    /// The position of this product in [`Product::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The human-readable name, e.g. "Jet Fuel".
    pub const fn name(self) -> &'static str {
        match self {
            Product::Gasoline => "Gasoline",
            Product::Diesel => "Diesel",
            Product::JetFuel => "Jet Fuel",
            Product::FuelOils => "Fuel Oils",
            Product::LubricatingOil => "Lubricating Oil",
            Product::Asphalt => "Asphalt",
            Product::Lpg => "LPG",
        }
    }

    /// The identifier used in URLs and on the command line, e.g. "jet-fuel".
    pub const fn slug(self) -> &'static str {
        match self {
            Product::Gasoline => "gasoline",
            Product::Diesel => "diesel",
            Product::JetFuel => "jet-fuel",
            Product::FuelOils => "fuel-oils",
            Product::LubricatingOil => "lubricating-oil",
            Product::Asphalt => "asphalt",
            Product::Lpg => "lpg",
        }
    }

    /// The metrics recorded for this product.
    pub const fn metrics(self) -> MetricSet {
        match self.balance() {
            Some(_) => MetricSet::PriceSupplyDemand,
            None => MetricSet::PriceOnly,
        }
    }

    /// The supply/demand view of this product, if it has one.
    pub const fn balance(self) -> Option<BalanceProduct> {
        match self {
            Product::Gasoline => Some(BalanceProduct::Gasoline),
            Product::Diesel => Some(BalanceProduct::Diesel),
            _ => None,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Product {
    type Err = ParseProductError;

    /// Accepts the slug ("jet-fuel"), the display name ("Jet Fuel") or the
    /// column stem ("Jet_Fuel"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Product::ALL
            .into_iter()
            .find(|product| product.slug() == normalized)
            .ok_or_else(|| ParseProductError(s.to_owned()))
    }
}

/// The columns recorded for a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MetricSet {
    /// Only a price series is available
    PriceOnly,
    /// Price, supply and demand series are available
    PriceSupplyDemand,
}

impl MetricSet {
    /// Whether the supply/demand balance view can be computed.
    pub const fn has_balance(self) -> bool {
        matches!(self, MetricSet::PriceSupplyDemand)
    }
}

/// The subset of products that carry supply and demand figures.
///
/// The balance calculator only accepts this type, so asking for the balance
/// of a price-only product is rejected when converting from [`Product`]
/// rather than when looking up a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BalanceProduct {
    /// Motor gasoline
    Gasoline,
    /// Road diesel
    Diesel,
}

impl BalanceProduct {
    /// Every balance product, in catalogue order.
    pub const ALL: [BalanceProduct; 2] = [BalanceProduct::Gasoline, BalanceProduct::Diesel];

    /// The number of balance products.
    pub const COUNT: usize = Self::ALL.len();

    /// The position of this product in [`BalanceProduct::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The corresponding entry of the full catalogue.
    pub const fn product(self) -> Product {
        match self {
            BalanceProduct::Gasoline => Product::Gasoline,
            BalanceProduct::Diesel => Product::Diesel,
        }
    }
}

impl fmt::Display for BalanceProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.product().fmt(f)
    }
}

impl From<BalanceProduct> for Product {
    fn from(value: BalanceProduct) -> Self {
        value.product()
    }
}

impl TryFrom<Product> for BalanceProduct {
    type Error = UnsupportedProduct;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        value.balance().ok_or(UnsupportedProduct(value))
    }
}

/// Error when a product string does not name a known product
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown product \"{0}\"")]
pub struct ParseProductError(pub String);

/// Error when a price-only product is used where supply and demand are required
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("supply/demand balance is not available for {0}")]
pub struct UnsupportedProduct(pub Product);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_only_two_products_have_balances() {
        let with_balance = Product::ALL
            .into_iter()
            .filter(|p| p.metrics().has_balance())
            .collect::<Vec<_>>();
        assert_eq!(with_balance, vec![Product::Gasoline, Product::Diesel]);
    }

    #[rstest]
    #[case(Product::JetFuel)]
    #[case(Product::FuelOils)]
    #[case(Product::LubricatingOil)]
    #[case(Product::Asphalt)]
    #[case(Product::Lpg)]
    fn test_price_only_products_reject_balance(#[case] product: Product) {
        assert_eq!(
            BalanceProduct::try_from(product).unwrap_err(),
            UnsupportedProduct(product)
        );
        assert_eq!(product.metrics(), MetricSet::PriceOnly);
    }

    #[test]
    fn test_balance_roundtrip() {
        for balance in BalanceProduct::ALL {
            assert_eq!(BalanceProduct::try_from(balance.product()), Ok(balance));
        }
    }

    #[rstest]
    #[case("jet-fuel", Product::JetFuel)]
    #[case("Jet Fuel", Product::JetFuel)]
    #[case("Jet_Fuel", Product::JetFuel)]
    #[case("LPG", Product::Lpg)]
    #[case(" lubricating oil ", Product::LubricatingOil)]
    fn test_parse(#[case] input: &str, #[case] expected: Product) {
        assert_eq!(input.parse::<Product>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "kerosene".parse::<Product>(),
            Err(ParseProductError("kerosene".to_owned()))
        );
    }

    #[test]
    fn test_index_matches_catalogue_order() {
        for (i, product) in Product::ALL.into_iter().enumerate() {
            assert_eq!(product.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Product::LubricatingOil).unwrap();
        assert_eq!(json, "\"lubricating-oil\"");
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Product::LubricatingOil);
    }

    #[test]
    fn test_unsupported_message() {
        assert_eq!(
            UnsupportedProduct(Product::Asphalt).to_string(),
            "supply/demand balance is not available for Asphalt"
        );
    }
}
