#![allow(unused_macros)]
use rstest_reuse::template;

// A testing "template" that runs a test once for every product in the catalogue

#[template]
#[rstest]
#[case::gasoline(Product::Gasoline)]
#[case::diesel(Product::Diesel)]
#[case::jet_fuel(Product::JetFuel)]
#[case::fuel_oils(Product::FuelOils)]
#[case::lubricating_oil(Product::LubricatingOil)]
#[case::asphalt(Product::Asphalt)]
#[case::lpg(Product::Lpg)]
pub fn all_products(#[case] product: Product) {}
