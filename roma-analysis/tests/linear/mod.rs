use roma_core::models::{Dataset, Flow, FlowSheet, Observation, PriceSheet, month_end};
use time::Month;

/// Monthly observations from January `first_year` through December
/// `last_year`, with every price on the exact line `2 * year - 4000` and a
/// constant supply of 100 against a demand of 90.
pub fn linear_dataset(first_year: i32, last_year: i32) -> Dataset {
    (first_year..=last_year)
        .flat_map(|year| {
            (1..=12u8).map(move |month| Observation {
                date: month_end(year, Month::try_from(month).unwrap()).unwrap(),
                prices: PriceSheet::from_fn(|_| 2.0 * f64::from(year) - 4000.0),
                flows: FlowSheet::from_fn(|_| Flow {
                    supply: 100.0,
                    demand: 90.0,
                }),
            })
        })
        .collect()
}
