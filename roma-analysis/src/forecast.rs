use roma_core::{
    models::{Dataset, ForecastPoint, Product},
    ports::Forecaster,
};

/// Project a product's price through `horizon` using a trend fitted to the
/// full history.
///
/// The line is fitted to (calendar year, price) pairs, one per observation,
/// and evaluated at every year from the year after the last observation
/// through `horizon`, inclusive. The result therefore has
/// `max(0, horizon - last_year)` points; a horizon at or before the last
/// observed year (or an empty dataset) yields an empty forecast without
/// consulting the forecaster.
pub fn forecast_prices<F: Forecaster>(
    dataset: &Dataset,
    product: Product,
    horizon: i32,
    forecaster: &F,
) -> Result<Vec<ForecastPoint>, F::Error> {
    let Some(last_year) = dataset.last_year() else {
        return Ok(Vec::new());
    };
    if horizon <= last_year {
        return Ok(Vec::new());
    }

    let samples = dataset
        .observations()
        .iter()
        .map(|obs| (f64::from(obs.year()), obs.prices[product]))
        .collect::<Vec<_>>();
    let line = forecaster.fit(&samples)?;

    Ok((last_year + 1..=horizon)
        .map(|year| ForecastPoint {
            year,
            price: line.evaluate(f64::from(year)),
        })
        .collect())
}
