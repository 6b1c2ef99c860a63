use time::{Date, Month, error::ComponentRange, format_description::BorrowedFormatItem};

/// The calendar-date format used for labels and serialization ("2024-12-31").
pub const ISO_DATE: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// The last day of the given month.
pub fn month_end(year: i32, month: Month) -> Result<Date, ComponentRange> {
    Date::from_calendar_date(year, month, time::util::days_in_month(month, year))
}

#[cfg(feature = "serde")]
pub(crate) mod iso_date {
    use super::ISO_DATE;
    use serde::{Deserialize as _, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date.format(ISO_DATE).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Date::parse(&raw, ISO_DATE).map_err(D::Error::custom)
    }
}

#[cfg(feature = "schemars")]
pub(crate) fn date_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "format": "date",
    })
}
