use chrono::NaiveDate;

/// Human date, or the raw server string when it did not parse.
#[must_use]
pub fn format_day(day: Option<NaiveDate>, raw: &str) -> String {
    day.map_or_else(|| raw.to_string(), |day| day.format("%b %-d, %Y").to_string())
}
