use chrono::NaiveDate;

/// `std::time::Instant` is unavailable on wasm32; `web_time` gives us one everywhere.
pub type AppInstant = web_time::Instant;

pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
pub const SHORT_DATE_FORMAT: &str = "%b %d";

/// "2024-01-05" -> "Jan 05". Anything unparseable is shown as received.
pub fn short_date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, STANDARD_DATE_FORMAT) {
        Ok(d) => d.format(SHORT_DATE_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(short_date_label("2024-01-05"), "Jan 05");
        assert_eq!(short_date_label("2024-12-31"), "Dec 31");
    }

    #[test]
    fn passes_through_unknown_formats() {
        assert_eq!(short_date_label("tomorrow"), "tomorrow");
    }
}
