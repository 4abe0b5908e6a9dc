use chrono::{Datelike, NaiveDate};

/// Dates in the dataset are plain `YYYY-MM-DD` strings.
pub const PERIOD_FORMAT: &str = "%Y-%m-%d";

/// No trimming: trailing whitespace is rejected like any other stray character.
pub fn parse_period_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, PERIOD_FORMAT)
}

/// Calendar quarter (1..=4) containing `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month0() / 3) + 1
}

/// Format as `YYYY Qn`, e.g. `1947 Q1`.
pub fn format_quarter_label(date: NaiveDate) -> String {
    format!("{} Q{}", date.year(), quarter_of(date))
}

/// Days since 0001-01-01, the unit the time scale interpolates in.
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        parse_period_date(raw).unwrap()
    }

    #[test]
    fn quarters_follow_calendar_months() {
        assert_eq!(quarter_of(date("1947-01-01")), 1);
        assert_eq!(quarter_of(date("1947-03-31")), 1);
        assert_eq!(quarter_of(date("1947-04-01")), 2);
        assert_eq!(quarter_of(date("1947-07-01")), 3);
        assert_eq!(quarter_of(date("2015-10-01")), 4);
    }

    #[test]
    fn quarter_label_matches_year_and_quarter() {
        assert_eq!(format_quarter_label(date("1947-01-01")), "1947 Q1");
        assert_eq!(format_quarter_label(date("2015-07-01")), "2015 Q3");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_period_date("1947/01/01").is_err());
        assert!(parse_period_date("1947-13-01").is_err());
        assert!(parse_period_date("").is_err());
    }

    #[test]
    fn rejects_trailing_whitespace() {
        assert!(parse_period_date("1947-01-01 ").is_err());
        assert!(parse_period_date("1947-01-01\n").is_err());
    }

    #[test]
    fn later_dates_have_larger_day_numbers() {
        assert_eq!(day_number(date("1947-01-02")) - day_number(date("1947-01-01")), 1.0);
        assert!(day_number(date("2015-07-01")) > day_number(date("1947-01-01")));
    }
}
