use chrono::NaiveDate;
use derive_more::{Constructor, From, Into};
use serde::Serialize;
use std::fmt;
use strum::{AsRefStr, EnumIter};

use crate::domain::errors::DataError;
use crate::time_utils::{format_quarter_label, parse_period_date, quarter_of};

/// Value Object - calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, AsRefStr)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn of(date: NaiveDate) -> Self {
        match quarter_of(date) {
            1 => Quarter::Q1,
            2 => Quarter::Q2,
            3 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }
}

/// Value Object - a reporting period, keeping the raw string it came from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    date: NaiveDate,
    raw: String,
}

impl Period {
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        let date = parse_period_date(raw).map_err(|e| DataError::InvalidPeriod {
            raw: raw.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { date, raw: raw.to_string() })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date string exactly as the dataset spelled it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn quarter(&self) -> Quarter {
        Quarter::of(self.date)
    }

    /// `1947 Q1`
    pub fn label(&self) -> String {
        format_quarter_label(self.date)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Value Object - an amount in billions of dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize)]
pub struct Billions(f64);

impl Billions {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Billions {
    /// Shortest round-trip form: `243.1`, `250`, `18064.7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn period_keeps_raw_string() {
        let period = Period::parse("1947-04-01").unwrap();
        assert_eq!(period.raw(), "1947-04-01");
        assert_eq!(period.quarter(), Quarter::Q2);
        assert_eq!(period.label(), "1947 Q2");
    }

    #[test]
    fn invalid_period_reports_raw_value() {
        match Period::parse("Q1-1947") {
            Err(DataError::InvalidPeriod { raw, .. }) => assert_eq!(raw, "Q1-1947"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn billions_display_has_no_trailing_zeros() {
        assert_eq!(Billions::new(243.1).to_string(), "243.1");
        assert_eq!(Billions::new(250.0).to_string(), "250");
        assert_eq!(Billions::new(18064.7).to_string(), "18064.7");
    }

    #[test]
    fn quarter_names() {
        let names: Vec<String> = Quarter::iter().map(|q| q.as_ref().to_string()).collect();
        assert_eq!(names, ["Q1", "Q2", "Q3", "Q4"]);
    }
}
