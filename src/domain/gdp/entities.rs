use chrono::NaiveDate;

use super::value_objects::{Billions, Period};
use crate::domain::errors::DataError;

/// One data point: GDP for a quarter
#[derive(Debug, Clone, PartialEq)]
pub struct GdpRecord {
    pub period: Period,
    pub value: Billions,
}

impl GdpRecord {
    pub fn new(period: Period, value: Billions) -> Self {
        Self { period, value }
    }

    pub fn parse(raw_period: &str, value: f64) -> Result<Self, DataError> {
        Ok(Self::new(Period::parse(raw_period)?, Billions::new(value)))
    }
}

/// Descriptive fields that travel with the series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetMetadata {
    pub name: String,
    pub description: String,
    pub source_name: String,
    pub display_url: String,
    pub source_code: Option<String>,
    pub frequency: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub updated_at: Option<String>,
    pub column_names: Vec<String>,
}

/// Aggregate - the full, chronologically ordered GDP series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<GdpRecord>,
    metadata: DatasetMetadata,
}

impl Dataset {
    pub fn new(records: Vec<GdpRecord>, metadata: DatasetMetadata) -> Self {
        Self { records, metadata }
    }

    /// Build from `(date, value)` pairs, failing on the first bad date.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, f64)], metadata: DatasetMetadata) -> Result<Self, DataError> {
        let records = pairs
            .iter()
            .map(|(raw, value)| GdpRecord::parse(raw.as_ref(), *value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records, metadata))
    }

    pub fn records(&self) -> &[GdpRecord] {
        &self.records
    }

    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest period, or `None` when empty
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.records.iter().map(|r| r.period.date()).fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }

    /// Smallest and largest value, or `None` when empty
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.records.iter().map(|r| r.value.value()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_cover_all_records() {
        let dataset = Dataset::from_pairs(
            &[("1947-01-01", 243.1), ("1947-04-01", 246.3), ("1946-10-01", 240.0)],
            DatasetMetadata::default(),
        )
        .unwrap();

        let (lo, hi) = dataset.date_extent().unwrap();
        assert_eq!(lo.to_string(), "1946-10-01");
        assert_eq!(hi.to_string(), "1947-04-01");
        assert_eq!(dataset.value_extent(), Some((240.0, 246.3)));
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.date_extent(), None);
        assert_eq!(dataset.value_extent(), None);
    }

    #[test]
    fn from_pairs_stops_at_bad_date() {
        let result = Dataset::from_pairs(&[("1947-01-01", 1.0), ("not-a-date", 2.0)], DatasetMetadata::default());
        assert!(matches!(result, Err(DataError::InvalidPeriod { .. })));
    }
}
