use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::ticks::{nice_ticks, tick_step, year_step};
use crate::domain::gdp::Dataset;
use crate::time_utils::day_number;

/// Linear map from a numeric domain onto a pixel range.
///
/// A collapsed domain maps every input to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0 || !self.span().is_finite()
    }

    pub fn map(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range.0;
        }
        let t = (value - self.domain.0) / self.span();
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Step used by [`LinearScale::ticks`], for label precision
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Linear map from calendar dates onto a pixel range, interpolated in days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, inner: LinearScale::new((day_number(domain.0), day_number(domain.1)), range) }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        self.inner.map(day_number(date))
    }

    /// 1 January of every `step`-th year inside the domain.
    pub fn year_ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (start, stop) = self.domain;
        let step = year_step(fractional_year(start), fractional_year(stop), count);
        (start.year()..=stop.year())
            .filter(|year| year.rem_euclid(step) == 0)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .filter(|date| *date >= start && *date <= stop)
            .collect()
    }
}

fn fractional_year(date: NaiveDate) -> f64 {
    date.year() as f64 + date.ordinal0() as f64 / 365.25
}

/// The pair of scales for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub time: TimeScale,
    pub value: LinearScale,
    pub draw_width: f64,
    pub draw_height: f64,
}

/// Derive both scales from the dataset's extent. `None` for an empty dataset.
///
/// The value domain runs from `min(0, smallest value)` to the largest value
/// so bars rise from a zero baseline.
pub fn compute_scales(dataset: &Dataset, draw_width: f64, draw_height: f64) -> Option<ChartScales> {
    let (first, last) = dataset.date_extent()?;
    let (min_value, max_value) = dataset.value_extent()?;

    let time = TimeScale::new((first, last), (0.0, draw_width));
    let value = LinearScale::new((min_value.min(0.0), max_value), (draw_height, 0.0));

    Some(ChartScales { time, value, draw_width, draw_height })
}
