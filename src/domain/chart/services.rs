use serde::Serialize;

use super::scales::ChartScales;
use super::ticks::format_tick_value;
use crate::domain::gdp::{Billions, Dataset, GdpRecord};

/// One bar, fully positioned inside the drawing area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Raw period string, exposed as `data-date`
    pub data_date: String,
    /// Raw value, exposed as `data-gdp`
    pub data_gdp: f64,
    /// `1947 Q1`
    pub period_label: String,
}

impl BarRect {
    fn from_record(index: usize, record: &GdpRecord, bar_width: f64, scales: &ChartScales) -> Self {
        let y = scales.value.map(record.value.value());
        Self {
            index,
            x: index as f64 * bar_width,
            y,
            width: bar_width,
            height: scales.draw_height - y,
            data_date: record.period.raw().to_string(),
            data_gdp: record.value.value(),
            period_label: record.period.label(),
        }
    }

    pub fn value(&self) -> Billions {
        Billions::new(self.data_gdp)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Lay out one bar per record. Bars split the drawing width evenly, in
/// dataset order.
pub fn layout(dataset: &Dataset, scales: &ChartScales) -> Vec<BarRect> {
    if dataset.is_empty() {
        return Vec::new();
    }
    let bar_width = scales.draw_width / dataset.len() as f64;
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| BarRect::from_record(index, record, bar_width, scales))
        .collect()
}

/// A tick mark: distance along its axis and its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// Ticks for the bottom (time) axis
pub fn x_axis_ticks(scales: &ChartScales, count: usize) -> Vec<AxisTick> {
    scales
        .time
        .year_ticks(count)
        .into_iter()
        .map(|date| AxisTick { offset: scales.time.map(date), label: date.format("%Y").to_string() })
        .collect()
}

/// Ticks for the left (value) axis
pub fn y_axis_ticks(scales: &ChartScales, count: usize) -> Vec<AxisTick> {
    let step = scales.value.tick_step(count);
    scales
        .value
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick { offset: scales.value.map(value), label: format_tick_value(value, step) })
        .collect()
}
