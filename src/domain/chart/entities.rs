use super::scales::{ChartScales, compute_scales};
use super::services::{AxisTick, BarRect, layout, x_axis_ticks, y_axis_ticks};
use super::value_objects::ChartConfig;
use crate::domain::gdp::Dataset;

/// Everything one render pass draws, computed without touching the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub config: ChartConfig,
    pub scales: ChartScales,
    pub bars: Vec<BarRect>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl ChartScene {
    /// `None` when there is nothing to draw.
    pub fn build(dataset: &Dataset, config: &ChartConfig) -> Option<Self> {
        let scales = compute_scales(dataset, config.draw_width(), config.draw_height())?;
        let bars = layout(dataset, &scales);
        if bars.is_empty() {
            return None;
        }
        Some(Self {
            config: config.clone(),
            x_ticks: x_axis_ticks(&scales, config.tick_count),
            y_ticks: y_axis_ticks(&scales, config.tick_count),
            bars,
            scales,
        })
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// `translate(left,top)` for the drawing-area group
    pub fn plot_transform(&self) -> String {
        format!("translate({},{})", self.config.margins.left, self.config.margins.top)
    }
}
