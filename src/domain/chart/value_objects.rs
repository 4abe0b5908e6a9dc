use serde::Serialize;

/// Value Object - RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xFF) as u8, g: ((hex >> 8) & 0xFF) as u8, b: (hex & 0xFF) as u8 }
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#rrggbb`
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    pub const BAR: Color = Color::from_hex(0x3b82f6);
    pub const TITLE: Color = Color::from_hex(0x1e293b);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// Value Object - space between the SVG edge and the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 80.0, right: 60.0, bottom: 80.0, left: 100.0 }
    }
}

pub const GDP_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Fixed chart settings. There is no runtime configuration; everything
/// comes from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub bar_color: Color,
    pub title: &'static str,
    pub y_axis_label: &'static str,
    pub x_axis_note: &'static str,
    pub data_url: &'static str,
    /// Approximate number of ticks per axis
    pub tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            margins: Margins::default(),
            bar_color: Color::BAR,
            title: "United States GDP",
            y_axis_label: "Gross Domestic Product",
            x_axis_note: "More Information: http://www.bea.gov/national/pdf/nipaguid.pdf",
            data_url: GDP_DATA_URL,
            tick_count: 10,
        }
    }
}

impl ChartConfig {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn draw_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn draw_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }
}
