//! Hover tooltip state.
//!
//! `Hidden` -> hover a bar -> `Visible` (offset from the cursor) -> mouse-out
//! -> `Hidden`. Removal on unmount is the overlay's job, not this type's.

use serde::Serialize;

use super::services::BarRect;

pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -28.0;
pub const VISIBLE_OPACITY: f64 = 0.9;

/// What the tooltip shows for one bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    /// Raw period string, mirrored to the overlay's `data-date`
    pub data_date: String,
    pub html: String,
}

impl TooltipContent {
    pub fn for_bar(bar: &BarRect) -> Self {
        Self {
            data_date: bar.data_date.clone(),
            html: format!("{}<br/>${} Billion", bar.period_label, bar.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        left: f64,
        top: f64,
        content: TooltipContent,
    },
}

impl TooltipState {
    /// Enter `Visible` for `content`, anchored near the cursor.
    pub fn show(&mut self, content: TooltipContent, cursor_x: f64, cursor_y: f64) {
        *self = TooltipState::Visible {
            left: cursor_x + TOOLTIP_OFFSET_X,
            top: cursor_y + TOOLTIP_OFFSET_Y,
            content,
        };
    }

    pub fn hide(&mut self) {
        *self = TooltipState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible { .. })
    }

    pub fn opacity(&self) -> f64 {
        if self.is_visible() { VISIBLE_OPACITY } else { 0.0 }
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        match self {
            TooltipState::Visible { content, .. } => Some(content),
            TooltipState::Hidden => None,
        }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            TooltipState::Visible { left, top, .. } => Some((*left, *top)),
            TooltipState::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> BarRect {
        BarRect {
            index: 0,
            x: 0.0,
            y: 10.0,
            width: 370.0,
            height: 330.0,
            data_date: "1947-01-01".into(),
            data_gdp: 243.1,
            period_label: "1947 Q1".into(),
        }
    }

    #[test]
    fn hover_then_mouse_out() {
        let mut state = TooltipState::default();
        assert!(!state.is_visible());
        assert_eq!(state.opacity(), 0.0);

        state.show(TooltipContent::for_bar(&bar()), 100.0, 200.0);
        assert!(state.is_visible());
        assert_eq!(state.opacity(), 0.9);
        assert_eq!(state.position(), Some((110.0, 172.0)));
        assert_eq!(state.content().map(|c| c.html.as_str()), Some("1947 Q1<br/>$243.1 Billion"));

        state.hide();
        assert_eq!(state, TooltipState::Hidden);
        assert!(state.content().is_none());
    }
}
