pub mod tooltip_overlay;

pub use tooltip_overlay::{TOOLTIP_ELEMENT_ID, TooltipOverlay};
