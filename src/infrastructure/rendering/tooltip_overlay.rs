//! The floating tooltip element.
//!
//! The overlay is owned by the chart component and lives inside the chart's
//! own container. Dropping the handle removes the element from the document,
//! whatever state it was in.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::domain::{
    chart::TooltipState,
    errors::{UiError, UiResult},
};

pub const TOOLTIP_ELEMENT_ID: &str = "tooltip";

const BASE_STYLE: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("padding", "10px"),
    ("background", "rgba(0, 0, 0, 0.8)"),
    ("color", "white"),
    ("border-radius", "5px"),
    ("font-size", "12px"),
    ("opacity", "0"),
    ("pointer-events", "none"),
];

fn dom_error(context: &str, err: JsValue) -> UiError {
    UiError::DomOperationFailed(format!("{context}: {err:?}"))
}

pub struct TooltipOverlay {
    element: HtmlElement,
}

impl TooltipOverlay {
    /// Create the overlay as the last child of `host`, hidden.
    pub fn attach(host: &Element) -> UiResult<Self> {
        let document = host.owner_document().ok_or(UiError::WindowUnavailable)?;
        let element = document
            .create_element("div")
            .map_err(|e| dom_error("create tooltip", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::DomOperationFailed("tooltip is not an HtmlElement".to_string()))?;

        element.set_id(TOOLTIP_ELEMENT_ID);
        let style = element.style();
        for (property, value) in BASE_STYLE {
            style.set_property(property, value).map_err(|e| dom_error(property, e))?;
        }

        host.append_child(&element).map_err(|e| dom_error("append tooltip", e))?;
        Ok(Self { element })
    }

    /// Reflect `state` onto the element. Hiding only drops the opacity; the
    /// last content stays in place.
    pub fn apply(&self, state: &TooltipState) -> UiResult<()> {
        let style = self.element.style();
        style
            .set_property("opacity", &state.opacity().to_string())
            .map_err(|e| dom_error("opacity", e))?;

        if let TooltipState::Visible { left, top, content } = state {
            self.element.set_inner_html(&content.html);
            self.element
                .set_attribute("data-date", &content.data_date)
                .map_err(|e| dom_error("data-date", e))?;
            style.set_property("left", &format!("{left}px")).map_err(|e| dom_error("left", e))?;
            style.set_property("top", &format!("{top}px")).map_err(|e| dom_error("top", e))?;
        }
        Ok(())
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn is_attached(&self) -> bool {
        self.element.is_connected()
    }
}

impl Drop for TooltipOverlay {
    fn drop(&mut self) {
        self.element.remove();
    }
}
