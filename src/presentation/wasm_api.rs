use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::{
    errors::{AppError, UiError},
    logging::{LogComponent, get_logger},
};

/// Mount the GDP chart at the end of `<body>`.
#[wasm_bindgen(js_name = mountGdpChart)]
pub fn mount_gdp_chart() {
    get_logger().info(LogComponent::Presentation("WasmApi"), "📊 Mounting GDP chart on <body>");
    leptos::mount_to_body(App);
}

/// Mount the GDP chart inside the element with id `element_id`.
#[wasm_bindgen(js_name = mountGdpChartTo)]
pub fn mount_gdp_chart_to(element_id: &str) -> Result<(), JsValue> {
    let host = find_host(element_id).map_err(|e| {
        let err = AppError::from(e);
        get_logger().error(LogComponent::Presentation("WasmApi"), &err.to_string());
        JsValue::from_str(&err.to_string())
    })?;

    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        &format!("📊 Mounting GDP chart into #{}", element_id),
    );
    leptos::mount_to(host, App);
    Ok(())
}

fn find_host(element_id: &str) -> Result<web_sys::HtmlElement, UiError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(UiError::WindowUnavailable)?;
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| UiError::ElementNotFound(element_id.to_string()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| UiError::DomOperationFailed(format!("#{} is not an HTML element", element_id)))
}
