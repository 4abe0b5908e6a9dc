#![cfg(all(target_arch = "wasm32", feature = "render"))]

use gdp_chart_wasm::app::GdpChart;
use gdp_chart_wasm::domain::gdp::{Dataset, DatasetMetadata, InMemoryDataSource};
use gdp_chart_wasm::infrastructure::rendering::TOOLTIP_ELEMENT_ID;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

fn source() -> InMemoryDataSource {
    let dataset = Dataset::from_pairs(
        &[("1947-01-01", 243.1), ("1947-04-01", 246.3), ("1947-07-01", 250.1)],
        DatasetMetadata::default(),
    )
    .unwrap();
    InMemoryDataSource::new(dataset)
}

/// Mount `GdpChart` behind a switch; turning it off unmounts the chart.
fn mount_chart(source: InMemoryDataSource) -> (web_sys::HtmlElement, RwSignal<bool>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: web_sys::HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let slot = Rc::new(Cell::new(None));
    mount_to(host.clone(), {
        let slot = Rc::clone(&slot);
        move || {
            let shown = create_rw_signal(true);
            slot.set(Some(shown));
            view! {
                <div>{move || shown.get().then(|| view! { <GdpChart source=source.clone() /> })}</div>
            }
        }
    });
    (host, slot.get().unwrap())
}

/// Let the spawned load, node-ref callbacks and effects run
async fn settle() {
    let window = web_sys::window().unwrap();
    let frame = js_sys::Promise::new(&mut |resolve, _| {
        window.request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(frame).await.unwrap();
    let timeout = js_sys::Promise::new(&mut |resolve, _| {
        window.set_timeout_with_callback(&resolve).unwrap();
    });
    JsFuture::from(timeout).await.unwrap();
}

fn tooltip_in(host: &web_sys::HtmlElement) -> Option<web_sys::HtmlElement> {
    host.query_selector(&format!("#{TOOLTIP_ELEMENT_ID}"))
        .unwrap()
        .map(|el| el.dyn_into::<web_sys::HtmlElement>().unwrap())
}

fn mouseover(target: &web_sys::Element) {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(40);
    init.set_client_y(120);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("mouseover", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn loads_from_source_and_attaches_tooltip() {
    let (host, _) = mount_chart(source());
    settle().await;

    assert_eq!(host.get_elements_by_class_name("bar").length(), 3);
    let tooltip = tooltip_in(&host).expect("overlay attached");
    assert_eq!(tooltip.style().get_property_value("opacity").unwrap(), "0");
    host.remove();
}

#[wasm_bindgen_test]
async fn unmount_removes_visible_tooltip() {
    let (host, shown) = mount_chart(source());
    settle().await;

    mouseover(&host.get_elements_by_class_name("bar").item(0).unwrap());
    settle().await;
    let tooltip = tooltip_in(&host).unwrap();
    assert_eq!(tooltip.style().get_property_value("opacity").unwrap(), "0.9");
    assert_eq!(tooltip.get_attribute("data-date").as_deref(), Some("1947-01-01"));

    shown.set(false);
    assert!(tooltip_in(&host).is_none());
    assert!(!tooltip.is_connected());
    assert_eq!(host.get_elements_by_class_name("bar").length(), 0);
    host.remove();
}

#[wasm_bindgen_test]
async fn unmount_removes_hidden_tooltip() {
    let (host, shown) = mount_chart(source());
    settle().await;
    assert!(tooltip_in(&host).is_some());

    shown.set(false);
    assert!(tooltip_in(&host).is_none());
    host.remove();
}

#[wasm_bindgen_test]
async fn result_after_unmount_is_discarded() {
    let (host, shown) = mount_chart(source());
    shown.set(false);
    settle().await;

    assert_eq!(host.get_elements_by_class_name("bar").length(), 0);
    assert!(tooltip_in(&host).is_none());
    host.remove();
}
