use web_sys::{Element, MouseEvent};

/// Cursor position relative to `host`'s top-left corner, in CSS pixels.
pub fn cursor_within(host: &Element, event: &MouseEvent) -> (f64, f64) {
    let rect = host.get_bounding_client_rect();
    relative_to(event.client_x() as f64, event.client_y() as f64, rect.left(), rect.top())
}

/// Cursor position relative to the page, for when no host is available.
pub fn cursor_on_page(event: &MouseEvent) -> (f64, f64) {
    (event.page_x() as f64, event.page_y() as f64)
}

pub fn relative_to(client_x: f64, client_y: f64, origin_x: f64, origin_y: f64) -> (f64, f64) {
    (client_x - origin_x, client_y - origin_y)
}
