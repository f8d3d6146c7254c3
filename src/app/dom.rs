//! Small DOM helpers. Only call these from effects and event handlers, never
//! while rendering on the server.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::scroll::Landmarks;

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn measure_landmarks() -> Landmarks {
    let document = document();
    Landmarks::measure(|id| {
        document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    })
}

pub fn set_body_overflow(overflow: &str) {
    if let Some(body) = document().body() {
        if let Err(e) = body.style().set_property("overflow", overflow) {
            log::warn!("couldn't set body overflow: {e:?}");
        }
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls the element with `id` into view. Returns false when no
/// such element exists.
pub fn scroll_to_landmark(id: &str) -> bool {
    let Some(el) = document().get_element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("couldn't open {url}: {e:?}");
    }
}
