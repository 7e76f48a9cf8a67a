//! Smooth scrolling for same-document anchor links, compensated for the
//! height of the fixed nav overlapping the top of the viewport.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::ANCHOR_SELECTOR;
use crate::dom;

pub(crate) type ClickClosure = Closure<dyn FnMut(Event)>;

/// Extract the fragment id from an in-page href. A bare `#` carries no
/// target and is left to the browser's default handling.
pub(crate) fn fragment(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Destination offset for a scroll to `rect_top`: the element's top in
/// document coordinates, minus the nav height covering the viewport top.
pub(crate) fn scroll_top(rect_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    rect_top + scroll_y - nav_height
}

/// Bind a smooth-scroll handler to every `a[href^="#"]` currently in the
/// document. Links whose target id does not exist scroll nowhere.
pub(crate) fn bind(
    document: &Document,
    window: &Window,
    nav: &HtmlElement,
) -> Result<Vec<(Element, ClickClosure)>, JsValue> {
    let mut bound = Vec::new();
    for anchor in dom::select_all(document, ANCHOR_SELECTOR)? {
        let handler: ClickClosure = {
            let document = document.clone();
            let window = window.clone();
            let nav = nav.clone();
            let anchor = anchor.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let Some(id) = fragment(&href) else {
                    return;
                };
                event.prevent_default();
                let Some(target) = document.get_element_by_id(id) else {
                    return;
                };
                let top = scroll_top(
                    target.get_bounding_client_rect().top(),
                    window.scroll_y().unwrap_or_default(),
                    nav.offset_height() as f64,
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }) as Box<dyn FnMut(Event)>)
        };
        anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        bound.push((anchor, handler));
    }
    Ok(bound)
}
