//! Thin lookup helpers over web-sys queries.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList};

fn collect(nodes: NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    elements
}

/// All elements matching `selector`, in document order.
pub(crate) fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(collect(document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
pub(crate) fn select_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(collect(root.query_selector_all(selector)?))
}
