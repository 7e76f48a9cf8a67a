//! One-way scroll-reveal animation backed by an `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::{ControllerOptions, REVEAL_SELECTOR, REVEAL_THRESHOLD, VISIBLE_CLASS};
use crate::dom;

pub(crate) type RevealClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observe every reveal element present in the document. Elements added
/// later are not picked up. Returns `None` when there is nothing to
/// watch.
pub(crate) fn observe(
    document: &Document,
    options: &ControllerOptions,
) -> Result<Option<(IntersectionObserver, RevealClosure)>, JsValue> {
    let elements = dom::select_all(document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        log::debug!("no reveal elements; observer not created");
        return Ok(None);
    }

    let unobserve_after_reveal = options.unobserve_after_reveal;
    let callback: RevealClosure = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    // Revealed elements stay revealed after leaving the viewport.
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(VISIBLE_CLASS);
                if unobserve_after_reveal {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    // Viewport root, no margin, 10% visibility.
    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for element in &elements {
        observer.observe(element);
    }
    log::debug!("observing {} reveal elements", elements.len());
    Ok(Some((observer, callback)))
}
