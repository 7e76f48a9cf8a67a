//! Controller lifecycle: element lookup, listener binding, teardown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, IntersectionObserver, Window,
};

use crate::config::{ControllerOptions, NAV_ID, NAV_LINKS_SELECTOR, NAV_TOGGLE_ID};
use crate::{anchors, cards, dom, nav, reveal};

type ClickClosure = Closure<dyn FnMut(Event)>;

/// Owns every listener this crate registers, so that all of them can be
/// removed again. Dropping the controller without calling [`detach`] or
/// [`forget`] would invalidate the closures while the DOM still holds
/// them, so both consume `self`.
///
/// [`detach`]: PageController::detach
/// [`forget`]: PageController::forget
pub struct PageController {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    toggle: Option<(Element, ClickClosure)>,
    link_closers: Vec<(Element, ClickClosure)>,
    anchor_handlers: Vec<(Element, anchors::ClickClosure)>,
    observer: Option<(IntersectionObserver, reveal::RevealClosure)>,
}

impl PageController {
    /// Look up the page's collaborators, bind all listeners, and finish
    /// with one synchronous nav-styling pass so the page is correct
    /// before any user input. Optional collaborators that are absent
    /// disable just their feature; a missing nav container is an error.
    pub fn attach(document: &Document, options: ControllerOptions) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let nav: HtmlElement = document
            .get_element_by_id(NAV_ID)
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| JsValue::from_str("nav container #nav missing"))?;

        // Sticky nav styling, bound passive so scrolling never waits on us.
        let on_scroll = {
            let window = window.clone();
            let nav = nav.clone();
            Closure::wrap(Box::new(move || {
                nav::apply_scroll_state(&nav, window.scroll_y().unwrap_or_default());
            }) as Box<dyn FnMut()>)
        };
        let scroll_opts = AddEventListenerOptions::new();
        scroll_opts.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &scroll_opts,
        )?;

        let toggle_el = document.get_element_by_id(NAV_TOGGLE_ID);
        let panel = document.query_selector(NAV_LINKS_SELECTOR)?;

        let toggle = match &toggle_el {
            Some(toggle_el) => {
                let handler: ClickClosure = {
                    let toggle_el = toggle_el.clone();
                    let panel = panel.clone();
                    Closure::wrap(Box::new(move |_: Event| {
                        nav::toggle_menu(&toggle_el, panel.as_ref());
                    }) as Box<dyn FnMut(Event)>)
                };
                toggle_el
                    .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
                Some((toggle_el.clone(), handler))
            }
            None => {
                log::debug!("no mobile toggle; menu toggling not bound");
                None
            }
        };

        // Any link inside the panel closes the menu again.
        let mut link_closers = Vec::new();
        if let Some(panel_el) = &panel {
            for link in dom::select_all_within(panel_el, "a")? {
                let handler: ClickClosure = {
                    let toggle_el = toggle_el.clone();
                    let panel_el = panel_el.clone();
                    Closure::wrap(Box::new(move |_: Event| {
                        nav::close_menu(toggle_el.as_ref(), &panel_el);
                    }) as Box<dyn FnMut(Event)>)
                };
                link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
                link_closers.push((link, handler));
            }
        }

        let observer = reveal::observe(document, &options)?;
        let anchor_handlers = anchors::bind(document, &window, &nav)?;
        cards::assign_delays(document)?;

        // Initial pass: the nav must be styled correctly on load.
        nav::apply_scroll_state(&nav, window.scroll_y().unwrap_or_default());

        Ok(Self {
            window,
            on_scroll,
            toggle,
            link_closers,
            anchor_handlers,
            observer,
        })
    }

    /// Remove every listener registered by [`attach`] and disconnect the
    /// reveal observer. Class markers already applied are left in place.
    ///
    /// [`attach`]: PageController::attach
    pub fn detach(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some((toggle, handler)) = &self.toggle {
            let _ = toggle
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
        for (link, handler) in &self.link_closers {
            let _ =
                link.remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
        for (anchor, handler) in &self.anchor_handlers {
            let _ = anchor
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
    }

    /// Leak the controller so its listeners stay installed for the rest
    /// of the page's life. For embedders that never detach; the module
    /// entry point keeps the controller in a slot instead so [`detach`]
    /// stays reachable.
    ///
    /// [`detach`]: PageController::detach
    pub fn forget(self) {
        std::mem::forget(self);
    }
}
