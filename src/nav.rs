//! Sticky navigation styling and the mobile menu.

use web_sys::Element;

use crate::config::{ACTIVE_CLASS, NAV_SCROLL_THRESHOLD_PX, SCROLLED_CLASS};

/// Whether the nav should carry the scrolled marker at this offset.
pub(crate) fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

/// Sync the nav's scrolled marker with the current scroll offset.
/// Idempotent, so it is safe at scroll-event frequency.
pub fn apply_scroll_state(nav: &Element, scroll_y: f64) {
    let classes = nav.class_list();
    if is_scrolled(scroll_y) {
        let _ = classes.add_1(SCROLLED_CLASS);
    } else {
        let _ = classes.remove_1(SCROLLED_CLASS);
    }
}

/// Flip the open/closed marker on the toggle control and the link panel.
pub(crate) fn toggle_menu(toggle: &Element, panel: Option<&Element>) {
    let _ = toggle.class_list().toggle(ACTIVE_CLASS);
    if let Some(panel) = panel {
        let _ = panel.class_list().toggle(ACTIVE_CLASS);
    }
}

/// Force the mobile menu closed. A no-op when it is already closed.
pub(crate) fn close_menu(toggle: Option<&Element>, panel: &Element) {
    if let Some(toggle) = toggle {
        let _ = toggle.class_list().remove_1(ACTIVE_CLASS);
    }
    let _ = panel.class_list().remove_1(ACTIVE_CLASS);
}

#[cfg(test)]
mod tests {
    use super::is_scrolled;

    #[test]
    fn threshold_is_exclusive_at_fifty() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
    }
}
