//! Selectors, class markers and tuning knobs shared by the whole crate.
//! These are the contract with the page markup; nothing else is.

/// Nav container, looked up by id. Required.
pub const NAV_ID: &str = "nav";
/// Mobile menu toggle, looked up by id. Optional.
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
/// Mobile menu link panel. Optional.
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
/// Elements eligible for the one-way reveal animation.
pub const REVEAL_SELECTOR: &str = ".reveal";
/// The two card grids that get cascading transition delays.
pub const SOLUTION_CARD_SELECTOR: &str = ".solution-card";
pub const APPLICATION_CARD_SELECTOR: &str = ".application-card";
/// Every same-document anchor link.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Marker the stylesheet keys sticky-nav styling on.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Marker for the open mobile menu, on both toggle and panel.
pub const ACTIVE_CLASS: &str = "active";
/// Marker a revealed element keeps for the rest of the page's life.
pub const VISIBLE_CLASS: &str = "visible";

/// Scroll offset past which the nav switches to its scrolled style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Fraction of a reveal element that must be visible to trigger it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Knobs for [`crate::PageController::attach`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerOptions {
    /// Stop observing a reveal element once it has been shown. The
    /// reveal is one-way either way; this only controls whether the
    /// observer keeps watching elements that are already visible.
    pub unobserve_after_reveal: bool,
}
