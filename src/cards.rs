//! Staggered transition delays for the solution and application card
//! grids, producing the cascading entrance effect.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::{APPLICATION_CARD_SELECTOR, SOLUTION_CARD_SELECTOR};
use crate::dom;

/// Delay in seconds for the card at `index`, front to back.
pub(crate) fn stagger_delay_secs(index: usize) -> f64 {
    index as f64 / 10.0
}

fn apply_to(document: &Document, selector: &str) -> Result<(), JsValue> {
    for (index, card) in dom::select_all(document, selector)?.into_iter().enumerate() {
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            card.style()
                .set_property("transition-delay", &format!("{}s", stagger_delay_secs(index)))?;
        }
    }
    Ok(())
}

/// Assign cascading delays to both card collections, each starting from
/// zero. One-time; never recomputed.
pub(crate) fn assign_delays(document: &Document) -> Result<(), JsValue> {
    apply_to(document, SOLUTION_CARD_SELECTOR)?;
    apply_to(document, APPLICATION_CARD_SELECTOR)
}

#[cfg(test)]
mod tests {
    use super::stagger_delay_secs;

    #[test]
    fn delays_step_by_a_tenth_of_a_second() {
        let rendered: Vec<String> = (0..4)
            .map(|i| format!("{}s", stagger_delay_secs(i)))
            .collect();
        assert_eq!(rendered, ["0s", "0.1s", "0.2s", "0.3s"]);
    }
}
