//! View State
//!
//! Plain-Rust state behind every interactive element of the dashboard. The
//! frontend wraps these in reactive signals; each click maps to one method.

pub mod calendar;
pub mod carousel;
pub mod filter;
pub mod overlay;

pub use calendar::{CalendarDay, CalendarState, WEEKDAY_HEADERS};
pub use carousel::CarouselState;
pub use filter::{Period, PeriodFilter};
pub use overlay::{BudgetModal, CalendarPanel, ModalEvent, Overlay};

/// Map a keyboard key to a modal event, if it has one
pub fn modal_event_for_key(key: &str) -> Option<ModalEvent> {
    match key {
        "Escape" => Some(ModalEvent::Escape),
        _ => None,
    }
}

/// Apply a document-level key press. Only Escape is bound, and it closes
/// the budgeting modal.
pub fn handle_key(modal: &mut BudgetModal, key: &str) {
    if let Some(event) = modal_event_for_key(key) {
        modal.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_modal() {
        let mut modal = BudgetModal::default();
        modal.apply(ModalEvent::Trigger);

        handle_key(&mut modal, "Enter");
        assert!(modal.is_open());

        handle_key(&mut modal, "Escape");
        assert!(!modal.is_open());
    }
}
