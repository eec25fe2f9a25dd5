//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod budget_modal;
pub mod calendar_panel;
pub mod carousel;
pub mod chart;
pub mod header;
pub mod icons;
pub mod nav;
pub mod sales_overview;
pub mod stat_tile;
pub mod summary_card;

pub use carousel::Carousel;
pub use header::Header;
pub use nav::Nav;
pub use sales_overview::SalesOverview;
pub use summary_card::SummaryCard;

/// Join `base` with `active` classes when the element is selected
pub fn active_class(base: &str, active: &str, is_active: bool) -> String {
    if is_active {
        format!("{} {}", base, active)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_class() {
        assert_eq!(active_class("px-4", "font-semibold", true), "px-4 font-semibold");
        assert_eq!(active_class("px-4", "font-semibold", false), "px-4");
    }
}
