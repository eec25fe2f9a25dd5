//! Global Application State
//!
//! Reactive state management using Leptos signals. Each signal wraps one
//! piece of view state from the `admindash` library, so every interaction is
//! a single method call inside `update`.

use admindash::model::Dashboard;
use admindash::state::{
    handle_key, modal_event_for_key, BudgetModal, CalendarPanel, CalendarState, PeriodFilter,
};
use chrono::NaiveDate;
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Page content, fixed for the lifetime of the app
    pub dashboard: StoredValue<Dashboard>,
    /// Active sales overview period
    pub period: RwSignal<PeriodFilter>,
    /// Budgeting promo modal visibility
    pub budget_modal: RwSignal<BudgetModal>,
    /// Calendar side panel visibility
    pub calendar_panel: RwSignal<CalendarPanel>,
    /// Visible month and selected date
    pub calendar: RwSignal<CalendarState>,
}

impl DashboardState {
    pub fn new(dashboard: Dashboard, today: NaiveDate) -> Self {
        Self {
            dashboard: store_value(dashboard),
            period: create_rw_signal(PeriodFilter::default()),
            budget_modal: create_rw_signal(BudgetModal::default()),
            calendar_panel: create_rw_signal(CalendarPanel::default()),
            calendar: create_rw_signal(CalendarState::new(today)),
        }
    }

    /// Route a page-level key press. Escape closes the budgeting modal when
    /// it is open; every other key is ignored.
    pub fn handle_keydown(&self, key: &str) {
        if modal_event_for_key(key).is_some() && self.budget_modal.get_untracked().is_open() {
            self.budget_modal.update(|modal| handle_key(modal, key));
        }
    }
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    let dashboard = Dashboard::fixture();
    if let Err(e) = dashboard.validate() {
        web_sys::console::error_1(&format!("Dashboard content does not match layout: {}", e).into());
    }

    let today = chrono::Local::now().date_naive();
    provide_context(DashboardState::new(dashboard, today));
}

/// Fetch the state provided by [`provide_dashboard_state`]
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use admindash::state::ModalEvent;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    fn state() -> DashboardState {
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        DashboardState::new(Dashboard::fixture(), today)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_escape_closes_open_modal() {
        let runtime = create_runtime();
        let state = state();

        state.budget_modal.update(|m| m.apply(ModalEvent::Trigger));
        state.handle_keydown("Enter");
        assert!(state.budget_modal.get_untracked().is_open());

        state.handle_keydown("Escape");
        assert!(!state.budget_modal.get_untracked().is_open());

        runtime.dispose();
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_escape_leaves_calendar_panel_alone() {
        let runtime = create_runtime();
        let state = state();

        state.calendar_panel.update(|p| p.open());
        state.handle_keydown("Escape");
        assert!(state.calendar_panel.get_untracked().is_open());
        assert!(!state.budget_modal.get_untracked().is_open());

        runtime.dispose();
    }
}
