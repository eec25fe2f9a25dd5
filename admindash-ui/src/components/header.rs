//! Header Component
//!
//! Top bar with the logo, quick actions and the overlays they open.

use admindash::state::ModalEvent;
use leptos::*;

use crate::components::budget_modal::BudgetingModal;
use crate::components::calendar_panel::CalendarSidePanel;
use crate::components::icons::{Glyph, Icon};
use crate::state::use_dashboard_state;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_dashboard_state();

    let initial = state.dashboard.with_value(|d| {
        d.profile
            .avatar_initial()
            .map(String::from)
            .unwrap_or_default()
    });

    view! {
        <header class="bg-[#0C2841] h-[82px] border-b border-gray-100 text-white">
            <div class="max-w-7xl mx-auto flex items-center h-full gap-6 px-4">
                <a href="/" aria-label="Home">
                    <Icon glyph=Glyph::Logo class="size-8" />
                </a>

                <button class="ml-auto" aria-label="Notifications">
                    <Icon glyph=Glyph::Bell />
                </button>

                <div>
                    <HeaderAction
                        label="Budgeting"
                        glyph=Glyph::Calculator
                        on_click=move |_| state.budget_modal.update(|m| m.apply(ModalEvent::Trigger))
                    />
                    <BudgetingModal />
                </div>

                <div>
                    <HeaderAction
                        label="Calendar"
                        glyph=Glyph::Calendar
                        on_click=move |_| state.calendar_panel.update(|p| p.open())
                    />
                    <CalendarSidePanel />
                </div>

                <button aria-label="Messages">
                    <Icon glyph=Glyph::Message />
                </button>

                <button class="size-10 bg-white text-black rounded-full font-medium text-[23px]">
                    {initial}
                </button>
            </div>
        </header>
    }
}

/// Icon button with a hover tooltip
#[component]
fn HeaderAction<F>(label: &'static str, glyph: Glyph, on_click: F) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    view! {
        <button on:click=on_click class="relative group block" aria-label=label>
            <Icon glyph=glyph />
            <p
                role="tooltip"
                class="text-gray-100 text-xs absolute -bottom-12 bg-black p-3 rounded-lg -translate-x-1/2 left-1/2 shadow-2xl hidden group-hover:block"
            >
                {label}
            </p>
        </button>
    }
}
