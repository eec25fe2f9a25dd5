//! Budgeting Modal Component
//!
//! Promo dialog for the budgeting feature. Clicking the backdrop or pressing
//! Escape closes it; clicks inside the dialog do not.

use admindash::assets::MODAL_OVERLAY;
use admindash::state::ModalEvent;
use leptos::*;

use crate::components::icons::{feature_glyph, Glyph, Icon};
use crate::state::use_dashboard_state;

#[component]
pub fn BudgetingModal() -> impl IntoView {
    let state = use_dashboard_state();
    let features = state.dashboard.with_value(|d| d.budget_features.clone());

    let on_backdrop = move |_: ev::MouseEvent| state.budget_modal.update(|m| m.apply(ModalEvent::BackdropClick));
    let on_content = move |event: ev::MouseEvent| {
        event.stop_propagation();
        state.budget_modal.update(|m| m.apply(ModalEvent::ContentClick));
    };

    view! {
        <div
            hidden=move || !state.budget_modal.get().is_open()
            on:click=on_backdrop
            class="fixed z-[2] size-full left-0 top-0 bg-[#00000080]"
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-label="Budgeting"
                on:click=on_content
                class="absolute left-1/2 -translate-x-1/2 top-1/2 -translate-y-1/2 bg-white text-black max-w-[438px] h-[80vh] max-h-[559px] w-full rounded-[10px] overflow-hidden"
            >
                <div class="h-[213px] bg-[#0C2841] border-b border-gray-200 relative">
                    <img
                        src=format!("/{}", MODAL_OVERLAY)
                        alt="modal overlay"
                        class="absolute bottom-0 left-1/2 -translate-x-1/2 rounded-[10px]"
                    />
                    <div class="z-[1] absolute left-1/2 -translate-x-1/2 top-1/2 -translate-y-1/2 text-white">
                        <Icon glyph=Glyph::Calculator class="size-16" />
                    </div>
                </div>

                <ul class="max-w-[344px] mx-auto py-4 space-y-[23px]">
                    {features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <li class="gap-3 flex items-center">
                                    <div>
                                        <Icon glyph=feature_glyph(feature.icon) class="size-6" />
                                    </div>
                                    <div class="space-y-1">
                                        <h3 class="font-semibold text-black">{feature.heading}</h3>
                                        <p class="text-xs text-gray-500">{feature.body}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button class="mb-4 max-w-[344px] font-medium h-[46px] bg-gray-900 text-white rounded-full w-full block mx-auto">
                    "Create budget"
                </button>
            </div>
        </div>
    }
}
