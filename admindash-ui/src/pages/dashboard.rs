//! Dashboard Page
//!
//! Greeting, sales overview, section summaries and featured listings.

use leptos::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::{Carousel, SalesOverview, SummaryCard};
use crate::state::use_dashboard_state;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_dashboard_state();
    let (first_name, cards, carousels) = state.dashboard.with_value(|d| {
        (
            d.profile.first_name().to_string(),
            d.cards.clone(),
            d.carousels.clone(),
        )
    });

    view! {
        <div class="text-black">
            <h2 class="font-semibold text-xl pt-3 pb-4">"Welcome, " {first_name}</h2>

            <div class="flex flex-col md:flex-row gap-5">
                <SalesOverview />

                <section class="flex-1 flex flex-col gap-5">
                    {cards
                        .into_iter()
                        .map(|card| view! { <SummaryCard card=card /> })
                        .collect_view()}
                </section>
            </div>
        </div>

        <section class="mt-5 flex *:flex-1 flex-col sm:flex-row gap-[15px]">
            {carousels
                .into_iter()
                .map(|spec| view! { <Carousel spec=spec /> })
                .collect_view()}
        </section>

        <button
            aria-label="Open messages"
            class="bg-[#242526] text-white size-[57.6px] flex items-center justify-center rounded-full fixed border border-[#FFFFFF33] right-[70.2px] bottom-[212.2px]"
        >
            <Icon glyph=Glyph::Message class="size-6" />
        </button>
    }
}
