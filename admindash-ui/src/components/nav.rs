//! Navigation Component
//!
//! Section links and the search field. The link matching the current path
//! is highlighted; `/` counts as the dashboard.

use admindash::model::NavSection;
use leptos::*;
use leptos_router::*;

use crate::components::active_class;
use crate::components::icons::{section_glyph, Glyph, Icon};
use crate::state::use_dashboard_state;

/// Navigation bar component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_dashboard_state();
    let placeholder = state.dashboard.with_value(|d| d.search_placeholder);

    view! {
        <nav class="h-[67px] border-b border-gray-100 text-gray-700 overflow-x-auto">
            <div class="max-w-7xl mx-auto flex justify-between items-center h-full px-4">
                <ul class="flex gap-[21px] text-sm">
                    {NavSection::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section /> })
                        .collect_view()}
                </ul>

                <fieldset class="flex items-center pl-4 pr-3 border border-gray-200 bg-gray-50 rounded-xl gap-2 w-[319px] h-[43px]">
                    <Icon glyph=Glyph::Search />
                    <input
                        type="search"
                        placeholder=placeholder
                        class="outline-none text-xs font-light bg-transparent placeholder:text-gray-400 w-full"
                    />
                </fieldset>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(section: NavSection) -> impl IntoView {
    let location = use_location();
    let is_active = create_memo(move |_| section.is_active(&location.pathname.get()));

    view! {
        <li>
            <a
                href=section.href()
                class=move || {
                    active_class(
                        "flex gap-2 items-center justify-center h-[38px] w-[170px] hover:bg-gray-100 rounded-lg",
                        "bg-gray-100 font-semibold",
                        is_active.get(),
                    )
                }
            >
                <Icon glyph=section_glyph(section) />
                {section.label()}
            </a>
        </li>
    }
}
