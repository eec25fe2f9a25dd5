//! Calendar Panel Component
//!
//! Side panel with a month grid. Both the back arrow and the close button
//! dismiss it.

use admindash::state::{CalendarDay, WEEKDAY_HEADERS};
use chrono::Datelike;
use leptos::*;

use crate::components::icons::{Glyph, Icon};
use crate::state::use_dashboard_state;

const CELL_BORDER: &str = "border-y-[0.47px] border-r-[0.47px] first:border-l-[0.47px] border-[#242424]";

#[component]
pub fn CalendarSidePanel() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div
            hidden=move || !state.calendar_panel.get().is_open()
            class="fixed top-[81px] w-[400px] text-white bg-[#0D0D0D] right-0 h-full z-[3]"
        >
            <div class="gap-2 flex items-center pl-[22.75px] pr-6 bg-[#0C2841] h-[50px] mb-[17px]">
                <button aria-label="Back" on:click=move |_| state.calendar_panel.update(|p| p.back())>
                    <Icon glyph=Glyph::ArrowLeft />
                </button>
                <h2>"Calendar"</h2>
                <button
                    class="ml-auto"
                    aria-label="Close calendar"
                    on:click=move |_| state.calendar_panel.update(|p| p.close())
                >
                    <Icon glyph=Glyph::Close />
                </button>
            </div>
            <MonthView />
        </div>
    }
}

#[component]
fn MonthView() -> impl IntoView {
    let state = use_dashboard_state();
    let calendar = state.calendar;

    view! {
        <div class="text-[#969696] px-5 mx-auto w-full">
            <div class="flex items-center justify-between mb-4">
                <button aria-label="Previous month" class="ml-12" on:click=move |_| calendar.update(|c| c.prev_month())>
                    <Icon glyph=Glyph::RightArrow class="rotate-180 size-6" />
                </button>
                <span class="text-white font-semibold">{move || calendar.get().caption()}</span>
                <button aria-label="Next month" class="mr-12" on:click=move |_| calendar.update(|c| c.next_month())>
                    <Icon glyph=Glyph::RightArrow class="size-6" />
                </button>
            </div>

            <div class="grid grid-cols-7 text-[7.58px]">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|name| view! { <div class=format!("py-1 text-center {}", CELL_BORDER)>{*name}</div> })
                    .collect_view()}
            </div>

            {move || {
                calendar
                    .get()
                    .weeks()
                    .into_iter()
                    .map(|week| {
                        view! {
                            <div class="grid grid-cols-7">
                                {week.into_iter().map(|day| view! { <DayCell day=day /> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn DayCell(day: CalendarDay) -> impl IntoView {
    let state = use_dashboard_state();
    let date = day.date;

    let tone = if day.is_selected {
        "bg-white text-black"
    } else if day.is_today {
        "text-white font-semibold"
    } else if !day.in_month {
        "opacity-40"
    } else {
        ""
    };

    view! {
        <button
            on:click=move |_| state.calendar.update(|c| c.select(date))
            aria-pressed=day.is_selected.to_string()
            class=format!("h-[91.2px] flex justify-start items-start p-1.5 text-xs {} {}", CELL_BORDER, tone)
        >
            {date.day()}
        </button>
    }
}
