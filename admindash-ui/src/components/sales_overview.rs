//! Sales Overview Component
//!
//! Period filter, bar chart and revenue tiles.

use admindash::state::Period;
use leptos::*;

use crate::components::active_class;
use crate::components::chart::SalesChart;
use crate::components::icons::{Glyph, Icon};
use crate::components::stat_tile::StatTile;
use crate::state::use_dashboard_state;

#[component]
pub fn SalesOverview() -> impl IntoView {
    let state = use_dashboard_state();
    let (caption, transactions_href, stats) = state.dashboard.with_value(|d| {
        (d.sales_caption, d.transactions_href, d.stats.clone())
    });

    view! {
        <section class="pt-4 pb-[18px] border border-gray-200 rounded-2xl flex-[2.15]">
            <div class="px-[22px]">
                <div class="flex items-center justify-between">
                    <div class="space-y-3">
                        <h3 class="font-semibold text-xl">"Sales Overview"</h3>
                        <p class="text-xs text-gray-500">{caption}</p>
                    </div>
                    <a
                        href=transactions_href
                        class="h-[46px] px-[37px] rounded-full border border-gray-300 flex items-center font-medium text-xs text-nowrap"
                    >
                        "View Transactions"
                    </a>
                </div>
                <div class="mt-[15px] ml-auto w-fit text-gray-700 text-sm flex gap-3">
                    {Period::ALL
                        .into_iter()
                        .map(|period| view! { <FilterButton period=period /> })
                        .collect_view()}
                </div>
            </div>

            <div class="border-t border-gray-200 mt-3 pt-4 flex flex-col lg:flex-row px-[22px] gap-9">
                <div class="flex-1 relative">
                    <ChartPager disabled=true side="left" />
                    <SalesChart />
                    <ChartPager disabled=false side="right" />
                </div>
                <ul class="flex-1 grid grid-cols-2 gap-y-3.5 gap-x-4">
                    {stats
                        .into_iter()
                        .map(|stat| view! { <StatTile stat=stat /> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

const FILTER_BUTTON_CLASS: &str = "w-20 py-2 rounded-lg capitalize hover:bg-gray-100";

/// Sales period toggle button
#[component]
fn FilterButton(period: Period) -> impl IntoView {
    let state = use_dashboard_state();
    let is_active = create_memo(move |_| state.period.get().is_active(period));

    view! {
        <button
            on:click=move |_| state.period.update(|filter| filter.select(period))
            class=move || {
                active_class(
                    FILTER_BUTTON_CLASS,
                    "bg-gray-100 font-semibold",
                    is_active.get(),
                )
            }
        >
            {period.button_label()}
        </button>
    }
}

/// Round arrow beside the chart. The chart shows a single window, so the
/// left arrow is always disabled.
#[component]
fn ChartPager(disabled: bool, side: &'static str) -> impl IntoView {
    let (position, rotate) = if side == "left" {
        ("-left-5", "rotate-180")
    } else {
        ("-right-6", "")
    };

    view! {
        <button
            disabled=disabled
            aria-label=format!("Scroll chart {}", side)
            class=format!(
                "bg-gray-200 size-[18px] flex items-center justify-center absolute rounded-full {} top-1/2 -translate-y-1/2 disabled:opacity-[.38] disabled:pointer-events-none z-[1]",
                position
            )
        >
            <Icon glyph=Glyph::RightArrow class=format!("size-3 {}", rotate) />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_button_capitalizes_label() {
        assert_eq!(Period::Year.button_label(), "1 year");
        let class = active_class(FILTER_BUTTON_CLASS, "bg-gray-100 font-semibold", true);
        assert!(class.split_whitespace().any(|c| c == "capitalize"));
    }
}
