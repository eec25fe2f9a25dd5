//! Summary Card Component
//!
//! Overview counts for one section with a "View all" link.

use admindash::format::format_compact;
use admindash::model::OverviewCard;
use leptos::*;

use crate::components::icons::{section_glyph, Glyph, Icon};

#[component]
pub fn SummaryCard(card: OverviewCard) -> impl IntoView {
    view! {
        <div class="border border-gray-200 rounded-2xl overflow-hidden">
            <div class="bg-gray-50 border-b border-gray-200 h-[50px] flex items-center justify-between font-medium px-4">
                <h3 class="flex gap-2.5 text-gray-800 items-center text-sm">
                    <Icon glyph=section_glyph(card.section) class="text-[#4545FE]" />
                    {card.title()}
                </h3>
                <a href=card.href() class="text-[#4545FE] flex items-center gap-0.5 text-xs">
                    "View all"
                    <Icon glyph=Glyph::AngleRight class="size-4" />
                </a>
            </div>
            <ul class="mt-5 px-4 pb-4 flex justify-between">
                {card
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class="space-y-2">
                                <h4 class="font-medium text-sm leading-5 text-gray-600 capitalize">
                                    {row.label}
                                </h4>
                                <p class="font-semibold text-2xl leading-[38px] lowercase">
                                    {format_compact(row.count)}
                                </p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
