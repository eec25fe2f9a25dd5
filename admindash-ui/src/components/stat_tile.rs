//! Stat Tile Component
//!
//! Displays a revenue figure with its change rate.

use admindash::format::{format_naira, format_rate, Trend};
use admindash::model::SalesStat;
use leptos::*;

use crate::components::icons::{Glyph, Icon};

/// Revenue tile in the sales overview grid
#[component]
pub fn StatTile(stat: SalesStat) -> impl IntoView {
    let trend = Trend::from_rate(stat.rate);

    view! {
        <li class="px-[15px] rounded-xl border border-gray-200 space-y-2 h-[73px] flex flex-col justify-center">
            <p style=format!("color: {}", stat.color) class="font-semibold text-[19px]">
                {format_naira(stat.amount)}
            </p>
            <div class="flex gap-3 items-center text-[10px]">
                <p class="text-gray-700 font-medium">{stat.label}</p>
                <p style=format!("color: {}", trend.color()) class="flex items-center gap-2">
                    <Icon glyph=Glyph::ArrowUp class=format!("size-3 {}", trend.arrow_class()) />
                    {format_rate(stat.rate)}
                </p>
            </div>
        </li>
    }
}
