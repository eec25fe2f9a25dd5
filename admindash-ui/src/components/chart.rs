//! Chart Component
//!
//! Grouped bar chart painted on an HTML5 Canvas from a precomputed
//! [`ChartLayout`].

use admindash::chart::ChartLayout;
use admindash::model::ChartData;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::use_dashboard_state;

const CANVAS_WIDTH: u32 = 460;
const CANVAS_HEIGHT: u32 = 230;

const TICK_COLOR: &str = "#919191";

/// Sales bar chart component
#[component]
pub fn SalesChart() -> impl IntoView {
    let state = use_dashboard_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Paint once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            state.dashboard.with_value(|d| draw_chart(&canvas, &d.chart));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=CANVAS_WIDTH
            height=CANVAS_HEIGHT
            class="w-full h-[230px]"
            role="img"
            aria-label="Monthly sales bar chart"
        />
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let layout = ChartLayout::compute(chart, width, height);

    ctx.clear_rect(0.0, 0.0, width, height);

    if layout.is_empty() {
        web_sys::console::warn_1(&"Sales chart has nothing to draw".into());
        return;
    }

    // Y-axis labels, no grid lines
    ctx.set_fill_style(&TICK_COLOR.into());
    ctx.set_font("10px sans-serif");
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in &layout.ticks {
        let _ = ctx.fill_text(&tick.label, 26.0, tick.y);
    }

    for bar in &layout.bars {
        ctx.set_fill_style(&bar.color.into());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }

    // X-axis labels
    ctx.set_fill_style(&TICK_COLOR.into());
    ctx.set_font("500 10px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    for label in &layout.labels {
        let _ = ctx.fill_text(label.text, label.x, label.y);
    }
}
