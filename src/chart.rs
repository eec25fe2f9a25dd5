//! Bar Chart Layout
//!
//! Computes grouped-bar geometry for the sales overview chart. The frontend
//! paints the result on a canvas; keeping the math here makes it testable
//! off the browser.
//!
//! Sizing follows the usual category/bar percentage model: every label owns
//! an equal category band, the bar group fills `category_percentage` of the
//! band, each series gets an equal slot in the group, and the bar fills
//! `bar_percentage` of its slot.

use crate::model::ChartData;

/// Space reserved around the plot area for tick labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 32.0,
            right: 8.0,
            top: 8.0,
            bottom: 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub category: usize,
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Y axis tick
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    pub y: f64,
}

/// X axis label, horizontally centred on its category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLayout {
    pub axis_max: f64,
    pub bars: Vec<BarRect>,
    pub ticks: Vec<Tick>,
    pub labels: Vec<CategoryLabel>,
}

/// Roughly how many intervals the y axis is split into
const TARGET_INTERVALS: f64 = 5.0;

impl ChartLayout {
    pub fn compute(chart: &ChartData, width: f64, height: f64) -> Self {
        Self::compute_with(chart, width, height, Margins::default())
    }

    pub fn compute_with(chart: &ChartData, width: f64, height: f64, margins: Margins) -> Self {
        let plot_width = width - margins.left - margins.right;
        let plot_height = height - margins.top - margins.bottom;

        if plot_width <= 0.0 || plot_height <= 0.0 || chart.labels.is_empty() {
            return Self::default();
        }

        let top = chart.suggested_max.max(chart.max_value());
        let top = if top > 0.0 { top } else { 1.0 };
        let step = nice_step(top / TARGET_INTERVALS);
        let axis_max = (top / step).ceil() * step;

        let value_y = |value: f64| margins.top + plot_height * (1.0 - value / axis_max);

        let intervals = (axis_max / step).round() as usize;
        let scale = 10f64.powi(step_decimals(step));
        let ticks = (0..=intervals)
            .map(|i| {
                let value = (i as f64 * step * scale).round() / scale;
                Tick {
                    value,
                    label: format!("{}{}", value, chart.tick_suffix),
                    y: value_y(value),
                }
            })
            .collect();

        let category_width = plot_width / chart.labels.len() as f64;
        let group_width = category_width * chart.category_percentage;
        let series_count = chart.series.len().max(1) as f64;
        let slot_width = group_width / series_count;
        let bar_width = slot_width * chart.bar_percentage;

        let mut bars = Vec::with_capacity(chart.labels.len() * chart.series.len());
        for category in 0..chart.labels.len() {
            let group_x = margins.left
                + category as f64 * category_width
                + (category_width - group_width) / 2.0;

            for (series, data) in chart.series.iter().enumerate() {
                let Some(&value) = data.values.get(category) else {
                    continue;
                };
                let bar_height = plot_height * value.max(0.0) / axis_max;
                bars.push(BarRect {
                    category,
                    series,
                    x: group_x + series as f64 * slot_width + (slot_width - bar_width) / 2.0,
                    y: margins.top + plot_height - bar_height,
                    width: bar_width,
                    height: bar_height,
                    color: data.color,
                });
            }
        }

        let labels = chart
            .labels
            .iter()
            .enumerate()
            .map(|(i, &text)| CategoryLabel {
                text,
                x: margins.left + (i as f64 + 0.5) * category_width,
                y: height - margins.bottom / 4.0,
            })
            .collect();

        Self {
            axis_max,
            bars,
            ticks,
            labels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Smallest of 1, 2, 2.5, 5, 10 (times a power of ten) not below `raw`
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Decimal places needed to print multiples of `step` exactly
fn step_decimals(step: f64) -> i32 {
    (0..6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BarSeries, Dashboard};

    fn small_chart() -> ChartData {
        ChartData {
            labels: vec!["Jan", "Feb"],
            series: vec![
                BarSeries { label: "a", color: "#111111", values: vec![10.0, 5.0] },
                BarSeries { label: "b", color: "#222222", values: vec![0.0, 10.0] },
            ],
            bar_percentage: 0.5,
            category_percentage: 0.5,
            suggested_max: 10.0,
            tick_suffix: "m",
        }
    }

    #[test]
    fn test_bar_geometry() {
        // 100x100 plot area inside the default margins
        let layout = ChartLayout::compute(&small_chart(), 140.0, 132.0);

        assert_eq!(layout.axis_max, 10.0);
        assert_eq!(layout.bars.len(), 4);

        let first = &layout.bars[0];
        assert_eq!((first.category, first.series), (0, 0));
        assert_eq!(first.x, 47.625);
        assert_eq!(first.width, 6.25);
        assert_eq!(first.height, 100.0);
        assert_eq!(first.y, 8.0);
        assert_eq!(first.color, "#111111");

        let zero = &layout.bars[1];
        assert_eq!(zero.x, 60.125);
        assert_eq!(zero.height, 0.0);
        assert_eq!(zero.y, 108.0);
    }

    #[test]
    fn test_ticks_use_suffix() {
        let layout = ChartLayout::compute(&small_chart(), 140.0, 132.0);
        let labels: Vec<_> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0m", "2m", "4m", "6m", "8m", "10m"]);
        assert_eq!(layout.ticks[0].y, 108.0);
        assert_eq!(layout.ticks[5].y, 8.0);
    }

    #[test]
    fn test_fractional_tick_labels() {
        let mut chart = small_chart();
        chart.series[0].values = vec![0.1, 0.2];
        chart.series[1].values = vec![0.0, 0.1];
        chart.suggested_max = 0.4;

        let layout = ChartLayout::compute(&chart, 140.0, 132.0);
        let labels: Vec<_> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0m", "0.1m", "0.2m", "0.3m", "0.4m"]);
        assert_eq!(layout.ticks[3].value, 0.3);

        chart.suggested_max = 12.5;
        let layout = ChartLayout::compute(&chart, 140.0, 132.0);
        let labels: Vec<_> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0m", "2.5m", "5m", "7.5m", "10m", "12.5m"]);
    }

    #[test]
    fn test_step_decimals() {
        assert_eq!(step_decimals(10.0), 0);
        assert_eq!(step_decimals(2.5), 1);
        assert_eq!(step_decimals(0.1), 1);
        assert_eq!(step_decimals(0.25), 2);
    }

    #[test]
    fn test_fixture_axis() {
        let chart = Dashboard::fixture().chart;
        let layout = ChartLayout::compute(&chart, 400.0, 220.0);

        assert_eq!(layout.axis_max, 50.0);
        assert_eq!(layout.ticks.len(), 6);
        assert_eq!(layout.ticks[5].label, "50m");
        assert_eq!(layout.bars.len(), 27);
        assert_eq!(layout.labels.len(), 9);
        assert_eq!(layout.labels[0].text, "Jan");
    }

    #[test]
    fn test_data_above_suggested_max_extends_axis() {
        let mut chart = Dashboard::fixture().chart;
        chart.series[0].values[0] = 53.0;

        let layout = ChartLayout::compute(&chart, 400.0, 220.0);
        assert_eq!(layout.axis_max, 60.0);
        assert!(layout.bars.iter().all(|b| b.y >= 8.0));
    }

    #[test]
    fn test_degenerate_sizes_are_empty() {
        let chart = small_chart();
        assert!(ChartLayout::compute(&chart, 10.0, 132.0).is_empty());
        assert!(ChartLayout::compute(&chart, 140.0, 0.0).is_empty());

        let mut no_labels = chart;
        no_labels.labels.clear();
        assert!(ChartLayout::compute(&no_labels, 140.0, 132.0).is_empty());
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(10.0), 10.0);
        assert_eq!(nice_step(10.6), 20.0);
        assert_eq!(nice_step(2.0), 2.0);
        assert_eq!(nice_step(0.3), 0.5);
    }
}
