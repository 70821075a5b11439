//! Chart Components
//!
//! Line and bar charts rendered on HTML5 Canvas. Data arrives as parallel
//! label/value vectors, so the x axis is index-based rather than a time
//! scale.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const BG_COLOR: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400
const EMPTY_COLOR: &str = "#6b7280"; // gray-500

/// A single plotted series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    pub values: Vec<f64>,
    /// Shade the area under the line (line charts only).
    pub fill: bool,
}

impl Series {
    pub fn new(label: impl Into<String>, color: &'static str, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            color,
            values,
            fill: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }
}

/// Labels plus one or more series sharing the same x positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.values.is_empty())
    }
}

/// Line chart component, redrawn whenever the data signal changes.
#[component]
pub fn LineChart(#[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let data = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &data);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-48 md:h-64 rounded-lg"
            />
            <ChartLegend data=data />
        </div>
    }
}

/// Bar chart component, redrawn whenever the data signal changes.
#[component]
pub fn BarChart(#[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let data = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &data);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-48 md:h-64 rounded-lg"
            />
            <ChartLegend data=data />
        </div>
    }
}

/// Legend showing series colors
#[component]
fn ChartLegend(#[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {move || {
                data.get()
                    .series
                    .into_iter()
                    .map(|series| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", series.color)
                                />
                                <span class="text-sm text-gray-300">{series.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Y-axis bounds over all series, padded so lines do not hug the frame.
fn y_bounds(series: &[Series]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for s in series {
        for &v in &s.values {
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// X position for an index when `count` points span the chart area.
fn x_position(index: usize, count: usize, chart_width: f64) -> f64 {
    if count <= 1 {
        return MARGIN_LEFT + chart_width / 2.0;
    }
    MARGIN_LEFT + (index as f64 / (count - 1) as f64) * chart_width
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Clear the canvas, draw the grid and y-axis labels. Returns the plot
/// area dimensions, or None when there is nothing to draw.
fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    data: &ChartData,
) -> Option<(f64, f64, f64, f64)> {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.is_empty() {
        ctx.set_fill_style_str(EMPTY_COLOR);
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return None;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let (y_min, y_max) = y_bounds(&data.series);

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);

    // Horizontal grid lines with y labels
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // X labels, thinned so they stay readable on long ranges
    let count = data.labels.len();
    let step = (count / 10).max(1);
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("12px sans-serif");
    for (i, label) in data.labels.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let x = x_position(i, count, chart_width);
        let _ = ctx.fill_text(label, x - 15.0, height - 10.0);
    }

    Some((chart_width, chart_height, y_min, y_max))
}

fn draw_line_chart(canvas: &HtmlCanvasElement, data: &ChartData) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let Some((chart_width, chart_height, y_min, y_max)) = draw_frame(&ctx, canvas, data) else {
        return;
    };

    let count = data.labels.len();
    let y_for = |value: f64| MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height;

    for series in &data.series {
        if series.values.is_empty() {
            continue;
        }

        if series.fill {
            ctx.set_fill_style_str(series.color);
            ctx.set_global_alpha(0.15);
            ctx.begin_path();
            let baseline = MARGIN_TOP + chart_height;
            ctx.move_to(x_position(0, count, chart_width), baseline);
            for (i, &value) in series.values.iter().enumerate() {
                ctx.line_to(x_position(i, count, chart_width), y_for(value));
            }
            ctx.line_to(
                x_position(series.values.len() - 1, count, chart_width),
                baseline,
            );
            ctx.close_path();
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }

        ctx.set_stroke_style_str(series.color);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, &value) in series.values.iter().enumerate() {
            let x = x_position(i, count, chart_width);
            let y = y_for(value);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style_str(series.color);
        for (i, &value) in series.values.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(
                x_position(i, count, chart_width),
                y_for(value),
                3.0,
                0.0,
                std::f64::consts::PI * 2.0,
            );
            ctx.fill();
        }
    }
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, data: &ChartData) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let Some((chart_width, chart_height, y_min, y_max)) = draw_frame(&ctx, canvas, data) else {
        return;
    };

    let count = data.labels.len().max(1);
    let group_width = chart_width / count as f64;
    let series_count = data.series.len().max(1);
    let bar_width = (group_width * 0.7) / series_count as f64;

    for (s_idx, series) in data.series.iter().enumerate() {
        ctx.set_fill_style_str(series.color);

        for (i, &value) in series.values.iter().enumerate() {
            let group_left = MARGIN_LEFT + i as f64 * group_width + group_width * 0.15;
            let x = group_left + s_idx as f64 * bar_width;

            let top = MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height;
            let baseline = MARGIN_TOP
                + ((y_max - y_min.max(0.0)) / (y_max - y_min)) * chart_height;

            let (bar_top, bar_height) = if top <= baseline {
                (top, baseline - top)
            } else {
                (baseline, top - baseline)
            };

            ctx.fill_rect(x, bar_top, bar_width, bar_height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> Series {
        Series::new("test", "#0d9488", values)
    }

    #[test]
    fn y_bounds_pads_the_range() {
        let (min, max) = y_bounds(&[series(vec![10.0, 20.0])]);
        assert!(min < 10.0);
        assert!(max > 20.0);
    }

    #[test]
    fn y_bounds_handles_flat_series() {
        let (min, max) = y_bounds(&[series(vec![5.0, 5.0, 5.0])]);
        assert!(min < 5.0 && max > 5.0);
        assert!(max - min > 0.0);
    }

    #[test]
    fn y_bounds_spans_all_series() {
        let (min, max) = y_bounds(&[series(vec![1.0]), series(vec![100.0])]);
        assert!(min < 1.0);
        assert!(max > 100.0);
    }

    #[test]
    fn y_bounds_empty_defaults_to_unit_range() {
        assert_eq!(y_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn x_positions_cover_the_plot_area() {
        let width = 700.0;
        assert_eq!(x_position(0, 8, width), MARGIN_LEFT);
        assert_eq!(x_position(7, 8, width), MARGIN_LEFT + width);
    }

    #[test]
    fn single_point_is_centered() {
        assert_eq!(x_position(0, 1, 700.0), MARGIN_LEFT + 350.0);
    }

    #[test]
    fn chart_data_empty_checks() {
        assert!(ChartData::default().is_empty());
        let data = ChartData {
            labels: vec!["08-01".into()],
            series: vec![series(vec![3.0])],
        };
        assert!(!data.is_empty());
    }
}
