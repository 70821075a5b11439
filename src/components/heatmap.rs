//! Heatmap Component
//!
//! Day-of-week by hour-of-day arrival grid for the analytics page.

use leptos::*;

use crate::stats::{HeatmapGrid, DAY_NAMES};

/// Cell intensity saturates at this many arrivals.
const SATURATION: f64 = 10.0;

fn cell_color(value: u32) -> String {
    let opacity = (value as f64 / SATURATION).min(1.0);
    format!("background-color: rgba(13, 148, 136, {:.2})", opacity)
}

/// Weekly arrival heatmap, Monday first.
#[component]
pub fn Heatmap(#[prop(into)] grid: Signal<HeatmapGrid>) -> impl IntoView {
    view! {
        <div
            class="grid gap-px text-xs"
            style="grid-template-columns: 3rem repeat(24, minmax(0, 1fr))"
        >
            // Header row: hour labels
            <div></div>
            {(0..24).map(|hour| view! {
                <div class="text-center text-gray-400">{hour}</div>
            }).collect_view()}

            // One row per weekday
            {move || {
                let grid = grid.get();
                DAY_NAMES
                    .iter()
                    .enumerate()
                    .map(|(day, name)| {
                        let row = grid[day];
                        view! {
                            <div class="text-gray-400 pr-1 text-right">{*name}</div>
                            {(0..24).map(|hour| {
                                let value = row[hour];
                                view! {
                                    <div
                                        class="h-6 rounded-sm"
                                        style=cell_color(value)
                                        title=format!("{} {}:00 — {}", name, hour, value)
                                    ></div>
                                }
                            }).collect_view()}
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_transparent() {
        assert_eq!(cell_color(0), "background-color: rgba(13, 148, 136, 0.00)");
    }

    #[test]
    fn intensity_saturates() {
        assert_eq!(cell_color(10), cell_color(50));
        assert!(cell_color(25).ends_with("1.00)"));
    }

    #[test]
    fn intensity_scales_linearly_below_cap() {
        assert_eq!(cell_color(5), "background-color: rgba(13, 148, 136, 0.50)");
    }
}
