//! Countdown Ring Component
//!
//! Circular progress indicator for the local ETA countdown on the status
//! page. Driven by the [`Countdown`](crate::state::poller::Countdown) ticker,
//! not by the server.

use leptos::*;

use crate::state::poller::format_countdown;

const RADIUS: f64 = 45.0;

/// SVG ring that empties as the remaining time runs down.
#[component]
pub fn CountdownRing(
    remaining: RwSignal<i64>,
    total: RwSignal<i64>,
) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;

    let dash_offset = move || {
        let total = total.get().max(1) as f64;
        let remaining = remaining.get().max(0) as f64;
        circumference * (1.0 - remaining / total)
    };

    view! {
        <div class="relative w-32 h-32 mx-auto">
            <svg viewBox="0 0 100 100" class="w-full h-full -rotate-90">
                <circle
                    cx="50"
                    cy="50"
                    r=RADIUS
                    fill="none"
                    stroke="#374151"
                    stroke-width="6"
                />
                <circle
                    cx="50"
                    cy="50"
                    r=RADIUS
                    fill="none"
                    stroke="#0d9488"
                    stroke-width="6"
                    stroke-linecap="round"
                    stroke-dasharray=circumference
                    stroke-dashoffset=dash_offset
                />
            </svg>
            <div class="absolute inset-0 flex items-center justify-center">
                <span class="text-xl font-bold">
                    {move || format_countdown(remaining.get())}
                </span>
            </div>
        </div>
    }
}
