//! Status Pill Component
//!
//! Colored badge for a ticket's lifecycle status.

use leptos::*;

use crate::model::TicketStatus;
use crate::state::global::GlobalState;

/// Status badge with per-status coloring
#[component]
pub fn StatusPill(status: TicketStatus) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let color = match status {
        TicketStatus::Waiting => "bg-yellow-100 text-yellow-700",
        TicketStatus::Called => "bg-blue-100 text-blue-700",
        TicketStatus::Served => "bg-green-100 text-green-700",
        TicketStatus::Left => "bg-red-100 text-red-700",
    };

    view! {
        <span class=format!("px-3 py-1 text-xs font-semibold rounded-full {color}")>
            {move || state.t(status.label_key())}
        </span>
    }
}

/// Open/closed badge for a queue
#[component]
pub fn OpenPill(is_open: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (color, key) = if is_open {
        ("bg-green-100 text-green-700", "status_open")
    } else {
        ("bg-red-100 text-red-700", "status_closed")
    };

    view! {
        <span class=format!("px-3 py-1 text-sm font-semibold rounded-full {color}")>
            {move || state.t(key)}
        </span>
    }
}
