//! Manage Page
//!
//! Live staff table for one queue: call and serve customers, call the next
//! waiting ticket, and tweak the queue's open state and custom message.
//! Refreshes on a fixed cadence while the page is mounted.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;
use std::collections::HashSet;

use crate::api;
use crate::components::StatusPill;
use crate::model::{self, Ticket, TicketStatus};
use crate::session;
use crate::state::global::GlobalState;

/// Table refresh cadence.
const REFRESH_MS: u32 = 5_000;

/// Queue management page component
#[component]
pub fn Manage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let Some(queue_id) = session::active_queue_id() else {
        return view! { <Redirect path="/dashboard" /> }.into_view();
    };

    let tickets = create_rw_signal(Vec::<Ticket>::new());
    let queue = create_rw_signal(None::<model::Queue>);
    // Rows with a status change already on the wire; blocks double-clicks.
    let in_flight = create_rw_signal(HashSet::<i64>::new());
    let (show_controls, set_show_controls) = create_signal(false);

    let refresh_navigate = navigate.clone();
    let refresh = move || {
        let navigate = refresh_navigate.clone();
        spawn_local(async move {
            match api::fetch_tickets(queue_id).await {
                Ok(mut list) => {
                    list.sort_by_key(|t| (t.status, t.id));
                    tickets.set(list);
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        navigate("/login", Default::default());
                        return;
                    }
                    web_sys::console::warn_1(&format!("ticket refresh failed: {e}").into());
                }
            }
        });
    };

    // Initial load: queue metadata plus the first ticket fetch.
    {
        let refresh = refresh.clone();
        let navigate = navigate.clone();
        create_effect(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::fetch_queues().await {
                    Ok(list) => queue.set(list.into_iter().find(|q| q.id == queue_id)),
                    Err(e) => {
                        if e.is_unauthorized() {
                            navigate("/login", Default::default());
                        }
                    }
                }
            });
            refresh();
        });
    }

    // Fixed-cadence refresh, cancelled when the page unmounts.
    {
        let refresh = refresh.clone();
        let interval = Interval::new(REFRESH_MS, move || refresh());
        on_cleanup(move || drop(interval));
    }

    let set_status = {
        let refresh = refresh.clone();
        move |ticket_id: i64, status: TicketStatus| {
            if in_flight.get_untracked().contains(&ticket_id) {
                return;
            }
            in_flight.update(|set| {
                set.insert(ticket_id);
            });

            let refresh = refresh.clone();
            spawn_local(async move {
                match api::update_ticket_status(ticket_id, status).await {
                    Ok(()) => refresh(),
                    Err(e) => state.show_error(&e.to_string()),
                }
                in_flight.update(|set| {
                    set.remove(&ticket_id);
                });
            });
        }
    };

    // Call the oldest waiting ticket, from a fresh fetch so two staff
    // screens do not call the same customer off stale rows.
    let call_next = {
        let set_status = set_status.clone();
        move |_| {
            let set_status = set_status.clone();
            spawn_local(async move {
                match api::fetch_tickets(queue_id).await {
                    Ok(list) => {
                        let next = list
                            .iter()
                            .filter(|t| t.status == TicketStatus::Waiting)
                            .map(|t| t.id)
                            .min();
                        match next {
                            Some(id) => set_status(id, TicketStatus::Called),
                            None => state.show_error(state.t("no_waiting_customers")),
                        }
                    }
                    Err(e) => state.show_error(&e.to_string()),
                }
            });
        }
    };

    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        let navigate = logout_navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                web_sys::console::warn_1(&format!("logout failed: {e}").into());
            }
            session::clear_all();
            navigate("/login", Default::default());
        });
    };

    let waiting_count = create_memo(move |_| {
        tickets
            .get()
            .iter()
            .filter(|t| t.status == TicketStatus::Waiting)
            .count()
    });
    let served_count = create_memo(move |_| {
        tickets
            .get()
            .iter()
            .filter(|t| t.status == TicketStatus::Served)
            .count()
    });

    let row_set_status = set_status.clone();
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">
                        {move || {
                            queue
                                .get()
                                .map(|q| q.name)
                                .unwrap_or_else(|| state.t("manage_label").to_string())
                        }}
                    </h1>
                    <A href="/dashboard" class="text-sm text-gray-400 hover:text-white">
                        {move || state.t("nav_back")}
                    </A>
                </div>
                <div class="flex items-center space-x-3">
                    <button
                        on:click=move |_| set_show_controls.set(true)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        {move || state.t("open_controls")}
                    </button>
                    <button
                        on:click=on_logout
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        {move || state.t("nav_logout")}
                    </button>
                </div>
            </div>

            // Summary row
            <div class="grid grid-cols-3 gap-4">
                <SummaryCard label_key="summary_waiting" value=Signal::derive(move || waiting_count.get().to_string()) />
                <SummaryCard label_key="summary_served_today" value=Signal::derive(move || served_count.get().to_string()) />
                <SummaryCard
                    label_key="summary_status"
                    value=Signal::derive(move || {
                        match queue.get() {
                            Some(q) if q.is_open => state.t("status_open").to_string(),
                            Some(_) => state.t("status_closed").to_string(),
                            None => "—".to_string(),
                        }
                    })
                />
            </div>

            <button
                on:click=call_next
                class="w-full py-3 bg-primary-600 hover:bg-primary-700
                       rounded-lg font-semibold transition-colors"
            >
                {move || state.t("call_next")}
            </button>

            <TicketTable
                tickets=tickets
                in_flight=in_flight
                on_status=Callback::new(move |(id, status)| row_set_status(id, status))
            />

            {move || {
                show_controls.get().then(|| view! {
                    <ControlsModal
                        queue=queue
                        on_close=Callback::new(move |_| set_show_controls.set(false))
                    />
                })
            }}
        </div>
    }
    .into_view()
}

#[component]
fn SummaryCard(
    label_key: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-gray-800 rounded-xl p-4 text-center">
            <div class="text-2xl font-bold">{move || value.get()}</div>
            <div class="text-sm text-gray-400">{move || state.t(label_key)}</div>
        </div>
    }
}

/// Every ticket for the queue, grouped by status priority.
#[component]
fn TicketTable(
    tickets: RwSignal<Vec<Ticket>>,
    in_flight: RwSignal<HashSet<i64>>,
    on_status: Callback<(i64, TicketStatus)>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-4 overflow-x-auto">
            {move || {
                let rows = tickets.get();
                if rows.is_empty() {
                    view! {
                        <p class="text-center text-gray-400 py-8">
                            {state.t("no_tickets_yet")}
                        </p>
                    }
                    .into_view()
                } else {
                    view! {
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-400 border-b border-gray-700">
                                    <th class="py-2 pr-4">{state.t("table_name")}</th>
                                    <th class="py-2 pr-4">{state.t("table_party")}</th>
                                    <th class="py-2 pr-4">{state.t("table_status")}</th>
                                    <th class="py-2 pr-4">{state.t("table_joined")}</th>
                                    <th class="py-2 pr-4">{state.t("table_called")}</th>
                                    <th class="py-2 pr-4">{state.t("table_served")}</th>
                                    <th class="py-2 pr-4">{state.t("table_left")}</th>
                                    <th class="py-2 pr-4">{state.t("table_contact")}</th>
                                    <th class="py-2">{state.t("table_actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|ticket| view! {
                                    <TicketRow
                                        ticket=ticket
                                        in_flight=in_flight
                                        on_status=on_status
                                    />
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[component]
fn TicketRow(
    ticket: Ticket,
    in_flight: RwSignal<HashSet<i64>>,
    on_status: Callback<(i64, TicketStatus)>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let ticket_id = ticket.id;
    let busy = create_memo(move |_| in_flight.get().contains(&ticket_id));

    // One valid next action per row: waiting -> Call, called -> Serve.
    let can_call = ticket.status == TicketStatus::Waiting;
    let can_serve = ticket.status == TicketStatus::Called;

    view! {
        <tr class="border-b border-gray-700/50">
            <td class="py-2 pr-4 font-medium">{ticket.name.clone()}</td>
            <td class="py-2 pr-4">{ticket.party_size}</td>
            <td class="py-2 pr-4"><StatusPill status=ticket.status /></td>
            <td class="py-2 pr-4 text-gray-400">{model::format_time(ticket.created_at.as_deref())}</td>
            <td class="py-2 pr-4 text-gray-400">{model::format_time(ticket.called_at.as_deref())}</td>
            <td class="py-2 pr-4 text-gray-400">{model::format_time(ticket.served_at.as_deref())}</td>
            <td class="py-2 pr-4 text-gray-400">{model::format_time(ticket.left_at.as_deref())}</td>
            <td class="py-2 pr-4 text-gray-400">
                {ticket.contact_value.clone().unwrap_or_else(|| "—".into())}
            </td>
            <td class="py-2">
                <div class="flex space-x-2">
                    {can_call.then(|| view! {
                        <button
                            on:click=move |_| on_status.call((ticket_id, TicketStatus::Called))
                            disabled=move || busy.get()
                            class="px-3 py-1 bg-blue-700 hover:bg-blue-600 disabled:bg-gray-600
                                   rounded text-xs font-medium transition-colors"
                        >
                            {move || state.t("call_label")}
                        </button>
                    })}
                    {can_serve.then(|| view! {
                        <button
                            on:click=move |_| on_status.call((ticket_id, TicketStatus::Served))
                            disabled=move || busy.get()
                            class="px-3 py-1 bg-green-700 hover:bg-green-600 disabled:bg-gray-600
                                   rounded text-xs font-medium transition-colors"
                        >
                            {move || state.t("serve_label")}
                        </button>
                    })}
                </div>
            </td>
        </tr>
    }
}

/// Open/close toggle and custom message editor for the active queue.
#[component]
fn ControlsModal(
    queue: RwSignal<Option<model::Queue>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (message, set_message) = create_signal(
        queue
            .get_untracked()
            .and_then(|q| q.custom_message)
            .unwrap_or_default(),
    );

    let on_toggle = move |_| {
        let Some(q) = queue.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::toggle_queue(q.id).await {
                Ok(()) => {
                    queue.update(|stored| {
                        if let Some(stored) = stored {
                            stored.is_open = !stored.is_open;
                        }
                    });
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let on_save = move |_| {
        let Some(q) = queue.get_untracked() else {
            return;
        };
        let message = message.get_untracked();
        spawn_local(async move {
            match api::set_queue_message(q.id, &message).await {
                Ok(()) => {
                    queue.update(|stored| {
                        if let Some(stored) = stored {
                            stored.custom_message =
                                (!message.is_empty()).then(|| message.clone());
                        }
                    });
                    on_close.call(());
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/60 px-4">
            <div class="bg-gray-800 rounded-xl p-6 max-w-sm w-full space-y-4">
                <h2 class="text-xl font-semibold">{move || state.t("queue_controls")}</h2>

                <button
                    on:click=on_toggle
                    class="w-full py-3 bg-gray-700 hover:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || state.t("toggle_open_close")}
                </button>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        {move || state.t("custom_message")}
                    </label>
                    <textarea
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        rows="3"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    ></textarea>
                </div>

                <div class="flex space-x-3">
                    <button
                        on:click=on_save
                        class="flex-1 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-semibold transition-colors"
                    >
                        {move || state.t("manage_save")}
                    </button>
                    <button
                        on:click=move |_| on_close.call(())
                        class="flex-1 py-3 bg-gray-700 hover:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || state.t("manage_cancel")}
                    </button>
                </div>
            </div>
        </div>
    }
}
