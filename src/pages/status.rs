//! Status Page
//!
//! Live view of a customer's ticket. Polls the backend, shows position and
//! ETA, fires the called-state alerts and swaps to a terminal screen once
//! the ticket is served or abandoned.

use leptos::*;
use leptos_router::*;

use crate::alerts::AlertGates;
use crate::api;
use crate::components::{CountdownRing, StatusPill};
use crate::model::TicketStatus;
use crate::session;
use crate::state::global::GlobalState;
use crate::state::poller::{Countdown, StatusPoller};

/// Ticket status page component
#[component]
pub fn Status() -> impl IntoView {
    // No remembered ticket on this device means nothing to poll.
    let Some(ticket_id) = session::ticket_id() else {
        return view! { <Redirect path="/join" /> }.into_view();
    };

    let alerts = AlertGates::new();
    let countdown = Countdown::new();
    let poller = StatusPoller::new(ticket_id, alerts.clone(), countdown.clone());

    poller.start();

    // Timers must not outlive the page.
    {
        let poller = poller.clone();
        let countdown = countdown.clone();
        on_cleanup(move || {
            poller.stop();
            countdown.stop();
        });
    }

    let terminal = poller.terminal;
    let live = poller.clone();
    view! {
        <div class="max-w-md mx-auto">
            {move || match terminal.get() {
                Some(status) => view! { <TerminalScreen status=status /> }.into_view(),
                None => view! {
                    <LiveTicket
                        poller=live.clone()
                        alerts=alerts.clone()
                        countdown=countdown.clone()
                    />
                }
                .into_view(),
            }}
        </div>
    }
    .into_view()
}

/// Served/left end screen with a way back to the join form.
#[component]
fn TerminalScreen(status: TicketStatus) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (icon, message_key) = match status {
        TicketStatus::Left => ("👋", "left_screen_msg"),
        _ => ("✅", "served_screen_msg"),
    };

    let join_again = move |_| {
        session::forget_ticket();
        navigate("/join", Default::default());
    };

    view! {
        <div class="text-center space-y-6 py-16">
            <div class="text-6xl">{icon}</div>
            <p class="text-xl">{move || state.t(message_key)}</p>
            <button
                on:click=join_again
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                       rounded-lg font-medium transition-colors"
            >
                {move || state.t("join_again")}
            </button>
        </div>
    }
}

/// The live ticket card plus queue snapshot and alert opt-ins.
#[component]
fn LiveTicket(
    poller: StatusPoller,
    alerts: AlertGates,
    countdown: Countdown,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let ticket = poller.ticket;
    let alert_active = poller.alert_active;

    let leave_poller = poller.clone();
    let on_leave = move |_| {
        let poller = leave_poller.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::leave_ticket(poller.ticket_id()).await {
                Ok(()) => {
                    poller.stop();
                    session::forget_ticket();
                    navigate("/join", Default::default());
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let refresh_poller = poller.clone();
    let countdown_started = countdown.clone();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-center">{move || state.t("status_title")}</h1>

            // Blinking banner while the ticket is called
            {move || {
                alert_active.get().then(|| view! {
                    <div class="bg-blue-600 text-white rounded-lg px-4 py-3 text-center
                                font-semibold animate-blink">
                        {state.t("status_called_banner")}
                    </div>
                })
            }}

            {move || match ticket.get() {
                None => view! {
                    <div class="h-48 flex items-center justify-center">
                        <div class="loading-spinner w-8 h-8" />
                    </div>
                }
                .into_view(),
                Some(ticket) => {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <div class="flex items-center justify-between">
                                <div>
                                    <div class="text-lg font-semibold">{ticket.name.clone()}</div>
                                    <div class="text-gray-400 text-sm">
                                        {state.t("status_your_number")} " #" {ticket.id}
                                    </div>
                                </div>
                                <StatusPill status=ticket.status />
                            </div>

                            <div class="grid grid-cols-2 gap-4 text-center">
                                <div class="bg-gray-700 rounded-lg p-4">
                                    <div class="text-3xl font-bold">
                                        {ticket.position.map(|p| p.to_string()).unwrap_or_else(|| "—".into())}
                                    </div>
                                    <div class="text-sm text-gray-400">
                                        {state.t("status_your_position")}
                                    </div>
                                </div>
                                <div class="bg-gray-700 rounded-lg p-4">
                                    <div class="text-3xl font-bold">
                                        {ticket
                                            .eta_display_min()
                                            .map(|m| format!("~{m} min"))
                                            .unwrap_or_else(|| "—".into())}
                                    </div>
                                    <div class="text-sm text-gray-400">
                                        {state.t("status_estimated_wait")}
                                    </div>
                                </div>
                            </div>

                            {ticket.custom_message.clone().map(|msg| view! {
                                <div class="bg-gray-700 rounded-lg px-4 py-3 text-sm text-gray-300">
                                    {msg}
                                </div>
                            })}

                            <p class="text-sm text-gray-400 text-center">
                                {state.t("status_wait_msg")}
                            </p>
                        </div>

                        <QueueSnapshot ticket=ticket />
                    }
                    .into_view()
                }
            }}

            // Local countdown, armed once from the first known ETA
            {
                let countdown = countdown_started.clone();
                move || {
                    countdown.armed().then(|| view! {
                        <CountdownRing
                            remaining=countdown.remaining
                            total=countdown.total
                        />
                    })
                }
            }

            <AlertOptIns alerts=alerts />

            <div class="flex space-x-3">
                <button
                    on:click=move |_| refresh_poller.refresh()
                    class="flex-1 py-3 bg-gray-700 hover:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || state.t("status_refresh_btn")}
                </button>
                <button
                    on:click=on_leave
                    class="flex-1 py-3 bg-red-700 hover:bg-red-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || state.t("status_leave")}
                </button>
            </div>
        </div>
    }
}

/// Who is ahead, total waiting and the average service time.
#[component]
fn QueueSnapshot(ticket: crate::model::PublicTicket) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-3">
            <h2 class="font-semibold">{move || state.t("modal_queue_overview")}</h2>

            <div class="text-sm text-gray-400">
                {move || state.t("status_total_waiting")} ": "
                {ticket.total_waiting.map(|n| n.to_string()).unwrap_or_else(|| "—".into())}
            </div>

            <div class="text-sm text-gray-400">
                {move || state.t("modal_avg_service")} ": "
                {ticket
                    .avg_service_sec
                    .map(|s| format!("{} min", (s as f64 / 60.0).round() as u32))
                    .unwrap_or_else(|| "—".into())}
            </div>

            {(!ticket.ahead_of_you.is_empty()).then(|| view! {
                <div>
                    <div class="text-sm text-gray-400 mb-2">
                        {move || state.t("modal_people_ahead")}
                    </div>
                    <ul class="space-y-1">
                        {ticket.ahead_of_you.iter().map(|entry| view! {
                            <li class="flex justify-between text-sm bg-gray-700 rounded px-3 py-2">
                                <span>{entry.name.clone()}</span>
                                <span class="text-gray-400">{format!("×{}", entry.party_size)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}

/// Browser alert channels need a user gesture, so each is an explicit button.
#[component]
fn AlertOptIns(alerts: AlertGates) -> impl IntoView {
    let sound = alerts.clone();
    let vibration = alerts.clone();
    let notifications = alerts.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 space-y-2">
            <OptInButton
                enabled=alerts.sound
                label_key="enable_sound_alerts"
                icon="🔔"
                on_enable=Callback::new(move |_| sound.enable_sound())
            />
            <OptInButton
                enabled=alerts.vibration
                label_key="enable_vibration_alerts"
                icon="📳"
                on_enable=Callback::new(move |_| vibration.enable_vibration())
            />
            <OptInButton
                enabled=alerts.notifications
                label_key="enable_desktop_notifications"
                icon="💬"
                on_enable=Callback::new(move |_| notifications.enable_notifications())
            />
        </div>
    }
}

#[component]
fn OptInButton(
    enabled: RwSignal<bool>,
    label_key: &'static str,
    icon: &'static str,
    on_enable: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            on:click=move |_| on_enable.call(())
            disabled=move || enabled.get()
            class=move || {
                let base = "w-full flex items-center justify-between px-4 py-2 rounded-lg \
                            text-sm font-medium transition-colors";
                if enabled.get() {
                    format!("{base} bg-green-900/40 text-green-400")
                } else {
                    format!("{base} bg-gray-700 hover:bg-gray-600 text-gray-300")
                }
            }
        >
            <span>{icon} " " {move || state.t(label_key)}</span>
            <span>{move || if enabled.get() { "✓" } else { "" }}</span>
        </button>
    }
}
