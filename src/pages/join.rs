//! Join Page
//!
//! Customer-facing form to take a place in line. The form stays disabled
//! until the privacy notice is accepted, and the join button is locked when
//! the target queue reports closed.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::model::{self, MAX_PARTY_SIZE};
use crate::session;
use crate::state::global::GlobalState;

/// Join form page component
#[component]
pub fn Join() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let query = use_query_map();

    // ?queueId=N with a default of 1, matching the printed QR posters.
    let queue_id = create_memo(move |_| {
        query
            .with(|q| q.get("queueId").and_then(|v| v.parse::<i64>().ok()))
            .unwrap_or(1)
    });

    let (name, set_name) = create_signal(String::new());
    let (party_size, set_party_size) = create_signal(1u32);
    let (contact, set_contact) = create_signal(String::new());
    let (accepted, set_accepted) = create_signal(false);
    let (show_privacy, set_show_privacy) = create_signal(true);
    let (submitting, set_submitting) = create_signal(false);
    let (queue_closed, set_queue_closed) = create_signal(false);

    // Closed-queue check on load; a failed check is logged and the form
    // stays usable, the backend still rejects closed joins.
    create_effect(move |_| {
        let queue_id = queue_id.get();
        spawn_local(async move {
            match api::fetch_queues().await {
                Ok(queues) => {
                    let closed = queues
                        .iter()
                        .find(|q| q.id == queue_id)
                        .map(|q| !q.is_open)
                        .unwrap_or(false);
                    set_queue_closed.set(closed);
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("queue open check failed: {e}").into(),
                    );
                }
            }
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            state.show_error(state.t("join_name_ph"));
            return;
        }
        if !model::party_size_ok(party_size.get_untracked()) {
            state.show_error(state.t("party_limit"));
            return;
        }
        if queue_closed.get_untracked() {
            state.show_error(state.t("queue_closed_join"));
            return;
        }

        let request = model::join_request(
            queue_id.get_untracked(),
            &trimmed,
            party_size.get_untracked(),
            &contact.get_untracked(),
        );

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_ticket(&request).await {
                Ok(response) => {
                    session::remember_ticket(response.ticket.id, request.queue_id);
                    navigate("/status", Default::default());
                }
                Err(e) => {
                    let message = format!("{}: {}", state.t("join_failed"), e);
                    state.show_error(&message);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <PrivacyModal
                shown=show_privacy
                on_accept=Callback::new(move |_| {
                    set_accepted.set(true);
                    set_show_privacy.set(false);
                })
            />

            <div class="text-center">
                <h1 class="text-3xl font-bold">{move || state.t("join_welcome")}</h1>
                <p class="text-gray-400 mt-1">{move || state.t("join_prompt")}</p>
            </div>

            {move || {
                queue_closed.get().then(|| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                        {state.t("queue_closed_join")}
                    </div>
                })
            }}

            <form
                on:submit=on_submit
                class=move || {
                    let base = "bg-gray-800 rounded-xl p-6 space-y-4 transition-opacity";
                    if accepted.get() {
                        base.to_string()
                    } else {
                        format!("{base} opacity-30 pointer-events-none")
                    }
                }
            >
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        {move || state.t("join_name")}
                    </label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        placeholder=move || state.t("join_name_ph")
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        {move || state.t("join_party")}
                    </label>
                    <select
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse() {
                                set_party_size.set(size);
                            }
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {(1..=MAX_PARTY_SIZE).map(|n| view! {
                            <option value=n selected=move || party_size.get() == n>{n}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        {move || state.t("join_contact")}
                    </label>
                    <input
                        type="tel"
                        prop:value=move || contact.get()
                        on:input=move |ev| set_contact.set(event_target_value(&ev))
                        placeholder=move || state.t("join_contact_ph")
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get() || queue_closed.get()
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-semibold transition-colors"
                >
                    {move || {
                        if submitting.get() {
                            view! { <span class="loading-spinner w-4 h-4 inline-block" /> }.into_view()
                        } else {
                            state.t("join_btn").into_view()
                        }
                    }}
                </button>

                <p class="text-xs text-gray-500 text-center">
                    {move || state.t("join_terms")}
                </p>
            </form>

            <button
                on:click=move |_| set_show_privacy.set(true)
                class="block mx-auto text-xs text-gray-500 hover:text-gray-300 underline"
            >
                {move || state.t("privacy_title")}
            </button>
        </div>
    }
}

/// Privacy notice. Blocks the form until first accepted, and can be
/// re-opened from the link below the form.
#[component]
fn PrivacyModal(shown: ReadSignal<bool>, on_accept: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            shown.get().then(|| view! {
                <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/60 px-4">
                    <div class="bg-gray-800 rounded-xl p-6 max-w-sm w-full space-y-4">
                        <h2 class="text-xl font-semibold">{state.t("privacy_title")}</h2>
                        <p class="text-sm text-gray-300">{state.t("privacy_body")}</p>
                        <button
                            on:click=move |_| on_accept.call(())
                            class="w-full py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-semibold transition-colors"
                        >
                            {state.t("privacy_accept")}
                        </button>
                    </div>
                </div>
            })
        }}
    }
}
