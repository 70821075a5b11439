//! Dashboard Page
//!
//! Staff overview of all queues: create, open/close, tune the average
//! service time, grab the join link and jump into per-queue management.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::OpenPill;
use crate::model::Queue;
use crate::session;
use crate::state::global::GlobalState;

/// Staff dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let queues = create_rw_signal(Vec::<Queue>::new());
    let (loading, set_loading) = create_signal(true);

    // Session check plus initial queue list; any 401 bounces to login.
    {
        let navigate = navigate.clone();
        create_effect(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                if let Err(e) = api::verify_auth().await {
                    if e.is_unauthorized() {
                        navigate("/login", Default::default());
                        return;
                    }
                }
                match api::fetch_queues().await {
                    Ok(list) => queues.set(list),
                    Err(e) => {
                        if e.is_unauthorized() {
                            navigate("/login", Default::default());
                            return;
                        }
                        state.show_error(&e.to_string());
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let reload = move || {
        spawn_local(async move {
            match api::fetch_queues().await {
                Ok(list) => queues.set(list),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
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

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{move || state.t("dash_title")}</h1>
                    <p class="text-gray-400 mt-1">{move || state.t("your_queues")}</p>
                </div>
                <button
                    on:click=on_logout
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || state.t("nav_logout")}
                </button>
            </div>

            <CreateQueueForm on_created=Callback::new(move |_| reload()) />

            {move || {
                if loading.get() {
                    view! {
                        <div class="h-32 flex items-center justify-center">
                            <div class="loading-spinner w-8 h-8" />
                        </div>
                    }
                    .into_view()
                } else if queues.get().is_empty() {
                    view! {
                        <div class="text-center py-12 text-gray-400 space-y-2">
                            <p>{state.t("no_queues_created")}</p>
                            <p class="text-sm">{state.t("empty_create_hint")}</p>
                        </div>
                    }
                    .into_view()
                } else {
                    queues
                        .get()
                        .into_iter()
                        .map(|queue| {
                            view! { <QueueCard queue=queue queues=queues /> }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// New queue form; the average service time is entered in minutes and
/// stored in seconds.
#[component]
fn CreateQueueForm(on_created: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (avg_minutes, set_avg_minutes) = create_signal(5u32);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            state.show_error(state.t("queue_name_required"));
            return;
        }

        let avg_sec = avg_minutes.get_untracked().max(1) * 60;
        spawn_local(async move {
            match api::create_queue(&trimmed, avg_sec).await {
                Ok(_) => {
                    set_name.set(String::new());
                    on_created.call(());
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{move || state.t("create_new_queue")}</h2>

            <form on:submit=on_submit class="flex flex-col md:flex-row gap-3">
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    placeholder=move || state.t("queue_name_ph")
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <div class="flex items-center space-x-2">
                    <label class="text-sm text-gray-400 whitespace-nowrap">
                        {move || state.t("avg_service_label")}
                    </label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || avg_minutes.get().to_string()
                        on:input=move |ev| {
                            if let Ok(mins) = event_target_value(&ev).parse() {
                                set_avg_minutes.set(mins);
                            }
                        }
                        class="w-20 bg-gray-700 rounded-lg px-3 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-semibold transition-colors"
                >
                    {move || state.t("create_button")}
                </button>
            </form>
        </section>
    }
}

/// One queue row with its join link and staff controls.
#[component]
fn QueueCard(queue: Queue, queues: RwSignal<Vec<Queue>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let queue_id = queue.id;
    let (avg_minutes, set_avg_minutes) =
        create_signal(((queue.avg_service_sec as f64) / 60.0).round() as u32);

    let join_link = web_sys::window()
        .map(|w| w.location())
        .and_then(|loc| loc.origin().ok())
        .map(|origin| format!("{origin}/join?queueId={queue_id}"))
        .unwrap_or_default();

    let reload = move || {
        spawn_local(async move {
            match api::fetch_queues().await {
                Ok(list) => queues.set(list),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let manage_navigate = navigate.clone();
    let on_manage = move |_| {
        session::set_active_queue_id(queue_id);
        manage_navigate("/manage", Default::default());
    };

    let on_toggle = move |_| {
        spawn_local(async move {
            match api::toggle_queue(queue_id).await {
                Ok(()) => reload(),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let on_save_avg = move |_| {
        let avg_sec = avg_minutes.get_untracked().max(1) * 60;
        spawn_local(async move {
            match api::set_queue_avg(queue_id, avg_sec).await {
                Ok(()) => state.show_success(state.t("manage_save")),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    // Delete asks once, and once more with force only when the backend
    // reports the tickets-exist conflict.
    let delete_navigate = navigate.clone();
    let on_delete = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if !window
            .confirm_with_message(state.t("confirm_delete_queue"))
            .unwrap_or(false)
        {
            return;
        }
        let navigate = delete_navigate.clone();
        spawn_local(async move {
            match api::delete_queue(queue_id, false).await {
                Ok(()) => reload(),
                Err(e) if e.is_unauthorized() => {
                    navigate("/login", Default::default());
                }
                Err(e) if e.is_conflict() => {
                    let force = web_sys::window()
                        .and_then(|w| {
                            w.confirm_with_message(state.t("confirm_force_delete")).ok()
                        })
                        .unwrap_or(false);
                    if !force {
                        return;
                    }
                    match api::delete_queue(queue_id, true).await {
                        Ok(()) => reload(),
                        Err(e) => state.show_error(&e.to_string()),
                    }
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let is_open = queue.is_open;
    let toggle_key = if is_open { "dash_close_queue" } else { "dash_open_queue" };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <h3 class="text-lg font-semibold">{queue.name.clone()}</h3>
                    <OpenPill is_open=is_open />
                </div>
                <button
                    on:click=on_delete
                    class="px-3 py-1 text-sm text-red-400 hover:text-red-300 transition-colors"
                >
                    {move || state.t("delete_label")}
                </button>
            </div>

            <div class="text-sm text-gray-400">
                {move || state.t("join_link_label")} ": "
                <code class="bg-gray-700 rounded px-2 py-1 select-all">{join_link}</code>
            </div>

            <div class="flex flex-wrap items-center gap-3">
                <button
                    on:click=on_manage
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || state.t("manage_label")}
                </button>
                <button
                    on:click=on_toggle
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || state.t(toggle_key)}
                </button>

                <div class="flex items-center space-x-2 ml-auto">
                    <label class="text-sm text-gray-400">
                        {move || state.t("avg_service_label")}
                    </label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || avg_minutes.get().to_string()
                        on:input=move |ev| {
                            if let Ok(mins) = event_target_value(&ev).parse() {
                                set_avg_minutes.set(mins);
                            }
                        }
                        class="w-20 bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=on_save_avg
                        class="px-3 py-2 bg-gray-700 hover:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        {move || state.t("manage_save")}
                    </button>
                </div>
            </div>
        </section>
    }
}
