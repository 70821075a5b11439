//! Analytics Page
//!
//! Served/left trends, wait times, weekday peaks and the hour-of-day
//! heatmap, over a picked date range, with an optional live refresh and a
//! two-queue comparison.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api;
use crate::components::{BarChart, ChartData, Heatmap, LineChart, Series};
use crate::model::{DailyStat, GlobalStats, Queue};
use crate::state::global::GlobalState;
use crate::stats;

/// Live refresh cadence.
const LIVE_REFRESH_MS: u32 = 10_000;

const SERVED_COLOR: &str = "#0d9488";
const LEFT_COLOR: &str = "#f44336";
const WAIT_COLOR: &str = "#ff9800";
const PEAK_COLOR: &str = "#2196f3";
const COMPARE_B_COLOR: &str = "#9c27b0";

/// Which slice of history the charts show.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RangePick {
    Days(u32),
    Custom,
}

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let global = create_rw_signal(GlobalStats::default());
    let daily = create_rw_signal(Vec::<DailyStat>::new());
    let queues = create_rw_signal(Vec::<Queue>::new());

    let (range, set_range) = create_signal(RangePick::Days(7));
    let (custom_start, set_custom_start) = create_signal(String::new());
    let (custom_end, set_custom_end) = create_signal(String::new());
    let (live, set_live) = create_signal(true);

    let live_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let load = {
        let navigate = navigate.clone();
        let live_handle = Rc::clone(&live_handle);
        move || {
            let navigate = navigate.clone();
            let live_handle = Rc::clone(&live_handle);
            let pick = range.get_untracked();
            let start = custom_start.get_untracked();
            let end = custom_end.get_untracked();
            spawn_local(async move {
                let stats_result = api::fetch_global_stats().await;
                let daily_result = match pick {
                    RangePick::Days(days) => api::fetch_daily(days).await,
                    RangePick::Custom => api::fetch_custom_range(&start, &end).await,
                };

                for err in [stats_result.as_ref().err(), daily_result.as_ref().err()]
                    .into_iter()
                    .flatten()
                {
                    if err.is_unauthorized() {
                        // A dead session must not keep a timer spinning.
                        live_handle.borrow_mut().take();
                        navigate("/login", Default::default());
                        return;
                    }
                }

                match stats_result {
                    Ok(stats) => global.set(stats),
                    Err(e) => state.show_error(&e.to_string()),
                }
                match daily_result {
                    Ok(list) => daily.set(list),
                    Err(e) => state.show_error(&e.to_string()),
                }
            });
        }
    };

    // Session check, queue list for the comparison pickers, first load,
    // and the live refresh timer.
    {
        let load = load.clone();
        let navigate = navigate.clone();
        let live_handle = Rc::clone(&live_handle);
        create_effect(move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                if let Err(e) = api::verify_auth().await {
                    if e.is_unauthorized() {
                        navigate("/login", Default::default());
                        return;
                    }
                }
                if let Ok(list) = api::fetch_queues().await {
                    queues.set(list);
                }
            });
            load();

            let load = load.clone();
            *live_handle.borrow_mut() = Some(Interval::new(LIVE_REFRESH_MS, move || {
                load();
            }));
        });
    }

    {
        let live_handle = Rc::clone(&live_handle);
        on_cleanup(move || {
            live_handle.borrow_mut().take();
        });
    }

    let toggle_live = {
        let load = load.clone();
        let live_handle = Rc::clone(&live_handle);
        move |ev: ev::Event| {
            let enabled = event_target_checked(&ev);
            set_live.set(enabled);
            if enabled {
                let load = load.clone();
                *live_handle.borrow_mut() = Some(Interval::new(LIVE_REFRESH_MS, move || {
                    load();
                }));
            } else {
                live_handle.borrow_mut().take();
            }
        }
    };

    let pick_range = {
        let load = load.clone();
        move |ev: ev::Event| {
            let pick = match event_target_value(&ev).as_str() {
                "14" => RangePick::Days(14),
                "30" => RangePick::Days(30),
                "custom" => RangePick::Custom,
                _ => RangePick::Days(7),
            };
            set_range.set(pick);
            if pick != RangePick::Custom {
                load();
            }
        }
    };

    let apply_custom = {
        let load = load.clone();
        move |_| {
            if custom_start.get_untracked().is_empty() || custom_end.get_untracked().is_empty() {
                state.show_error(state.t("select_date_prompt"));
                return;
            }
            load();
        }
    };

    // Chart data derivations
    let trend_data = create_memo(move |_| {
        let daily = daily.get();
        ChartData {
            labels: stats::short_labels(&daily),
            series: vec![
                Series::new(state.t("chart_label_served"), SERVED_COLOR, stats::served_series(&daily))
                    .filled(),
                Series::new(state.t("chart_label_left"), LEFT_COLOR, stats::left_series(&daily)),
            ],
        }
    });

    let wait_data = create_memo(move |_| {
        let daily = daily.get();
        ChartData {
            labels: stats::short_labels(&daily),
            series: vec![Series::new(
                state.t("chart_label_avg_wait"),
                WAIT_COLOR,
                stats::wait_series(&daily),
            )],
        }
    });

    let peak_data = create_memo(move |_| {
        let totals = stats::peak_day_totals(&daily.get());
        ChartData {
            labels: stats::DAY_NAMES.iter().map(|d| d.to_string()).collect(),
            series: vec![Series::new(
                state.t("chart_label_customers"),
                PEAK_COLOR,
                totals.iter().map(|&v| v as f64).collect(),
            )],
        }
    });

    let heatmap_data = create_memo(move |_| stats::aggregate_heatmap(&daily.get()));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between flex-wrap gap-4">
                <h1 class="text-3xl font-bold">{move || state.t("analytics_title")}</h1>

                <div class="flex items-center space-x-4">
                    <label class="flex items-center space-x-2 text-sm text-gray-400">
                        <input
                            type="checkbox"
                            prop:checked=move || live.get()
                            on:change=toggle_live
                        />
                        <span>{move || state.t("live_refresh_label")}</span>
                    </label>

                    <select
                        on:change=pick_range
                        class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:outline-none"
                    >
                        <option value="7">{move || state.t("date_range_7")}</option>
                        <option value="14">{move || state.t("date_range_14")}</option>
                        <option value="30">{move || state.t("date_range_30")}</option>
                        <option value="custom">{move || state.t("date_range_custom")}</option>
                    </select>
                </div>
            </div>

            // Custom range inputs
            {move || {
                (range.get() == RangePick::Custom).then(|| {
                    let apply_custom = apply_custom.clone();
                    view! {
                        <div class="flex items-center space-x-3">
                            <input
                                type="date"
                                prop:value=move || custom_start.get()
                                on:input=move |ev| set_custom_start.set(event_target_value(&ev))
                                class="bg-gray-700 rounded-lg px-3 py-2 text-sm border border-gray-600"
                            />
                            <span class="text-gray-400">"—"</span>
                            <input
                                type="date"
                                prop:value=move || custom_end.get()
                                on:input=move |ev| set_custom_end.set(event_target_value(&ev))
                                class="bg-gray-700 rounded-lg px-3 py-2 text-sm border border-gray-600"
                            />
                            <button
                                on:click=apply_custom
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                                       rounded-lg text-sm font-medium transition-colors"
                            >
                                {state.t("apply_button")}
                            </button>
                        </div>
                    }
                })
            }}

            // Global counters
            <div class="grid grid-cols-3 gap-4">
                <StatCard
                    label_key="total_tickets"
                    value=Signal::derive(move || display_count(global.get().total_tickets))
                />
                <StatCard
                    label_key="served"
                    value=Signal::derive(move || display_count(global.get().served_tickets))
                />
                <StatCard
                    label_key="total_queues"
                    value=Signal::derive(move || display_count(global.get().total_queues))
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">{move || state.t("served_left_trend")}</h2>
                <LineChart data=Signal::derive(move || trend_data.get()) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">{move || state.t("avg_wait_time")}</h2>
                <LineChart data=Signal::derive(move || wait_data.get()) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">{move || state.t("peak_day_of_week")}</h2>
                <BarChart data=Signal::derive(move || peak_data.get()) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                <h2 class="text-xl font-semibold">{move || state.t("heatmap_peak_hours")}</h2>
                <Heatmap grid=Signal::derive(move || heatmap_data.get()) />
                <p class="text-xs text-gray-500">{move || state.t("heatmap_legend")}</p>
            </section>

            <CompareQueues queues=queues />
        </div>
    }
}

fn display_count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".into())
}

#[component]
fn StatCard(
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

/// Served-per-day comparison of two queues over the last week.
#[component]
fn CompareQueues(queues: RwSignal<Vec<Queue>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (pick_a, set_pick_a) = create_signal(None::<i64>);
    let (pick_b, set_pick_b) = create_signal(None::<i64>);
    let compare_served = create_rw_signal(ChartData::default());
    let compare_wait = create_rw_signal(ChartData::default());

    let load_compare = move || {
        let (Some(a), Some(b)) = (pick_a.get_untracked(), pick_b.get_untracked()) else {
            return;
        };
        let label_a = queue_name(&queues.get_untracked(), a);
        let label_b = queue_name(&queues.get_untracked(), b);
        spawn_local(async move {
            let a_result = api::fetch_queue_daily(a, 7).await;
            let b_result = api::fetch_queue_daily(b, 7).await;
            match (a_result, b_result) {
                (Ok(daily_a), Ok(daily_b)) => {
                    let labels = if daily_a.len() >= daily_b.len() {
                        stats::short_labels(&daily_a)
                    } else {
                        stats::short_labels(&daily_b)
                    };
                    compare_served.set(ChartData {
                        labels: labels.clone(),
                        series: vec![
                            Series::new(label_a.clone(), SERVED_COLOR, stats::served_series(&daily_a)),
                            Series::new(label_b.clone(), COMPARE_B_COLOR, stats::served_series(&daily_b)),
                        ],
                    });
                    compare_wait.set(ChartData {
                        labels,
                        series: vec![
                            Series::new(label_a, SERVED_COLOR, stats::wait_series(&daily_a)),
                            Series::new(label_b, COMPARE_B_COLOR, stats::wait_series(&daily_b)),
                        ],
                    });
                }
                (Err(e), _) | (_, Err(e)) => state.show_error(&e.to_string()),
            }
        });
    };

    let on_pick_a = move |ev: ev::Event| {
        set_pick_a.set(event_target_value(&ev).parse().ok());
        load_compare();
    };
    let on_pick_b = move |ev: ev::Event| {
        set_pick_b.set(event_target_value(&ev).parse().ok());
        load_compare();
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">{move || state.t("compare_queues")}</h2>

            <div class="flex items-center space-x-3">
                <QueuePicker queues=queues label_key="compare_queue_a" on_change=on_pick_a />
                <QueuePicker queues=queues label_key="compare_queue_b" on_change=on_pick_b />
            </div>

            {move || {
                (!compare_served.get().is_empty()).then(|| view! {
                    <h3 class="text-sm text-gray-400">{state.t("chart_label_served")}</h3>
                    <LineChart data=Signal::derive(move || compare_served.get()) />
                    <h3 class="text-sm text-gray-400">{state.t("chart_label_avg_wait")}</h3>
                    <LineChart data=Signal::derive(move || compare_wait.get()) />
                })
            }}
        </section>
    }
}

fn queue_name(queues: &[Queue], id: i64) -> String {
    queues
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

#[component]
fn QueuePicker<F>(
    queues: RwSignal<Vec<Queue>>,
    label_key: &'static str,
    on_change: F,
) -> impl IntoView
where
    F: Fn(ev::Event) + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <select
            on:change=on_change
            class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                   border border-gray-600 focus:outline-none"
        >
            <option value="">{move || state.t(label_key)}</option>
            {move || {
                queues.get().into_iter().map(|q| view! {
                    <option value=q.id.to_string()>{q.name}</option>
                }).collect_view()
            }}
        </select>
    }
}
