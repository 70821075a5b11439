//! Login Page
//!
//! Staff sign-in. Success sets the session cookie server-side and lands on
//! the dashboard; a rejected attempt shows an inline error.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Staff login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(false);
        set_submitting.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(_) => {
                    set_error.set(true);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-sm mx-auto py-12 space-y-6">
            <div class="text-center">
                <h1 class="text-3xl font-bold">{move || state.t("login_title")}</h1>
                <p class="text-gray-400 mt-1">{move || state.t("login_subtitle")}</p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        {move || state.t("login_email")}
                    </label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        {move || state.t("login_password")}
                    </label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || {
                    error.get().then(|| view! {
                        <p class="text-sm text-red-400">{state.t("login_error")}</p>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-semibold transition-colors"
                >
                    {move || state.t("login_btn")}
                </button>
            </form>
        </div>
    }
}
