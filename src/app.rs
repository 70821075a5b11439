//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Analytics, Dashboard, Join, Login, Manage, Status};
use crate::state::global::{provide_global_state, GlobalState};
use crate::theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Apply the saved (or OS-preferred) theme and language before paint.
    theme::apply(theme::initial_theme());
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", state.lang.get_untracked().as_str());
    }

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/join" /> } />
                        <Route path="/join" view=Join />
                        <Route path="/status" view=Status />
                        <Route path="/login" view=Login />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/manage" view=Manage />
                        <Route path="/analytics" view=Analytics />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <A
                href="/join"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "QueueLeaf"
            </A>
        </div>
    }
}
