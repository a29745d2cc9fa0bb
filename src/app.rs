//! App Root Component
//!
//! Root component with routing, global state, the one-time initial load,
//! and the toast host.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Leads, NewLead, SystemHealthPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One-time initial load. Every later refresh is driven by a user
    // action; there is no background polling.
    let state_for_load = state.clone();
    create_effect(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            state.loading.set(true);
            state.refresh_all().await;
            state.loading.set(false);
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/leads" view=Leads />
                        <Route path="/new-lead" view=NewLead />
                        <Route path="/system-health" view=SystemHealthPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with refresh status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing refresh status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let last_refresh = state.last_refresh;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Last refresh time
                <div class="text-gray-400">
                    {move || {
                        last_refresh.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last refresh: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
