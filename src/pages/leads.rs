//! Leads Page
//!
//! The full lead list with follow-up and delete actions.

use leptos::*;

use crate::components::{LeadCard, ListSkeleton};
use crate::state::global::GlobalState;

/// Leads page component
#[component]
pub fn Leads() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let leads = state.leads;
    let leads_loaded = state.leads_loaded;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"All Leads"</h1>
                <p class="text-gray-400 mt-1">"Manage and track all patient leads"</p>
            </div>

            {move || {
                if !leads_loaded.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let all = leads.get();
                if all.is_empty() {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"No leads yet. Create your first one!"</p>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            {all.into_iter().map(|lead| view! {
                                <LeadCard lead=lead />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
