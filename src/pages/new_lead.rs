//! New Lead Page

use leptos::*;

use crate::components::LeadForm;

/// Lead creation page
#[component]
pub fn NewLead() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Create New Lead"</h1>
                <p class="text-gray-400 mt-1">"Add a new patient lead to the system"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-2xl">
                <LeadForm />
            </section>
        </div>
    }
}
