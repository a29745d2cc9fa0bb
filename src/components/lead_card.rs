//! Lead Card Component
//!
//! One lead in the list, with its follow-up and delete controls.

use leptos::*;

use crate::components::StageBadge;
use crate::model::lead::Lead;
use crate::state::actions;
use crate::state::global::GlobalState;

/// Lead list row with mutation controls.
///
/// Each control disables while its request is in flight, so a double click
/// cannot issue duplicate backend calls.
#[component]
pub fn LeadCard(lead: Lead) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (sending, set_sending) = create_signal(false);
    let (deleting, set_deleting) = create_signal(false);

    let follow_up_id = lead.lead_id.clone();
    let state_for_follow_up = state.clone();
    let on_follow_up = move |_| {
        let state = state_for_follow_up.clone();
        let lead_id = follow_up_id.clone();
        set_sending.set(true);
        spawn_local(async move {
            actions::send_follow_up(state, lead_id).await;
            set_sending.set(false);
        });
    };

    let delete_id = lead.lead_id.clone();
    let delete_name = lead.full_name();
    let state_for_delete = state.clone();
    let on_delete = move |_| {
        let state = state_for_delete.clone();
        let lead_id = delete_id.clone();
        let lead_name = delete_name.clone();
        set_deleting.set(true);
        spawn_local(async move {
            actions::delete_lead(state, lead_id, lead_name).await;
            set_deleting.set(false);
        });
    };

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg p-4 space-y-2">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="font-semibold">{lead.full_name()}</h3>
                    <p class="text-sm text-gray-400">
                        {lead.email.clone()} " • " {lead.phone.clone()}
                    </p>
                </div>

                <div class="flex items-center space-x-2">
                    <StageBadge stage=lead.stage.clone() />

                    {lead.has_consent.then(|| view! {
                        <span class="text-green-400 border border-green-400 text-xs px-2 py-0.5 rounded-full whitespace-nowrap">
                            "Consent ✓"
                        </span>
                    })}

                    <button
                        on:click=on_follow_up
                        disabled=move || sending.get()
                        class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg text-sm transition-colors"
                    >
                        {move || if sending.get() { "Sending..." } else { "✉ Send Follow-up" }}
                    </button>

                    <button
                        on:click=on_delete
                        disabled=move || deleting.get()
                        class="px-3 py-1.5 border border-red-600 text-red-400 hover:bg-red-600/10
                               disabled:opacity-50 disabled:cursor-not-allowed rounded-lg text-sm
                               transition-colors"
                    >
                        {move || if deleting.get() { "Deleting..." } else { "🗑 Delete" }}
                    </button>
                </div>
            </div>

            <div class="text-sm text-gray-500">
                "Last updated: " {lead.last_touch_datetime()}
            </div>
        </div>
    }
}
