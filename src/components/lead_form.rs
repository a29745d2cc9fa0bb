//! Lead Creation Form
//!
//! Form for adding a new patient lead. The server assigns the identifier
//! and initial stage; on success the fields reset to their defaults, on
//! failure the user's input stays put.

use leptos::*;

use crate::model::lead::LeadDraft;
use crate::state::actions;
use crate::state::global::GlobalState;

/// Lead creation form component
#[component]
pub fn LeadForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (relationship, set_relationship) = create_signal("self".to_string());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = LeadDraft {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: phone.get(),
            relationship: relationship.get(),
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            let created = actions::submit_new_lead(state_clone, draft).await;
            if created {
                let defaults = LeadDraft::default();
                set_first_name.set(defaults.first_name);
                set_last_name.set(defaults.last_name);
                set_email.set(defaults.email);
                set_phone.set(defaults.phone);
                set_relationship.set(defaults.relationship);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <TextField label="First Name" input_type="text" value=first_name set_value=set_first_name />
                <TextField label="Last Name" input_type="text" value=last_name set_value=set_last_name />
            </div>

            <TextField label="Email" input_type="email" value=email set_value=set_email />
            <TextField label="Phone" input_type="tel" value=phone set_value=set_phone />

            // Relationship to the patient
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Relationship"</label>
                <select
                    on:change=move |ev| set_relationship.set(event_target_value(&ev))
                    prop:value=move || relationship.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="self">"Self"</option>
                    <option value="caregiver">"Caregiver"</option>
                </select>
            </div>

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Creating..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Create Lead"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

/// Required text input with label
#[component]
fn TextField(
    label: &'static str,
    input_type: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                <span class="text-red-400">" *"</span>
            </label>
            <input
                type=input_type
                required=true
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
