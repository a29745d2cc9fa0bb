//! Dashboard Page
//!
//! Pipeline overview: per-stage stat cards and recent activity.

use leptos::*;

use crate::components::{CardSkeleton, ListSkeleton, StageBadge, StatCard};
use crate::model::summary::{recent_leads, PipelineSummary, RECENT_ACTIVITY_LIMIT};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let leads = state.leads;
    let leads_loaded = state.leads_loaded;

    // Recomputed on every store change; never cached across refreshes.
    let summary = create_memo(move |_| PipelineSummary::from_leads(&leads.get()));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your admissions pipeline at a glance"</p>
            </div>

            // Summary row
            {move || {
                if !leads_loaded.get() {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <StatCard
                                title="Total Leads"
                                icon="👥"
                                value=Signal::derive(move || summary.get().total.to_string())
                            />
                            <StatCard
                                title="Docs Requested"
                                icon="📄"
                                value=Signal::derive(move || summary.get().docs_requested.to_string())
                            />
                            <StatCard
                                title="Ready to Schedule"
                                icon="📅"
                                value=Signal::derive(move || summary.get().consult_ready.to_string())
                            />
                            <StatCard
                                title="Scheduled"
                                icon="✅"
                                value=Signal::derive(move || summary.get().scheduled.to_string())
                            />
                        </div>
                    }.into_view()
                }
            }}

            <RecentActivity />
        </div>
    }
}

/// The most recently touched leads
#[component]
fn RecentActivity() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let leads = state.leads;
    let leads_loaded = state.leads_loaded;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"Recent Activity"</h2>
            <p class="text-gray-400 text-sm mb-4">"Latest lead updates and activities"</p>

            {move || {
                if !leads_loaded.get() {
                    return view! { <ListSkeleton count=RECENT_ACTIVITY_LIMIT /> }.into_view();
                }

                let recent = recent_leads(&leads.get(), RECENT_ACTIVITY_LIMIT);
                if recent.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No recent activity"</p>
                    }.into_view()
                } else {
                    recent.into_iter().map(|lead| {
                        let touched = lead.last_touch_date();
                        view! {
                            <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                <div class="flex items-center space-x-3">
                                    <span class="text-2xl">{lead.stage.icon()}</span>
                                    <span class="font-medium">{lead.full_name()}</span>
                                    <StageBadge stage=lead.stage.clone() />
                                </div>
                                <span class="text-gray-400 text-sm">{touched}</span>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </section>
    }
}
