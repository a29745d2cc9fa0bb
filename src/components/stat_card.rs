//! Stat Card Component
//!
//! Single headline number for the dashboard summary row.

use leptos::*;

/// Headline count with a title and icon
#[component]
pub fn StatCard(
    /// Card title
    #[prop(into)]
    title: String,
    /// Icon shown next to the title
    icon: &'static str,
    /// The number to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm font-medium">{title}</span>
                <span class="text-lg">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}
