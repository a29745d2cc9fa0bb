//! Stage Badge Component

use leptos::*;

use crate::model::stage::Stage;

/// Colored pipeline-stage badge. Unknown stages get the fallback style.
#[component]
pub fn StageBadge(stage: Stage) -> impl IntoView {
    view! {
        <span class=format!(
            "{} text-white text-xs px-2 py-0.5 rounded-full font-medium whitespace-nowrap",
            stage.badge_class()
        )>
            {stage.label()}
        </span>
    }
}
