//! Lead Mutation Operations
//!
//! The three side-effecting operations on the lead pipeline: create,
//! follow-up, and delete. Each sequences its own refreshes after server
//! confirmation (mutation-then-refresh is strict); refreshes of different
//! snapshot kinds carry no mutual ordering.

use gloo_timers::future::TimeoutFuture;
use leptos::spawn_local;

use crate::api;
use crate::model::lead::LeadDraft;
use crate::state::global::GlobalState;

/// Submit a new lead.
///
/// Returns `true` when the server accepted it so the form can reset to its
/// defaults; on failure the caller keeps the user's input untouched.
pub async fn submit_new_lead(state: GlobalState, draft: LeadDraft) -> bool {
    if let Err(message) = draft.validate() {
        state.show_error(&message);
        return false;
    }

    match api::create_lead(&draft).await {
        Ok(lead) => {
            state.show_success(&format!("Lead created for {}", lead.full_name()));
            state.refresh_leads().await;
            true
        }
        Err(e) => {
            state.show_error(&e.to_string());
            false
        }
    }
}

/// Trigger the backend follow-up workflow for one lead.
///
/// The server may move the lead's stage and system-wide metrics as a side
/// effect, so success re-synchronizes every view before the caller releases
/// its in-flight guard. On failure nothing changes locally.
pub async fn send_follow_up(state: GlobalState, lead_id: String) {
    match api::send_follow_up(&lead_id).await {
        Ok(message) => {
            state.show_success(&message);
            state.refresh_all().await;
            schedule_stale_guard(state);
        }
        Err(e) => {
            state.show_error(&e.to_string());
        }
    }
}

/// Delete one lead, irreversibly.
///
/// Asks for confirmation naming the record before any network call. The
/// local store changes only after the server confirms; a declined dialog or
/// a failed call leaves everything as it was.
pub async fn delete_lead(state: GlobalState, lead_id: String, lead_name: String) {
    if !confirm(&format!("Delete {}? This cannot be undone.", lead_name)) {
        return;
    }

    match api::delete_lead(&lead_id).await {
        Ok(message) => {
            state.remove_lead(&lead_id);
            state.show_success(&message);
            state.refresh_all().await;
            schedule_stale_guard(state);
        }
        Err(e) => {
            state.show_error(&e.to_string());
        }
    }
}

/// One extra full re-sync shortly after a mutation, guarding against
/// snapshots the backend recomputes asynchronously.
fn schedule_stale_guard(state: GlobalState) {
    let Some(delay_ms) = state.config.stale_guard_delay_ms else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        state.refresh_all().await;
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
