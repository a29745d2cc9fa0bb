//! Global Application State
//!
//! Reactive state management using Leptos signals. One update action per
//! backend fetch keeps ordering and error handling auditable; the store is
//! a cache of server truth, refreshed wholesale.

use leptos::*;

use crate::api::{self, AlertFeed};
use crate::model::lead::Lead;
use crate::model::snapshot::{DailyDigest, KpiSet, SystemHealth};

/// Behavior tunables for the state container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateConfig {
    /// Delay before the one extra post-mutation re-sync that guards against
    /// snapshots the backend recomputes asynchronously. `None` disables it.
    pub stale_guard_delay_ms: Option<u32>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            stale_guard_delay_ms: Some(1_000),
        }
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The local lead collection (a cache of server truth)
    pub leads: RwSignal<Vec<Lead>>,
    /// Whether the lead collection has loaded at least once. Until it has,
    /// views show a loading placeholder instead of an empty list.
    pub leads_loaded: RwSignal<bool>,
    /// Latest system health snapshot, `None` until the first successful fetch
    pub system_health: RwSignal<Option<SystemHealth>>,
    /// Latest KPI snapshot
    pub kpis: RwSignal<Option<KpiSet>>,
    /// Latest alerts feed
    pub alerts: RwSignal<Option<AlertFeed>>,
    /// Latest daily digest
    pub digest: RwSignal<Option<DailyDigest>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Instant of the last completed full refresh (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Behavior tunables
    pub config: StateConfig,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(StateConfig::default()));
}

impl GlobalState {
    pub fn new(config: StateConfig) -> Self {
        Self {
            leads: create_rw_signal(Vec::new()),
            leads_loaded: create_rw_signal(false),
            system_health: create_rw_signal(None),
            kpis: create_rw_signal(None),
            alerts: create_rw_signal(None),
            digest: create_rw_signal(None),
            loading: create_rw_signal(false),
            last_refresh: create_rw_signal(None),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            config,
        }
    }

    /// Replace the local lead collection with the server's.
    ///
    /// On failure the last-known collection stays in place and the error
    /// goes to the console only; the UI must not blank on a transient
    /// network problem.
    pub async fn refresh_leads(&self) {
        match api::fetch_leads().await {
            Ok(leads) => {
                self.leads.set(leads);
                self.leads_loaded.set(true);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch leads: {}", e).into());
            }
        }
    }

    pub async fn refresh_health(&self) {
        match api::fetch_system_status().await {
            Ok(health) => self.system_health.set(Some(health)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch system health: {}", e).into());
            }
        }
    }

    pub async fn refresh_kpis(&self) {
        match api::fetch_kpis().await {
            Ok(kpis) => self.kpis.set(Some(kpis)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch KPIs: {}", e).into());
            }
        }
    }

    pub async fn refresh_alerts(&self) {
        match api::fetch_alerts().await {
            Ok(feed) => self.alerts.set(Some(feed)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch alerts: {}", e).into());
            }
        }
    }

    pub async fn refresh_digest(&self) {
        match api::fetch_daily_digest().await {
            Ok(digest) => self.digest.set(Some(digest)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch daily digest: {}", e).into());
            }
        }
    }

    /// Refresh the four auxiliary snapshots. No ordering guarantee among
    /// them; each one fails independently.
    pub async fn refresh_snapshots(&self) {
        self.refresh_health().await;
        self.refresh_kpis().await;
        self.refresh_alerts().await;
        self.refresh_digest().await;
    }

    /// Full re-synchronization of every view.
    pub async fn refresh_all(&self) {
        self.refresh_leads().await;
        self.refresh_snapshots().await;
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Drop one lead from the local collection. No network effect; only for
    /// use after a server-confirmed delete. A no-op when the id is absent.
    pub fn remove_lead(&self, lead_id: &str) {
        self.leads.update(|leads| {
            remove_by_id(leads, lead_id);
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Remove a lead by id, reporting whether anything changed.
pub fn remove_by_id(leads: &mut Vec<Lead>, lead_id: &str) -> bool {
    let before = leads.len();
    leads.retain(|lead| lead.lead_id != lead_id);
    leads.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stage::Stage;

    fn lead(id: &str) -> Lead {
        Lead {
            lead_id: id.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
            relationship: None,
            stage: Stage::Inquiry,
            has_consent: false,
            last_touch_iso: None,
        }
    }

    #[test]
    fn test_remove_by_id() {
        let mut leads = vec![lead("a"), lead("b")];
        assert!(remove_by_id(&mut leads, "a"));
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].lead_id, "b");
    }

    #[test]
    fn test_remove_by_id_is_idempotent() {
        let mut leads = vec![lead("a")];
        assert!(remove_by_id(&mut leads, "a"));
        assert!(!remove_by_id(&mut leads, "a"));
        assert!(!remove_by_id(&mut leads, "never-existed"));
        assert!(leads.is_empty());
    }

    #[test]
    fn test_stale_guard_defaults_on() {
        assert_eq!(StateConfig::default().stale_guard_delay_ms, Some(1_000));
    }
}
