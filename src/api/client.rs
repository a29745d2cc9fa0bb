//! HTTP API Client
//!
//! Functions for communicating with the admissions backend REST API.

use gloo_net::http::{Request, Response};

use crate::model::lead::{Lead, LeadDraft};
use crate::model::snapshot::{Alert, DailyDigest, KpiSet, SystemHealth};

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("admissions_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("admissions_api_url", url);
        }
    }
}

/// API failure taxonomy.
///
/// `Network` means the request never completed; `Api` means the server
/// answered and signalled failure; `Malformed` means the body could not be
/// decoded and is treated as an application failure with a generic message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response from server: {0}")]
    Malformed(String),
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, serde::Deserialize)]
struct FollowUpResponse {
    #[serde(default)]
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct KpiResponse {
    #[serde(default)]
    kpis: KpiSet,
}

/// Alerts feed with full-set counts. Views cap the list at five entries
/// for display; the counts always reflect the whole feed.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct AlertFeed {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub active_count: u64,
}

// ============ Helpers ============

/// Decode the server's `{error}` body, falling back to the status code.
async fn error_from_response(response: Response) -> ApiError {
    match response.json::<ErrorBody>().await {
        Ok(body) => ApiError::Api(body.error),
        Err(_) => ApiError::Api(format!("Request failed with status {}", response.status())),
    }
}

// ============ API Functions ============

/// Fetch the full lead collection
pub async fn fetch_leads() -> Result<Vec<Lead>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/leads", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Create a new lead; the server assigns id and initial stage
pub async fn create_lead(draft: &LeadDraft) -> Result<Lead, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/leads", api_base))
        .json(draft)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Trigger the follow-up workflow for one lead, returning the server's
/// success message
pub async fn send_follow_up(lead_id: &str) -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/leads/{}", api_base, lead_id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: FollowUpResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    if body.message.is_empty() {
        Ok("Follow-up sent".to_string())
    } else {
        Ok(body.message)
    }
}

/// Delete one lead, returning the server's success message.
///
/// Application-level failure is signalled in the body (`success: false`),
/// possibly alongside a non-2xx status; both map to `ApiError::Api`.
pub async fn delete_lead(lead_id: &str) -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/delete-lead/{}", api_base, lead_id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();

    let body: DeleteResponse = match response.json().await {
        Ok(body) => body,
        Err(e) if ok => return Err(ApiError::Malformed(e.to_string())),
        Err(_) => return Err(ApiError::Api(format!("Request failed with status {}", status))),
    };

    if body.success {
        Ok(body.message.unwrap_or_else(|| "Lead deleted".to_string()))
    } else {
        Err(ApiError::Api(
            body.error.unwrap_or_else(|| "Delete failed".to_string()),
        ))
    }
}

/// Fetch the system health snapshot
pub async fn fetch_system_status() -> Result<SystemHealth, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/system/status", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Fetch the KPI snapshot
pub async fn fetch_kpis() -> Result<KpiSet, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/kpis", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: KpiResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    Ok(body.kpis)
}

/// Fetch the alerts feed
pub async fn fetch_alerts() -> Result<AlertFeed, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/alerts", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Fetch the daily operational digest
pub async fn fetch_daily_digest() -> Result<DailyDigest, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/digest/daily", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_body_with_success_flag() {
        let body: DeleteResponse =
            serde_json::from_str(r#"{"success": true, "message": "Successfully deleted Ann Lee"}"#)
                .unwrap();
        assert!(body.success);
        assert_eq!(body.message.as_deref(), Some("Successfully deleted Ann Lee"));
    }

    #[test]
    fn test_delete_body_defaults_to_failure() {
        let body: DeleteResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
        assert!(body.error.is_none());
    }

    #[test]
    fn test_follow_up_body_tolerates_extra_fields() {
        let body: FollowUpResponse = serde_json::from_str(
            r#"{"status": "success", "message": "Follow-up email workflow completed successfully", "steps": []}"#,
        )
        .unwrap();
        assert_eq!(body.message, "Follow-up email workflow completed successfully");
    }

    #[test]
    fn test_alert_feed_defaults() {
        let feed: AlertFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.alerts.is_empty());
        assert_eq!(feed.total_count, 0);
    }

    #[test]
    fn test_api_error_messages_distinguish_transport_from_application() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::Api("no email on file".to_string()).to_string(),
            "no email on file"
        );
    }
}
