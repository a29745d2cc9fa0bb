//! Backend Snapshot Schemas
//!
//! Read-only structures for the system-health, KPI, alert, and digest
//! endpoints. Every field is defaulted at the boundary: partial or missing
//! backend data renders as a placeholder, never a fault.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::lead::parse_touch_instant;

/// `GET /api/system/status`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SystemHealth {
    #[serde(default)]
    pub overall_status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub active_alerts_count: u64,
    #[serde(default)]
    pub critical_alerts_count: u64,
    #[serde(default)]
    pub health_checks: HealthChecks,
}

impl SystemHealth {
    pub fn is_healthy(&self) -> bool {
        self.overall_status.as_deref() == Some("healthy")
    }

    /// Status text, "unknown" when the backend left it out.
    pub fn status_label(&self) -> &str {
        self.overall_status.as_deref().unwrap_or("unknown")
    }

    /// Build version, "N/A" when the backend left it out.
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or("N/A")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthChecks {
    #[serde(default)]
    pub database: CheckReport,
    #[serde(default)]
    pub error_rate: CheckReport,
    #[serde(default)]
    pub alerts: CheckReport,
}

/// One named health check. The backend varies the counter field per check,
/// so all counters live here and default to zero.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CheckReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub lead_count: u64,
    #[serde(default)]
    pub recent_errors: u64,
    #[serde(default)]
    pub active_alerts: u64,
}

impl CheckReport {
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Unknown")
    }
}

/// The `kpis` object from `GET /api/kpis`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct KpiSet {
    #[serde(default)]
    pub docs_to_consult_conversion: f64,
    #[serde(default)]
    pub consent_compliance_rate: f64,
    #[serde(default)]
    pub automation_failure_rate: f64,
    #[serde(default)]
    pub median_docs_completion_days: f64,
    #[serde(default)]
    pub consult_overrun_rate: f64,
}

impl KpiSet {
    /// Automation success is reported as its failure complement.
    pub fn automation_success_rate(&self) -> f64 {
        100.0 - self.automation_failure_rate
    }
}

/// One alert from `GET /api/alerts`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub severity: Option<String>,
}

impl Alert {
    pub fn is_critical(&self) -> bool {
        self.severity.as_deref() == Some("critical")
    }

    /// Severity text, "info" when the backend left it out.
    pub fn severity_label(&self) -> &str {
        self.severity.as_deref().unwrap_or("info")
    }

    /// Message text, "(no message)" when the backend left it out.
    pub fn message_label(&self) -> &str {
        if self.message.is_empty() {
            "(no message)"
        } else {
            &self.message
        }
    }

    /// Timestamp for display, "Unknown time" when absent or unparseable.
    pub fn timestamp_label(&self) -> String {
        self.timestamp
            .as_deref()
            .and_then(parse_touch_instant)
            .map(|instant| instant.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_else(|| "Unknown time".to_string())
    }
}

/// `GET /api/digest/daily`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DailyDigest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub lead_counts: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub total_leads: u64,
    #[serde(default)]
    pub recent_activity: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub active_alerts: u64,
    #[serde(default)]
    pub kpis: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub system_health: Option<String>,
}

impl DailyDigest {
    pub fn is_healthy(&self) -> bool {
        self.system_health.as_deref() == Some("healthy")
    }

    /// Health summary text, "Unknown" when the backend left it out.
    pub fn health_label(&self) -> &str {
        self.system_health.as_deref().unwrap_or("Unknown")
    }

    /// Panel subtitle, falling back to a generic one when no date came back.
    pub fn date_label(&self) -> String {
        self.date
            .as_deref()
            .and_then(|raw| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .map(|date| format!("Summary for {}", date.format("%b %d, %Y")))
            .unwrap_or_else(|| "Today's operational overview".to_string())
    }
}

/// Digest KPI display value. Rates and conversions get a percent suffix,
/// matching how the backend names them.
pub fn kpi_display(metric: &str, value: &serde_json::Value) -> String {
    match value.as_f64() {
        Some(number) if metric.contains("rate") || metric.contains("conversion") => {
            format!("{}%", trim_number(number))
        }
        Some(number) => trim_number(number),
        None => value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
    }
}

fn trim_number(number: f64) -> String {
    if number.fract() == 0.0 {
        format!("{}", number as i64)
    } else {
        format!("{:.2}", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_health_snapshot_falls_back() {
        let health: SystemHealth = serde_json::from_str("{}").unwrap();
        assert_eq!(health.status_label(), "unknown");
        assert_eq!(health.version_label(), "N/A");
        assert!(!health.is_healthy());
        assert_eq!(health.health_checks.database.status_label(), "Unknown");
        assert_eq!(health.health_checks.database.lead_count, 0);
    }

    #[test]
    fn test_partial_health_snapshot_parses() {
        let health: SystemHealth = serde_json::from_str(
            r#"{
                "overall_status": "healthy",
                "health_checks": {"database": {"status": "healthy", "lead_count": 12}}
            }"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.health_checks.database.lead_count, 12);
        assert_eq!(health.health_checks.error_rate.status_label(), "Unknown");
    }

    #[test]
    fn test_empty_kpis_default_to_zero() {
        let kpis: KpiSet = serde_json::from_str("{}").unwrap();
        assert_eq!(kpis.docs_to_consult_conversion, 0.0);
        assert_eq!(kpis.automation_success_rate(), 100.0);
    }

    #[test]
    fn test_alert_fallbacks() {
        let alert: Alert = serde_json::from_str("{}").unwrap();
        assert_eq!(alert.message_label(), "(no message)");
        assert_eq!(alert.severity_label(), "info");
        assert_eq!(alert.timestamp_label(), "Unknown time");
        assert!(!alert.is_critical());

        let critical: Alert =
            serde_json::from_str(r#"{"message": "db down", "severity": "critical"}"#).unwrap();
        assert!(critical.is_critical());
    }

    #[test]
    fn test_empty_digest_falls_back() {
        let digest: DailyDigest = serde_json::from_str("{}").unwrap();
        assert!(digest.lead_counts.is_none());
        assert_eq!(digest.total_leads, 0);
        assert_eq!(digest.health_label(), "Unknown");
        assert_eq!(digest.date_label(), "Today's operational overview");
    }

    #[test]
    fn test_digest_date_formats() {
        let digest: DailyDigest = serde_json::from_str(r#"{"date": "2025-08-06"}"#).unwrap();
        assert_eq!(digest.date_label(), "Summary for Aug 06, 2025");
    }

    #[test]
    fn test_kpi_display_suffixes_rates() {
        let value = serde_json::json!(62.5);
        assert_eq!(kpi_display("docs_to_consult_conversion", &value), "62.50%");
        assert_eq!(kpi_display("consent_compliance_rate", &serde_json::json!(100.0)), "100%");
        assert_eq!(kpi_display("median_docs_completion_days", &serde_json::json!(3.0)), "3");
        assert_eq!(kpi_display("system_health", &serde_json::json!("healthy")), "healthy");
    }
}
