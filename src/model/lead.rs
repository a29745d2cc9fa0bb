//! Lead Records
//!
//! The central entity of the admissions pipeline, plus the creation-form
//! draft. The backend owns persistent truth; the client never sets a stage
//! locally, it only reflects what the last refresh returned.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// A prospective patient record tracked through the admissions pipeline.
///
/// Fields the client does not consume are ignored during deserialization.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Lead {
    pub lead_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// "self" or "caregiver"; tolerated loose since the backend enforces it.
    #[serde(default)]
    pub relationship: Option<String>,
    pub stage: Stage,
    #[serde(default)]
    pub has_consent: bool,
    /// Last-touch timestamp as sent by the backend, if any.
    #[serde(default)]
    pub last_touch_iso: Option<String>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Last-touch instant, if present and parseable.
    pub fn last_touch(&self) -> Option<DateTime<Utc>> {
        self.last_touch_iso.as_deref().and_then(parse_touch_instant)
    }

    /// Short date for list rows, "N/A" when never touched.
    pub fn last_touch_date(&self) -> String {
        self.last_touch()
            .map(|instant| instant.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Full timestamp for detail rows, "N/A" when never touched.
    pub fn last_touch_datetime(&self) -> String {
        self.last_touch()
            .map(|instant| instant.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Parse a backend timestamp. The server emits both RFC 3339 strings and
/// naive `isoformat()` strings without an offset; naive values are taken
/// as UTC.
pub fn parse_touch_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Form state for creating a lead. The server assigns the identifier, the
/// initial stage, and timestamps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            relationship: "self".to_string(),
        }
    }
}

impl LeadDraft {
    /// Required-field check. Format validation is the backend's job.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
            ("Phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} is required", field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rfc3339_timestamp() {
        let instant = parse_touch_instant("2025-08-06T12:30:00+00:00").unwrap();
        assert_eq!(instant.format("%Y-%m-%d %H:%M").to_string(), "2025-08-06 12:30");
    }

    #[test]
    fn test_parses_naive_isoformat_timestamp() {
        let instant = parse_touch_instant("2025-08-06T12:30:00.123456").unwrap();
        assert_eq!(instant.format("%Y-%m-%d %H:%M").to_string(), "2025-08-06 12:30");
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        assert!(parse_touch_instant("yesterday").is_none());
    }

    #[test]
    fn test_deserializes_created_lead() {
        let lead: Lead = serde_json::from_str(
            r#"{
                "lead_id": "L-100",
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "a@x.com",
                "phone": "555-0100",
                "relationship": "self",
                "stage": "inquiry",
                "timezone": "America/Phoenix"
            }"#,
        )
        .unwrap();

        assert_eq!(lead.full_name(), "Ann Lee");
        assert_eq!(lead.stage, Stage::Inquiry);
        assert!(!lead.has_consent);
        assert_eq!(lead.last_touch(), None);
        assert_eq!(lead.last_touch_date(), "N/A");
    }

    #[test]
    fn test_draft_defaults_to_self_relationship() {
        assert_eq!(LeadDraft::default().relationship, "self");
    }

    #[test]
    fn test_draft_requires_contact_fields() {
        let mut draft = LeadDraft {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
            relationship: "self".to_string(),
        };
        assert!(draft.validate().is_ok());

        draft.email = "   ".to_string();
        assert_eq!(draft.validate(), Err("Email is required".to_string()));

        draft.email = "a@x.com".to_string();
        draft.first_name.clear();
        assert_eq!(draft.validate(), Err("First name is required".to_string()));
    }
}
