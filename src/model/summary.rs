//! Dashboard Aggregation
//!
//! Pure reductions over the current lead collection. Everything here is
//! recomputed on every read; no aggregate survives a store change.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::lead::Lead;
use super::stage::Stage;

/// Number of entries in the recent-activity view.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Stage counts for the dashboard stat cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub total: usize,
    pub docs_requested: usize,
    pub consult_ready: usize,
    pub scheduled: usize,
}

impl PipelineSummary {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut summary = Self {
            total: leads.len(),
            ..Self::default()
        };
        for lead in leads {
            match lead.stage {
                Stage::DocsRequested => summary.docs_requested += 1,
                Stage::ConsultReady => summary.consult_ready += 1,
                Stage::Scheduled => summary.scheduled += 1,
                _ => {}
            }
        }
        summary
    }
}

/// The most recently touched leads, newest first.
///
/// Leads without a usable last-touch timestamp sort after every lead with
/// one; ties keep their incoming order.
pub fn recent_leads(leads: &[Lead], limit: usize) -> Vec<Lead> {
    let mut sorted = leads.to_vec();
    sorted.sort_by_key(|lead| Reverse(lead.last_touch()));
    sorted.truncate(limit);
    sorted
}

/// Digest stage buckets in pipeline order, unknown stages alphabetically
/// after the known ones.
pub fn ordered_stage_counts(counts: &BTreeMap<String, u64>) -> Vec<(Stage, u64)> {
    let mut entries: Vec<(Stage, u64)> = counts
        .iter()
        .map(|(stage, count)| (Stage::parse(stage), *count))
        .collect();
    entries.sort_by_key(|(stage, _)| {
        (
            stage.position().unwrap_or(usize::MAX),
            stage.as_str().to_string(),
        )
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, stage: Stage, touched: Option<&str>) -> Lead {
        Lead {
            lead_id: id.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: format!("{}@example.com", id),
            phone: "555-0100".to_string(),
            relationship: Some("self".to_string()),
            stage,
            has_consent: false,
            last_touch_iso: touched.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_store_summarizes_to_zero() {
        let summary = PipelineSummary::from_leads(&[]);
        assert_eq!(summary, PipelineSummary::default());
    }

    #[test]
    fn test_counts_stages_of_interest() {
        let leads = vec![
            lead("a", Stage::Inquiry, None),
            lead("b", Stage::DocsRequested, None),
            lead("c", Stage::DocsRequested, None),
            lead("d", Stage::ConsultReady, None),
            lead("e", Stage::Scheduled, None),
            lead("f", Stage::Other("triage_hold".to_string()), None),
        ];

        let summary = PipelineSummary::from_leads(&leads);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.docs_requested, 2);
        assert_eq!(summary.consult_ready, 1);
        assert_eq!(summary.scheduled, 1);
        assert!(summary.docs_requested + summary.consult_ready + summary.scheduled <= summary.total);
    }

    #[test]
    fn test_recent_leads_orders_newest_first_with_nulls_last() {
        let leads = vec![
            lead("old", Stage::Inquiry, Some("2025-08-01T08:00:00")),
            lead("untouched", Stage::Inquiry, None),
            lead("new", Stage::Inquiry, Some("2025-08-05T08:00:00")),
            lead("unparseable", Stage::Inquiry, Some("not-a-date")),
            lead("mid", Stage::Inquiry, Some("2025-08-03T08:00:00")),
        ];

        let recent = recent_leads(&leads, 10);
        let ids: Vec<&str> = recent.iter().map(|l| l.lead_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old", "untouched", "unparseable"]);
    }

    #[test]
    fn test_recent_leads_ties_keep_incoming_order() {
        let leads = vec![
            lead("first", Stage::Inquiry, Some("2025-08-01T08:00:00")),
            lead("second", Stage::Inquiry, Some("2025-08-01T08:00:00")),
        ];

        let recent = recent_leads(&leads, 10);
        assert_eq!(recent[0].lead_id, "first");
        assert_eq!(recent[1].lead_id, "second");
    }

    #[test]
    fn test_recent_leads_truncates_to_limit() {
        let leads: Vec<Lead> = (0..8)
            .map(|i| lead(&format!("l{}", i), Stage::Inquiry, None))
            .collect();
        assert_eq!(recent_leads(&leads, RECENT_ACTIVITY_LIMIT).len(), 5);
    }

    #[test]
    fn test_ordered_stage_counts_follow_pipeline() {
        let mut counts = BTreeMap::new();
        counts.insert("scheduled".to_string(), 1);
        counts.insert("inquiry".to_string(), 4);
        counts.insert("zz_custom".to_string(), 2);
        counts.insert("docs_requested".to_string(), 3);

        let ordered = ordered_stage_counts(&counts);
        let names: Vec<&str> = ordered.iter().map(|(stage, _)| stage.as_str()).collect();
        assert_eq!(names, vec!["inquiry", "docs_requested", "scheduled", "zz_custom"]);
    }
}
