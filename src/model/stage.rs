//! Pipeline Stages
//!
//! The fixed, ordered set of admissions stages and their display semantics.

use serde::{Deserialize, Serialize};

/// A lead's position in the admissions pipeline.
///
/// `Other` carries any unrecognized backend string verbatim, so a stage this
/// build does not know about degrades to a neutral badge instead of a parse
/// error. Serialization round-trips the raw wire string either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    Inquiry,
    DocsRequested,
    DocsReceived,
    ClinicalReview,
    ConsultReady,
    Scheduled,
    Decision,
    Other(String),
}

impl Stage {
    /// Known stages in progression order.
    pub const PIPELINE: [Stage; 7] = [
        Stage::Inquiry,
        Stage::DocsRequested,
        Stage::DocsReceived,
        Stage::ClinicalReview,
        Stage::ConsultReady,
        Stage::Scheduled,
        Stage::Decision,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "inquiry" => Stage::Inquiry,
            "docs_requested" => Stage::DocsRequested,
            "docs_received" => Stage::DocsReceived,
            "clinical_review" => Stage::ClinicalReview,
            "consult_ready" => Stage::ConsultReady,
            "scheduled" => Stage::Scheduled,
            "decision" => Stage::Decision,
            _ => Stage::Other(raw.to_string()),
        }
    }

    /// Wire name of the stage.
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Inquiry => "inquiry",
            Stage::DocsRequested => "docs_requested",
            Stage::DocsReceived => "docs_received",
            Stage::ClinicalReview => "clinical_review",
            Stage::ConsultReady => "consult_ready",
            Stage::Scheduled => "scheduled",
            Stage::Decision => "decision",
            Stage::Other(raw) => raw,
        }
    }

    /// Position in the pipeline, `None` for unrecognized stages.
    pub fn position(&self) -> Option<usize> {
        Self::PIPELINE.iter().position(|stage| stage == self)
    }

    /// Badge label, e.g. "DOCS REQUESTED".
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    /// Lowercase display name, e.g. "docs requested".
    pub fn name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Badge background class for this stage.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Stage::Inquiry => "bg-gray-500",
            Stage::DocsRequested => "bg-blue-500",
            Stage::DocsReceived => "bg-yellow-500",
            Stage::ClinicalReview => "bg-orange-500",
            Stage::ConsultReady => "bg-green-500",
            Stage::Scheduled => "bg-purple-500",
            Stage::Decision => "bg-indigo-500",
            Stage::Other(_) => "bg-gray-500",
        }
    }

    /// Icon shown next to the stage.
    pub fn icon(&self) -> &'static str {
        match self {
            Stage::Inquiry => "👤",
            Stage::DocsRequested => "📄",
            Stage::DocsReceived => "📥",
            Stage::ClinicalReview => "⏱",
            Stage::ConsultReady => "📣",
            Stage::Scheduled => "📅",
            Stage::Decision => "✅",
            Stage::Other(_) => "👤",
        }
    }
}

impl From<String> for Stage {
    fn from(raw: String) -> Self {
        Stage::parse(&raw)
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_stages_round_trip() {
        for stage in Stage::PIPELINE {
            let parsed = Stage::parse(stage.as_str());
            assert_eq!(parsed, stage);
        }
    }

    #[test]
    fn test_pipeline_positions_are_ordered() {
        assert_eq!(Stage::Inquiry.position(), Some(0));
        assert_eq!(Stage::Decision.position(), Some(6));
        assert!(Stage::DocsRequested.position() < Stage::Scheduled.position());
    }

    #[test]
    fn test_unknown_stage_degrades_without_error() {
        let stage = Stage::parse("triage_hold");
        assert_eq!(stage, Stage::Other("triage_hold".to_string()));
        assert_eq!(stage.as_str(), "triage_hold");
        assert_eq!(stage.badge_class(), "bg-gray-500");
        assert_eq!(stage.icon(), "👤");
        assert_eq!(stage.position(), None);
    }

    #[test]
    fn test_unknown_stage_serializes_verbatim() {
        let stage: Stage = serde_json::from_str("\"triage_hold\"").unwrap();
        assert_eq!(serde_json::to_string(&stage).unwrap(), "\"triage_hold\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Stage::DocsRequested.label(), "DOCS REQUESTED");
        assert_eq!(Stage::DocsRequested.name(), "docs requested");
        assert_eq!(Stage::Inquiry.label(), "INQUIRY");
    }
}
