//! Domain Model
//!
//! Core entities for the admissions pipeline: the stage taxonomy, lead
//! records, backend snapshot schemas, and dashboard aggregation.

pub mod lead;
pub mod snapshot;
pub mod stage;
pub mod summary;

pub use lead::{Lead, LeadDraft};
pub use stage::Stage;
pub use summary::PipelineSummary;
