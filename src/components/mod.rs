//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod stat_card;
pub mod stage_badge;
pub mod lead_card;
pub mod lead_form;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use stat_card::StatCard;
pub use stage_badge::StageBadge;
pub use lead_card::LeadCard;
pub use lead_form::LeadForm;
pub use loading::{CardSkeleton, ListSkeleton};
pub use toast::Toast;
