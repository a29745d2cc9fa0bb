//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod leads;
pub mod new_lead;
pub mod system_health;

pub use dashboard::Dashboard;
pub use leads::Leads;
pub use new_lead::NewLead;
pub use system_health::SystemHealthPage;
