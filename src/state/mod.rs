//! State Management
//!
//! Global application state and the lead mutation operations.

pub mod actions;
pub mod global;

pub use global::{provide_global_state, GlobalState};
