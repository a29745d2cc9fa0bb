//! API Client
//!
//! HTTP access to the admissions backend REST surface.

pub mod client;

pub use client::*;
