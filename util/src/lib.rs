//! Shared helpers for the support-desk workspace: runtime configuration,
//! simulated network latency and validation error formatting.

pub mod config;
pub mod latency;
pub mod validation;
