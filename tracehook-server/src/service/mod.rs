//! Service Module
//!
//! Business logic layer for the webhook receiver.

pub mod webhook;

// Re-export for convenience
pub use webhook as webhook_service;
