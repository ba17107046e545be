//! Core domain types
//!
//! These types describe what the CI platform sends to the receiver and what the
//! receiver derives from it. All of them live for a single webhook invocation.

pub mod event;
pub mod job;
pub mod pipeline;
pub mod report;
