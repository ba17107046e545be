//! Data Transfer Objects for webhook responses
//!
//! These are the JSON bodies the receiver answers the CI platform with.

pub mod webhook;
