//! Tracehook Core
//!
//! Core types and trace processing for the Tracehook webhook receiver.
//!
//! This crate contains:
//! - Domain types: inbound pipeline events, jobs and the derived error report
//! - DTOs: webhook response payloads
//! - Trace processing: control-sequence stripping and step script extraction

pub mod domain;
pub mod dto;
pub mod trace;
