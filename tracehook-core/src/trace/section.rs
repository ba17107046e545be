//! Trace section extraction
//!
//! Sections are delimited by `section_start:<unix time>:<name>` and
//! `section_end:<unix time>:<name>` markers. After sanitizing, the markers
//! appear as plain text.

use std::sync::OnceLock;

use regex::Regex;

/// Section in which the job's own script runs
pub const STEP_SCRIPT: &str = "step_script";

fn step_script_section() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?s)section_start:\d+:{STEP_SCRIPT}\b.*?section_end:\d+:{STEP_SCRIPT}\b"
        ))
        .expect("step script regex compiles")
    })
}

/// Return the first step script section, markers included
///
/// When the trace has no complete step script section the whole input is
/// returned, so a non-empty trace always yields a non-empty excerpt.
pub fn extract_step_script(trace: &str) -> &str {
    step_script_section()
        .find(trace)
        .map(|section| section.as_str())
        .unwrap_or(trace)
}
