//! Trace processing
//!
//! Raw job traces are console captures: they carry terminal colour codes and
//! are split into named sections (`prepare_executor`, `get_sources`,
//! `step_script`, `cleanup_file_variables`, ...). Only the step script section
//! is where user commands run, so that is the part worth forwarding.

pub mod sanitize;
pub mod section;

pub use sanitize::strip_control_sequences;
pub use section::{STEP_SCRIPT, extract_step_script};

/// Sanitize a raw trace and isolate its step script section
///
/// Falls back to the whole sanitized trace when no step script section exists.
pub fn excerpt(raw_trace: &str) -> String {
    let clean = strip_control_sequences(raw_trace);
    extract_step_script(&clean).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_strips_then_extracts() {
        let raw = concat!(
            "\u{1b}[0Ksection_start:1700000000:prepare_executor\r\u{1b}[0K\u{1b}[36;1mPreparing\u{1b}[0;m\n",
            "\u{1b}[0Ksection_end:1700000001:prepare_executor\r\u{1b}[0K\n",
            "\u{1b}[0Ksection_start:1700000002:step_script\r\u{1b}[0K\u{1b}[32;1m$ make\u{1b}[0;m\n",
            "\u{1b}[31mError: compile failed\u{1b}[0m\n",
            "\u{1b}[0Ksection_end:1700000003:step_script\r\u{1b}[0K\n",
            "\u{1b}[31;1mERROR: Job failed: exit code 1\u{1b}[0;m\n",
        );

        let excerpt = excerpt(raw);

        assert_eq!(
            excerpt,
            "section_start:1700000002:step_script\r$ make\nError: compile failed\nsection_end:1700000003:step_script"
        );
    }

    #[test]
    fn test_excerpt_without_section_returns_clean_trace() {
        let raw = "\u{1b}[31mfatal: could not read Username\u{1b}[0m\n";
        assert_eq!(excerpt(raw), "fatal: could not read Username\n");
    }
}
