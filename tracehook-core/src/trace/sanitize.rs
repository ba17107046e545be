//! Terminal control sequence stripping

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Matches ESC (0x1B) or 8-bit CSI (U+009B) sequences: an optional run of
/// parameter/intermediate bytes followed by one final command byte, plus
/// BEL-terminated OSC strings such as terminal hyperlinks.
const CONTROL_SEQUENCE: &str = concat!(
    r"[\x1b\x{9b}][\[\]()#;?]*",
    r"(?:(?:(?:[a-zA-Z\d]*(?:;[-a-zA-Z\d/#&.:=?%@~_]*)*)?\x07)",
    r"|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PR-TZcf-ntqry=><~]))",
);

fn control_sequence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CONTROL_SEQUENCE).expect("control sequence regex compiles"))
}

/// Remove terminal escape sequences, leaving printable text untouched
///
/// Input without escape sequences is returned unchanged.
pub fn strip_control_sequences(text: &str) -> Cow<'_, str> {
    control_sequence().replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_identity() {
        let inputs = [
            "",
            "plain text",
            "$ cargo build --release\nerror[E0425]: cannot find value `x`",
            "section_start:1700000000:step_script\r\nline\n",
            "brackets [0K and semicolons ;1m without escapes",
            "unicode: déjà vu → ✓",
        ];

        for input in inputs {
            let output = strip_control_sequences(input);
            assert_eq!(output, input);
            assert!(matches!(output, Cow::Borrowed(_)));
        }
    }

    #[test]
    fn test_strips_sgr_colours() {
        let input = "\u{1b}[32;1m$ npm test\u{1b}[0;m";
        let output = strip_control_sequences(input);

        assert_eq!(output, "$ npm test");
        assert!(output.len() < input.len());
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_strips_erase_line() {
        assert_eq!(
            strip_control_sequences("\u{1b}[0Ksection_end:1:build\r\u{1b}[0K"),
            "section_end:1:build\r"
        );
    }

    #[test]
    fn test_strips_eight_bit_csi() {
        let input = "\u{9b}31mred\u{9b}0m";
        let output = strip_control_sequences(input);

        assert_eq!(output, "red");
        assert!(!output.contains('\u{9b}'));
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(
            strip_control_sequences("50%\u{1b}[2K\u{1b}[1G100%"),
            "50%100%"
        );
    }

    #[test]
    fn test_strips_bel_terminated_hyperlink() {
        let input = "\u{1b}]8;;https://example.com\u{7}link\u{1b}]8;;\u{7}";
        assert_eq!(strip_control_sequences(input), "link");
    }
}
