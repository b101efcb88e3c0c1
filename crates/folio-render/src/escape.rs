//! HTML escaping.

/// Escape HTML special characters.
///
/// Applied to every string interpolated into markup, element text and
/// attribute values alike. The five characters cover both contexts.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_script_tag() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // '&' must be escaped before the others or entities double-escape.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    proptest! {
        #[test]
        fn prop_no_raw_specials_in_output(s in ".*") {
            let escaped = escape_html(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }

        #[test]
        fn prop_idempotent_on_clean_input(s in "[a-zA-Z0-9 .,:-]*") {
            // Text with no special characters passes through untouched.
            prop_assert_eq!(escape_html(&s), s);
        }
    }
}
