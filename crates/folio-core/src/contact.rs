//! Contact form mailto composition.
//!
//! The contact form never talks to a server: it hands the user's message to
//! their mail client through a `mailto:` URL. Subject and body are
//! percent-encoded with `encodeURIComponent`-compatible rules so the URL
//! survives every character a form can produce.

use folio_common::{Error, Result};

/// A filled-in contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Reject messages with any blank field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(Error::IncompleteMessage {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Compose the `mailto:` URL addressed to `recipient`.
    ///
    /// Body layout: `Name: {name}\nEmail: {email}\n\nMessage:\n{message}`.
    pub fn mailto(&self, recipient: &str) -> Result<String> {
        self.validate()?;
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&body),
        ))
    }
}

/// Percent-encode a string with `encodeURIComponent` semantics.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) pass through;
/// everything else is encoded byte-wise as uppercase `%XX` over its UTF-8
/// representation.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> ContactMessage {
        ContactMessage::new(
            "Ada Lovelace",
            "ada@example.org",
            "Collaboration inquiry",
            "I would like to discuss a project.",
        )
    }

    #[test]
    fn test_encode_passthrough() {
        assert_eq!(encode_uri_component("abc-XYZ_0.9!~*'()"), "abc-XYZ_0.9!~*'()");
    }

    #[test]
    fn test_encode_space_and_newline() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("a\nb"), "a%0Ab");
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode_uri_component("a&b=c?d"), "a%26b%3Dc%3Fd");
        assert_eq!(encode_uri_component("50%"), "50%25");
    }

    #[test]
    fn test_encode_utf8_multibyte() {
        // U+00FC is 0xC3 0xBC in UTF-8.
        assert_eq!(encode_uri_component("ü"), "%C3%BC");
    }

    #[test]
    fn test_mailto_layout() {
        let url = sample().mailto("owner@example.com").unwrap();
        assert!(url.starts_with("mailto:owner@example.com?subject=Collaboration%20inquiry&body="));
        assert!(url.contains("Name%3A%20Ada%20Lovelace%0A"));
        assert!(url.contains("%0A%0AMessage%3A%0A"));
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut msg = sample();
        msg.subject = "   ".to_string();
        let err = msg.mailto("owner@example.com").unwrap_err();
        assert!(err.to_string().contains("subject"));
    }

    proptest! {
        #[test]
        fn prop_encoded_output_is_url_safe(s in ".*") {
            let encoded = encode_uri_component(&s);
            // Only unreserved characters and %XX escapes remain.
            let mut chars = encoded.chars();
            while let Some(c) = chars.next() {
                if c == '%' {
                    let hi = chars.next().unwrap();
                    let lo = chars.next().unwrap();
                    prop_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
                } else {
                    prop_assert!(
                        c.is_ascii_alphanumeric()
                            || "-_.!~*'()".contains(c),
                        "unexpected character {c:?}"
                    );
                }
            }
        }
    }
}
