//! Telephony and email link derivation.
//!
//! Phone numbers are stored in their display form (`+90 544 737 88 07`) and
//! turned into dial URIs by dropping whitespace. Email addresses go into
//! `mailto:` verbatim.

use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_dialable() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^\+?[0-9]{7,15}$"))
}

fn regex_email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
    })
}

/// Display phone number with every whitespace character removed.
pub fn dial_digits(display: &str) -> String {
    display.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `tel:` URI for a display phone number.
///
/// ```rust
/// assert_eq!(
///     roma_site::links::derive_dial_uri("+90 544 737 88 07"),
///     "tel:+905447378807"
/// );
/// ```
pub fn derive_dial_uri(display: &str) -> String {
    format!("tel:{}", dial_digits(display))
}

/// `mailto:` URI for an address, unchanged.
///
/// ```rust
/// assert_eq!(
///     roma_site::links::derive_mail_uri("romaburgerr@gmail.com"),
///     "mailto:romaburgerr@gmail.com"
/// );
/// ```
pub fn derive_mail_uri(address: &str) -> String {
    format!("mailto:{address}")
}

/// Whether the display number reduces to an E.164-shaped dial string.
pub fn is_dialable(display: &str) -> bool {
    regex_dialable().is_match(&dial_digits(display))
}

/// Syntactic check good enough for a `mailto:` link.
pub fn is_valid_email(address: &str) -> bool {
    address.len() <= 254 && regex_email().is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_uri_strips_all_whitespace() {
        assert_eq!(derive_dial_uri("+90 544 737 88 07"), "tel:+905447378807");
        assert_eq!(derive_dial_uri("+90\t535 501\u{a0}59 90"), "tel:+905355015990");
        assert_eq!(derive_dial_uri("0544 154 14 51"), "tel:05441541451");
    }

    #[test]
    fn mail_uri_is_verbatim() {
        assert_eq!(
            derive_mail_uri("romaburgerr@gmail.com"),
            "mailto:romaburgerr@gmail.com"
        );
    }

    #[test]
    fn dialable_numbers() {
        assert!(is_dialable("+90 544 737 88 07"));
        assert!(is_dialable("0544 154 14 51"));
        assert!(!is_dialable("+90 544 ABC 88 07"));
        assert!(!is_dialable("+90-544-737-88-07"));
        assert!(!is_dialable("12 34"));
        assert!(!is_dialable(""));
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("romaburgerr@gmail.com"));
        assert!(is_valid_email("bayi.antalya+web@roma-burger.com.tr"));
        assert!(!is_valid_email("romaburgerr@gmail"));
        assert!(!is_valid_email("roma burger@gmail.com"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email("romaburgerr@@gmail.com"));
        assert!(!is_valid_email("romaburgerr@-gmail.com"));
    }
}
