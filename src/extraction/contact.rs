// src/extraction/contact.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel stored when no phone pattern matches. Kept verbatim from the
/// product copy so downstream consumers can test against it.
pub const PHONE_NOT_FOUND: &str = "No detectado";

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9-.]+").unwrap());

// International-looking numbers: optional +/parenthesis, 1-3 leading digits,
// then 3-4 digit groups separated by space/dot/dash.
static PHONE_INTL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\+?[0-9]{1,3}\)?[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4}").unwrap());

// Standalone run of exactly 8 digits bounded by non-digits.
static PHONE_PLAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{8}\b").unwrap());

/// First email-looking substring in document order, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone number found by an ordered list of strategies; the sentinel
/// [`PHONE_NOT_FOUND`] when none accepts.
pub fn extract_phone(text: &str) -> String {
    const STRATEGIES: [fn(&str) -> Option<String>; 2] =
        [international_number, standalone_digit_run];

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .unwrap_or_else(|| PHONE_NOT_FOUND.to_string())
}

/// Accepts the first international-looking candidate that still holds at
/// least 8 digits once separators are stripped.
fn international_number(text: &str) -> Option<String> {
    PHONE_INTL
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= 8)
        .map(|candidate| candidate.trim().to_string())
}

fn standalone_digit_run(text: &str) -> Option<String> {
    PHONE_PLAIN.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_first_match_in_document_order() {
        let text = "contact: jane.doe@example.co at ext 5";
        assert_eq!(extract_email(text), Some("jane.doe@example.co".to_string()));
    }

    #[test]
    fn email_absent_when_no_pattern() {
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn phone_international_format() {
        let phone = extract_phone("Call +505 8765 4321 now");
        assert_eq!(phone, "+505 8765 4321");
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        assert!(digits >= 8);
    }

    #[test]
    fn phone_standalone_eight_digit_run() {
        assert_eq!(extract_phone("id 85872276 only"), "85872276");
    }

    #[test]
    fn phone_ignores_short_number_groups() {
        // 7 digits total never reaches the acceptance threshold.
        assert_eq!(extract_phone("room 123 4567"), PHONE_NOT_FOUND);
    }

    #[test]
    fn phone_sentinel_when_no_digits() {
        assert_eq!(extract_phone("sin datos de contacto"), PHONE_NOT_FOUND);
    }

    #[test]
    fn extractors_tolerate_empty_input() {
        assert_eq!(extract_email(""), None);
        assert_eq!(extract_phone(""), PHONE_NOT_FOUND);
    }
}
