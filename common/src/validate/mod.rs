//! Client-side validation for the donation form.
//!
//! These checks gate submission in the browser only; the server deliberately
//! accepts whatever it is sent and appends it to the spreadsheet as-is. They
//! are UX guardrails, not a security boundary.

use regex::Regex;

use crate::model::donation::DonationRecord;

/// Donation types whose description lines list physical items, and therefore
/// require at least one non-blank line before submission.
const ITEM_DONATION_TYPES: [&str; 2] = ["Merchandise", "Service"];

/// Validates a donation before submission and returns every failed rule as a
/// user-facing message. An empty vector means the form may be submitted.
pub fn validate_donation(record: &DonationRecord) -> Vec<String> {
    let mut errors = Vec::new();

    if record.name.trim().is_empty() {
        errors.push("Donor name is required.".to_string());
    }

    if ITEM_DONATION_TYPES.contains(&record.donation_type.as_str())
        && !has_item_line(&record.item_description)
    {
        errors.push("List at least one donated item (one per line).".to_string());
    }

    if !record.email.trim().is_empty() && !is_valid_email(record.email.trim()) {
        errors.push("Email address does not look valid.".to_string());
    }

    if !record.phone.trim().is_empty() && !is_valid_phone(&record.phone) {
        errors.push("Phone number must contain at least 10 digits.".to_string());
    }

    errors
}

/// At least one line with visible content.
pub fn has_item_line(description: &str) -> bool {
    description.lines().any(|line| !line.trim().is_empty())
}

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}

/// Ten or more digits once separators and punctuation are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DonationRecord {
        DonationRecord {
            name: "Jane Donor".to_string(),
            date: "2026-03-14".to_string(),
            donation_type: "Cash".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_minimal_cash_donation() {
        assert!(validate_donation(&record()).is_empty());
    }

    #[test]
    fn rejects_missing_name() {
        let mut r = record();
        r.name = "   ".to_string();
        let errors = validate_donation(&r);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn merchandise_requires_an_item_line() {
        let mut r = record();
        r.donation_type = "Merchandise".to_string();
        r.item_description = "\n   \n".to_string();
        assert_eq!(validate_donation(&r).len(), 1);

        r.item_description = "\nWinter coats\n".to_string();
        assert!(validate_donation(&r).is_empty());
    }

    #[test]
    fn cash_donation_needs_no_item_lines() {
        let mut r = record();
        r.item_description = String::new();
        assert!(validate_donation(&r).is_empty());
    }

    #[test]
    fn email_is_only_checked_when_present() {
        let mut r = record();
        r.email = String::new();
        assert!(validate_donation(&r).is_empty());

        r.email = "not-an-email".to_string();
        assert_eq!(validate_donation(&r).len(), 1);

        r.email = "donor@example.org".to_string();
        assert!(validate_donation(&r).is_empty());
    }

    #[test]
    fn phone_needs_ten_digits_after_stripping() {
        let mut r = record();
        r.phone = "(650) 254-1450".to_string();
        assert!(validate_donation(&r).is_empty());

        r.phone = "254-1450".to_string();
        assert_eq!(validate_donation(&r).len(), 1);
    }

    #[test]
    fn multiple_failures_are_all_reported() {
        let r = DonationRecord {
            donation_type: "Merchandise".to_string(),
            email: "bad".to_string(),
            phone: "123".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_donation(&r).len(), 4);
    }
}
