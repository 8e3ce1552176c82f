// ============================================================================
// VALIDATION - Field checks and text normalization shared by every form
// ============================================================================

use regex::Regex;

lazy_static::lazy_static! {
    // 10-11 digits with a leading zero
    static ref PHONE_RE: Regex = Regex::new(r"^0[0-9]{9,10}$").expect("phone pattern");
    static ref EMAIL_RE: Regex =
        Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9-]+(\.[a-z0-9-]+)*\.[a-z]{2,}$").expect("email pattern");
}

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim and collapse runs of internal whitespace to a single space
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", label))
    } else {
        None
    }
}

pub fn max_len(value: &str, max: usize, label: &str) -> Option<String> {
    if value.chars().count() > max {
        Some(format!("{} must be at most {} characters", label, max))
    } else {
        None
    }
}

pub fn validate_phone(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some("Phone number is required".to_string())
    } else if !is_valid_phone(value) {
        Some("Phone number must start with 0 and have 10-11 digits".to_string())
    } else {
        None
    }
}

pub fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(value) {
        Some("Email address is not valid".to_string())
    } else {
        None
    }
}

/// Empty is fine, anything else must be a valid address
pub fn validate_optional_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        validate_email(value)
    }
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(format!("Password must be at least {} characters", MIN_PASSWORD_LEN))
    } else {
        None
    }
}

/// `None` for blank input, the normalized text otherwise
pub fn optional_text(value: &str) -> Option<String> {
    let normalized = normalize_text(value);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_requires_leading_zero_and_ten_or_eleven_digits() {
        assert!(is_valid_phone("0912345678"));
        assert!(is_valid_phone("09123456789"));
        assert!(!is_valid_phone("091234567"));
        assert!(!is_valid_phone("091234567890"));
        assert!(!is_valid_phone("1912345678"));
        assert!(!is_valid_phone("09123a5678"));
        assert!(!is_valid_phone("+84912345678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_match_is_case_insensitive() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("Nurse.Lan@Clinic.COM.VN"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@clinic.com"));
        assert!(!is_valid_email("lan@.com"));
    }

    #[test]
    fn normalization_trims_collapses_and_is_idempotent() {
        let once = normalize_text("  Nguyen   Van A ");
        assert_eq!(once, "Nguyen Van A");
        assert_eq!(normalize_text(&once), once);
        assert_eq!(normalize_text("\tline\n  break "), "line break");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn field_checks_report_messages() {
        assert!(required(" ", "Name").is_some());
        assert!(required("x", "Name").is_none());
        assert!(validate_phone(" 0912345678 ").is_none());
        assert!(validate_optional_email("").is_none());
        assert!(validate_optional_email("nope").is_some());
        assert!(validate_password("12345").is_some());
        assert!(max_len("abcd", 3, "Title").is_some());
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" a  b "), Some("a b".to_string()));
    }
}
