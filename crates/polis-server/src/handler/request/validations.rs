//! Request validation utilities.

use jiff::Timestamp;
use validator::ValidationError;

/// Number of digits in a full phone number, country code included.
const PHONE_DIGITS: usize = 11;

pub fn validation_error(code: &'static str, message: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.to_owned().into());
    error
}

/// Normalizes a phone number to `+7XXXXXXXXXX`.
///
/// Every non-digit is dropped first, so `8 (999) 123-45-67` and
/// `+7 999 123 45 67` both normalize to `+79991234567`.
///
/// ```rust
/// use polis_server::handler::request::normalize_phone;
///
/// assert_eq!(normalize_phone("8 (999) 123-45-67").unwrap(), "+79991234567");
/// assert!(normalize_phone("+1 555 123 4567").is_err());
/// ```
pub fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if !digits.starts_with(['7', '8']) {
        return Err(validation_error(
            "phone_prefix",
            "Phone number must start with +7 or 8",
        ));
    }

    if digits.len() != PHONE_DIGITS {
        return Err(validation_error(
            "phone_length",
            "Phone number must contain 11 digits",
        ));
    }

    Ok(format!("+7{}", &digits[1..]))
}

/// `validator` adapter for [`normalize_phone`].
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    normalize_phone(raw).map(drop)
}

/// Rejects periods that end before they start. Open bounds always pass.
pub fn validate_period(
    start: Option<Timestamp>,
    end: Option<Timestamp>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(validation_error(
            "period_order",
            "The insurance period must not end before it starts",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_normalization() {
        assert_eq!(normalize_phone("89991234567").unwrap(), "+79991234567");
        assert_eq!(normalize_phone("79991234567").unwrap(), "+79991234567");
        assert_eq!(normalize_phone("+7 (999) 123-45-67").unwrap(), "+79991234567");
    }

    #[test]
    fn phone_rejections() {
        let error = normalize_phone("+1 999 123 45 67").unwrap_err();
        assert_eq!(error.code, "phone_prefix");

        let error = normalize_phone("8999123456").unwrap_err();
        assert_eq!(error.code, "phone_length");

        let error = normalize_phone("899912345678").unwrap_err();
        assert_eq!(error.code, "phone_length");

        assert!(validate_phone("").is_err());
    }

    #[test]
    fn period_order() {
        let start: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
        let end: Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();

        assert!(validate_period(Some(start), Some(end)).is_ok());
        assert!(validate_period(Some(start), Some(start)).is_ok());
        assert!(validate_period(None, Some(end)).is_ok());
        assert!(validate_period(Some(end), Some(start)).is_err());
    }
}
