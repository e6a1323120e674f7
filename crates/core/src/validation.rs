//! Contact-form field validation.
//!
//! Deterministically classifies a raw (name, phone, email) triple as
//! acceptable or not, producing the normalized form on success. These
//! are the canonical rules for the whole system; the database schema
//! does not re-validate.
//!
//! Error messages are user-facing Ukrainian strings, exposed as
//! constants so each failure reason stays a separately testable
//! condition.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

pub const ERR_NAME_REQUIRED: &str = "Ім'я обов'язкове";
pub const ERR_NAME_TOO_SHORT: &str = "Ім'я повинно містити мінімум 2 символи";
pub const ERR_NAME_TOO_LONG: &str = "Ім'я занадто довге";

pub const ERR_PHONE_REQUIRED: &str = "Телефон обов'язковий";
pub const ERR_PHONE_BAD_CHARS: &str = "Номер телефону містить недопустимі символи";
pub const ERR_PHONE_UA_LENGTH: &str =
    "Номер у форматі +380 повинен містити 9 цифр після коду країни";
pub const ERR_PHONE_INTL_LENGTH: &str = "Невірна довжина міжнародного номера телефону";
pub const ERR_PHONE_LOCAL_LENGTH: &str = "Номер у форматі 0XX повинен містити 10 цифр";
pub const ERR_PHONE_PREFIX: &str = "Номер телефону повинен починатися з + або 0";

pub const ERR_EMAIL_REQUIRED: &str = "Email обов'язковий";
pub const ERR_EMAIL_FORMAT: &str = "Невірний формат email";
pub const ERR_EMAIL_TOO_LONG: &str = "Email занадто довгий";
pub const ERR_EMAIL_CYRILLIC: &str = "Email не може містити кирилицю";
pub const ERR_EMAIL_LOCAL_TOO_LONG: &str = "Локальна частина email занадто довга";

/// Simplified RFC 5322 shape: something@something.something, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Maximum total email length per RFC 5321.
const EMAIL_MAX_LEN: usize = 254;
/// Maximum length of the local part (before the `@`).
const EMAIL_LOCAL_MAX_LEN: usize = 64;

/// Validate and trim an applicant name.
///
/// Accepts 2..=100 characters after trimming. Cyrillic names are fine
/// here; the restriction applies to email only.
pub fn validate_name(raw: Option<&str>) -> Result<String, CoreError> {
    let name = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(ERR_NAME_REQUIRED.into()))?;

    let len = name.chars().count();
    if len < 2 {
        return Err(CoreError::Validation(ERR_NAME_TOO_SHORT.into()));
    }
    if len > 100 {
        return Err(CoreError::Validation(ERR_NAME_TOO_LONG.into()));
    }
    Ok(name.to_string())
}

/// Validate and normalize a phone number.
///
/// Formatting characters (spaces, dashes, parentheses) are stripped
/// first. The cleaned number must be digits with at most one leading
/// `+`, and its length is checked per prefix:
///
/// - `+380…` (Ukrainian country code): exactly 13 characters,
///   i.e. `+380` plus 9 digits;
/// - other `+…` (international): 8..=15 characters;
/// - `0…` (local Ukrainian): exactly 10 characters.
pub fn validate_phone(raw: Option<&str>) -> Result<String, CoreError> {
    let phone = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(ERR_PHONE_REQUIRED.into()))?;

    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    let digits_ok = cleaned
        .char_indices()
        .all(|(i, c)| c.is_ascii_digit() || (c == '+' && i == 0));
    if cleaned.is_empty() || !digits_ok {
        return Err(CoreError::Validation(ERR_PHONE_BAD_CHARS.into()));
    }

    if cleaned.starts_with("+380") {
        if cleaned.len() != 13 {
            return Err(CoreError::Validation(ERR_PHONE_UA_LENGTH.into()));
        }
    } else if cleaned.starts_with('+') {
        if cleaned.len() < 8 || cleaned.len() > 15 {
            return Err(CoreError::Validation(ERR_PHONE_INTL_LENGTH.into()));
        }
    } else if cleaned.starts_with('0') {
        if cleaned.len() != 10 {
            return Err(CoreError::Validation(ERR_PHONE_LOCAL_LENGTH.into()));
        }
    } else {
        return Err(CoreError::Validation(ERR_PHONE_PREFIX.into()));
    }

    Ok(cleaned)
}

/// Validate and normalize an email address.
///
/// Trims and lowercases, then checks the simplified RFC shape, total
/// length, absence of Cyrillic code points, and local-part length.
pub fn validate_email(raw: Option<&str>) -> Result<String, CoreError> {
    let email = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(ERR_EMAIL_REQUIRED.into()))?
        .to_lowercase();

    if !EMAIL_RE.is_match(&email) {
        return Err(CoreError::Validation(ERR_EMAIL_FORMAT.into()));
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(CoreError::Validation(ERR_EMAIL_TOO_LONG.into()));
    }
    if email.chars().any(is_cyrillic) {
        return Err(CoreError::Validation(ERR_EMAIL_CYRILLIC.into()));
    }

    // The regex guarantees at least one `@`.
    let local_len = email.split('@').next().map_or(0, |l| l.chars().count());
    if local_len > EMAIL_LOCAL_MAX_LEN {
        return Err(CoreError::Validation(ERR_EMAIL_LOCAL_TOO_LONG.into()));
    }

    Ok(email)
}

/// Cyrillic block plus the Cyrillic Supplement block.
fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err_msg(result: Result<String, CoreError>) -> String {
        match result {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- name --

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name(Some("  Іван Іванов  ")).unwrap(), "Іван Іванов");
    }

    #[test]
    fn name_missing_or_blank() {
        assert_eq!(err_msg(validate_name(None)), ERR_NAME_REQUIRED);
        assert_eq!(err_msg(validate_name(Some("   "))), ERR_NAME_REQUIRED);
    }

    #[test]
    fn name_length_boundaries() {
        assert_eq!(err_msg(validate_name(Some("І"))), ERR_NAME_TOO_SHORT);
        assert!(validate_name(Some("Ів")).is_ok());

        let max = "а".repeat(100);
        assert!(validate_name(Some(&max)).is_ok());
        let too_long = "а".repeat(101);
        assert_eq!(err_msg(validate_name(Some(&too_long))), ERR_NAME_TOO_LONG);
    }

    // -- phone --

    #[test]
    fn phone_strips_formatting() {
        assert_eq!(
            validate_phone(Some("+380 (50) 123-45-67")).unwrap(),
            "+380501234567"
        );
    }

    #[test]
    fn phone_missing() {
        assert_eq!(err_msg(validate_phone(None)), ERR_PHONE_REQUIRED);
        assert_eq!(err_msg(validate_phone(Some(""))), ERR_PHONE_REQUIRED);
    }

    #[test]
    fn phone_rejects_letters_and_misplaced_plus() {
        assert_eq!(err_msg(validate_phone(Some("+380abc1234"))), ERR_PHONE_BAD_CHARS);
        assert_eq!(err_msg(validate_phone(Some("380+501234567"))), ERR_PHONE_BAD_CHARS);
    }

    #[test]
    fn phone_ua_accepted_iff_13_chars() {
        // +380 plus 9 digits = 13.
        assert!(validate_phone(Some("+380501234567")).is_ok());
        assert_eq!(err_msg(validate_phone(Some("+38050123456"))), ERR_PHONE_UA_LENGTH);
        assert_eq!(
            err_msg(validate_phone(Some("+3805012345678"))),
            ERR_PHONE_UA_LENGTH
        );
    }

    #[test]
    fn phone_international_length_window() {
        // 8..=15 cleaned characters, `+` included.
        assert!(validate_phone(Some("+4912345")).is_ok());
        assert!(validate_phone(Some("+491234567890123")).is_ok());
        assert_eq!(err_msg(validate_phone(Some("+491234"))), ERR_PHONE_INTL_LENGTH);
        assert_eq!(
            err_msg(validate_phone(Some("+4912345678901234"))),
            ERR_PHONE_INTL_LENGTH
        );
    }

    #[test]
    fn phone_local_accepted_iff_10_digits() {
        assert!(validate_phone(Some("0501234567")).is_ok());
        assert_eq!(err_msg(validate_phone(Some("050123456"))), ERR_PHONE_LOCAL_LENGTH);
        assert_eq!(
            err_msg(validate_phone(Some("05012345678"))),
            ERR_PHONE_LOCAL_LENGTH
        );
    }

    #[test]
    fn phone_must_start_with_plus_or_zero() {
        assert_eq!(err_msg(validate_phone(Some("123"))), ERR_PHONE_PREFIX);
        assert_eq!(err_msg(validate_phone(Some("3805012345"))), ERR_PHONE_PREFIX);
    }

    // -- email --

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(
            validate_email(Some("  Ivan@Test.COM ")).unwrap(),
            "ivan@test.com"
        );
    }

    #[test]
    fn email_missing() {
        assert_eq!(err_msg(validate_email(None)), ERR_EMAIL_REQUIRED);
        assert_eq!(err_msg(validate_email(Some("  "))), ERR_EMAIL_REQUIRED);
    }

    #[test]
    fn email_shape_violations() {
        for bad in ["plainaddress", "no@dot", "two@@at.com", "sp ace@test.com", "@test.com"] {
            assert_eq!(err_msg(validate_email(Some(bad))), ERR_EMAIL_FORMAT, "{bad}");
        }
    }

    #[test]
    fn email_total_length_boundary() {
        // 64-char local + domain padding up to exactly 254 chars passes.
        let local = "a".repeat(64);
        let domain_pad = "d".repeat(254 - 64 - 1 - 4);
        let at_limit = format!("{local}@{domain_pad}.com");
        assert_eq!(at_limit.len(), 254);
        assert!(validate_email(Some(&at_limit)).is_ok());

        let over = format!("{local}@x{domain_pad}.com");
        assert_eq!(err_msg(validate_email(Some(&over))), ERR_EMAIL_TOO_LONG);
    }

    #[test]
    fn email_rejects_cyrillic() {
        assert_eq!(
            err_msg(validate_email(Some("іван@test.com"))),
            ERR_EMAIL_CYRILLIC
        );
        assert_eq!(
            err_msg(validate_email(Some("ivan@тест.com"))),
            ERR_EMAIL_CYRILLIC
        );
    }

    #[test]
    fn email_local_part_boundary() {
        let ok = format!("{}@test.com", "a".repeat(64));
        assert!(validate_email(Some(&ok)).is_ok());

        let too_long = format!("{}@test.com", "a".repeat(65));
        assert_eq!(
            err_msg(validate_email(Some(&too_long))),
            ERR_EMAIL_LOCAL_TOO_LONG
        );
    }
}
