// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;

/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of any free-text message.
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Phrase an admin must type, twice, to wipe every appointment.
pub const RESET_CONFIRMATION_PHRASE: &str = "DELETE ALL APPOINTMENTS";

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;

/// Contact snapshot captured when a client books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    /// Client first name.
    pub first_name: String,
    /// Client last name.
    pub last_name: String,
    /// Client email address.
    pub email: String,
    /// Client phone number, as typed.
    pub phone: String,
}

impl ContactDetails {
    /// Creates a contact snapshot, trimming surrounding whitespace.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, email: &str, phone: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }
}

/// Validates every field of a contact snapshot.
///
/// # Errors
///
/// Returns the first failing field's error.
pub fn validate_contact(contact: &ContactDetails) -> Result<(), DomainError> {
    validate_name("first name", &contact.first_name)?;
    validate_name("last name", &contact.last_name)?;
    validate_email(&contact.email)?;
    validate_phone(&contact.phone)?;
    Ok(())
}

/// Validates a personal name.
///
/// Names are 2 to 100 characters of letters (including Latin-1 accented
/// letters), spaces, apostrophes and hyphens.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` naming `field`.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), DomainError> {
    let length: usize = value.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(DomainError::InvalidName {
            field,
            reason: format!("must be at least {MIN_NAME_LENGTH} characters"),
        });
    }
    if length > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName {
            field,
            reason: format!("must be at most {MAX_NAME_LENGTH} characters"),
        });
    }
    if let Some(bad) = value.chars().find(|c| !is_name_char(*c)) {
        return Err(DomainError::InvalidName {
            field,
            reason: format!("contains invalid character '{bad}'"),
        });
    }
    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c) || matches!(c, ' ' | '\'' | '-')
}

/// Validates an email address of the form `local@domain.tld`.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` describing the problem.
pub fn validate_email(value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::InvalidEmail(String::from("email is required")));
    }
    if value.len() > MAX_EMAIL_LENGTH {
        return Err(DomainError::InvalidEmail(format!(
            "must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmail(String::from(
            "must not contain whitespace",
        )));
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(DomainError::InvalidEmail(String::from("missing '@'")));
    };
    if local.is_empty() || domain.contains('@') {
        return Err(DomainError::InvalidEmail(String::from(
            "must contain exactly one '@' after a non-empty local part",
        )));
    }

    // The domain needs a dot with something on both sides of it.
    let dotted: bool = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !dotted {
        return Err(DomainError::InvalidEmail(String::from(
            "domain must look like 'example.com'",
        )));
    }
    Ok(())
}

/// Validates a French phone number.
///
/// Spaces, dots and dashes are ignored. Accepted prefixes are `0`, `+33`
/// and `0033`, followed by a non-zero digit and eight more digits.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` describing the problem.
pub fn validate_phone(value: &str) -> Result<(), DomainError> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();
    if cleaned.is_empty() {
        return Err(DomainError::InvalidPhone(String::from(
            "phone number is required",
        )));
    }

    let subscriber: &str = cleaned
        .strip_prefix("+33")
        .or_else(|| cleaned.strip_prefix("0033"))
        .or_else(|| cleaned.strip_prefix('0'))
        .ok_or_else(|| {
            DomainError::InvalidPhone(String::from("must start with 0, +33 or 0033"))
        })?;

    let valid: bool = subscriber.len() == 9
        && subscriber.chars().all(|c| c.is_ascii_digit())
        && !subscriber.starts_with('0');
    if !valid {
        return Err(DomainError::InvalidPhone(String::from(
            "expected a non-zero digit followed by eight digits",
        )));
    }
    Ok(())
}

/// Normalizes an optional free-text message.
///
/// Surrounding whitespace is trimmed and blank messages become `None`.
///
/// # Errors
///
/// Returns `DomainError::MessageTooLong` past the maximum length.
pub fn normalize_message(message: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(trimmed) = message.map(str::trim).filter(|m| !m.is_empty()) else {
        return Ok(None);
    };
    let length: usize = trimmed.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(DomainError::MessageTooLong {
            length,
            max: MAX_MESSAGE_LENGTH,
        });
    }
    Ok(Some(trimmed.to_string()))
}

/// Rejects a requested date that lies before `today`.
///
/// Today itself is accepted.
///
/// # Errors
///
/// Returns `DomainError::DateInPast` if `date` is earlier than `today`.
pub fn validate_not_past(date: Date, today: Date) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::DateInPast { date, today });
    }
    Ok(())
}

/// Checks both bulk reset confirmations.
///
/// Surrounding whitespace is ignored; the phrase itself is case-sensitive.
///
/// # Errors
///
/// Returns `DomainError::ResetNotConfirmed` unless both values match
/// [`RESET_CONFIRMATION_PHRASE`].
pub fn validate_reset_confirmation(first: &str, second: &str) -> Result<(), DomainError> {
    if first.trim() == RESET_CONFIRMATION_PHRASE && second.trim() == RESET_CONFIRMATION_PHRASE {
        Ok(())
    } else {
        Err(DomainError::ResetNotConfirmed)
    }
}
