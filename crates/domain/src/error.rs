// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stored or requested appointment status is not one of the known values.
    InvalidStatus(String),
    /// A party identifier is neither `user` nor `admin`.
    InvalidParty(String),
    /// An admin filter value is not recognised.
    InvalidFilter(String),
    /// An appointment type is not recognised.
    InvalidAppointmentType(String),
    /// A first or last name failed validation.
    InvalidName {
        /// Which name field failed.
        field: &'static str,
        /// Why it failed.
        reason: String,
    },
    /// An email address failed validation.
    InvalidEmail(String),
    /// A phone number failed validation.
    InvalidPhone(String),
    /// Failed to parse a calendar date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A counter-proposal was submitted without a date.
    MissingProposalDate,
    /// A booking or proposal date lies before today.
    DateInPast {
        /// The rejected date.
        date: Date,
        /// The current date when the check ran.
        today: Date,
    },
    /// A free-text message exceeds the maximum length.
    MessageTooLong {
        /// Length of the submitted message, in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },
    /// The bulk reset confirmation phrase did not match.
    ResetNotConfirmed,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(value) => write!(f, "Invalid appointment status: '{value}'"),
            Self::InvalidParty(value) => write!(f, "Invalid party: '{value}'"),
            Self::InvalidFilter(value) => write!(f, "Invalid appointment filter: '{value}'"),
            Self::InvalidAppointmentType(value) => {
                write!(f, "Invalid appointment type: '{value}'")
            }
            Self::InvalidName { field, reason } => write!(f, "Invalid {field}: {reason}"),
            Self::InvalidEmail(reason) => write!(f, "Invalid email: {reason}"),
            Self::InvalidPhone(reason) => write!(f, "Invalid phone number: {reason}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::MissingProposalDate => write!(f, "A counter-proposal requires a date"),
            Self::DateInPast { date, today } => {
                write!(f, "Date {date} is in the past (today is {today})")
            }
            Self::MessageTooLong { length, max } => {
                write!(
                    f,
                    "Message is {length} characters long; at most {max} are accepted"
                )
            }
            Self::ResetNotConfirmed => write!(
                f,
                "Bulk reset requires both confirmations to contain the exact phrase"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
