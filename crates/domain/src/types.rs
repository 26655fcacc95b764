// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

/// Wire and storage format of a calendar date.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Wire and storage format of a time of day.
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Negotiation status of an appointment.
///
/// `Confirmed` and `Cancelled` are terminal. The only way out of
/// `Confirmed` is the admin override cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Freshly booked, nobody at the atelier has answered yet.
    Pending,
    /// The client answered; the atelier must act.
    WaitingAdmin,
    /// The atelier answered; the client must act.
    WaitingUser,
    /// Agreed date. Terminal.
    Confirmed,
    /// Refused or cancelled by either side. Terminal.
    Cancelled,
}

impl AppointmentStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::WaitingAdmin,
        Self::WaitingUser,
        Self::Confirmed,
        Self::Cancelled,
    ];

    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::WaitingAdmin => "waiting_admin",
            Self::WaitingUser => "waiting_user",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether no regular transition leaves this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Cancelled)
    }

    /// Returns whether the atelier is expected to answer next.
    #[must_use]
    pub const fn awaits_admin(&self) -> bool {
        matches!(self, Self::Pending | Self::WaitingAdmin)
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "waiting_admin" => Ok(Self::WaitingAdmin),
            "waiting_user" => Ok(Self::WaitingUser),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One side of a negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    /// The client who booked the appointment.
    User,
    /// Atelier staff.
    Admin,
}

impl Party {
    /// Converts this party to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Party {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidParty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of visit requested at booking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    /// General consultation.
    #[default]
    Consultation,
    /// Trying on a dress.
    Fitting,
    /// Alterations on an existing garment.
    Alteration,
    /// Anything else.
    Other,
}

impl AppointmentType {
    /// Converts this type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consultation => "consultation",
            Self::Fitting => "fitting",
            Self::Alteration => "alteration",
            Self::Other => "other",
        }
    }

    /// Builds the stored appointment message for a booking of this type.
    ///
    /// A client message is prefixed with the type in brackets; without one
    /// the type alone is recorded.
    #[must_use]
    pub fn booking_message(&self, message: Option<&str>) -> String {
        message.map_or_else(
            || format!("Appointment type: {}", self.as_str()),
            |text| format!("[{}] {text}", self.as_str()),
        )
    }
}

impl FromStr for AppointmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consultation" => Ok(Self::Consultation),
            "fitting" => Ok(Self::Fitting),
            "alteration" => Ok(Self::Alteration),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidAppointmentType(s.to_string())),
        }
    }
}

/// A proposed date with an optional time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProposedSlot {
    date: Date,
    time: Option<Time>,
}

impl ProposedSlot {
    /// Creates a new slot.
    #[must_use]
    pub const fn new(date: Date, time: Option<Time>) -> Self {
        Self { date, time }
    }

    /// Parses a slot from `YYYY-MM-DD` and optional `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is missing or either value is malformed.
    pub fn parse(date: Option<&str>, time: Option<&str>) -> Result<Self, DomainError> {
        let date: &str = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(DomainError::MissingProposalDate)?;
        let date: Date = parse_date(date)?;
        let time: Option<Time> = time
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(parse_time)
            .transpose()?;
        Ok(Self { date, time })
    }

    /// Returns the date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the time of day, if one was given.
    #[must_use]
    pub const fn time(&self) -> Option<Time> {
        self.time
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns an error if the string is not a valid 24-hour time.
pub fn parse_time(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, TIME_FORMAT).map_err(|e| DomainError::TimeParseError {
        time_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_time(time: Time) -> String {
    time.format(TIME_FORMAT)
        .unwrap_or_else(|_| format!("{:02}:{:02}", time.hour(), time.minute()))
}
