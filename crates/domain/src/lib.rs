// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod projection;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use projection::{AppointmentFilter, StatusCounts, needs_action, status_badge};
pub use types::{
    AppointmentStatus, AppointmentType, Party, ProposedSlot, format_date, format_time, parse_date,
    parse_time,
};
pub use validation::{
    ContactDetails, MAX_EMAIL_LENGTH, MAX_MESSAGE_LENGTH, RESET_CONFIRMATION_PHRASE,
    normalize_message, validate_contact, validate_email, validate_name, validate_not_past,
    validate_phone, validate_reset_confirmation,
};
