// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::{Date, Month};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidStatus(String::from("archived"));
    assert_eq!(format!("{err}"), "Invalid appointment status: 'archived'");

    let err: DomainError = DomainError::InvalidName {
        field: "first name",
        reason: String::from("too short"),
    };
    assert_eq!(format!("{err}"), "Invalid first name: too short");

    let err: DomainError = DomainError::MissingProposalDate;
    assert_eq!(format!("{err}"), "A counter-proposal requires a date");

    let err: DomainError = DomainError::MessageTooLong {
        length: 1200,
        max: 1000,
    };
    assert_eq!(
        format!("{err}"),
        "Message is 1200 characters long; at most 1000 are accepted"
    );

    let err: DomainError = DomainError::DateInPast {
        date: Date::from_calendar_date(2026, Month::March, 1).unwrap(),
        today: Date::from_calendar_date(2026, Month::March, 2).unwrap(),
    };
    assert_eq!(
        format!("{err}"),
        "Date 2026-03-01 is in the past (today is 2026-03-02)"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::ResetNotConfirmed);
    assert!(err.to_string().contains("Bulk reset"));
}
