// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_client;
use crate::{Booking, CoreError, NewAppointment, apply_booking};
use atelier_domain::{AppointmentStatus, AppointmentType, ContactDetails, DomainError, Party};

fn create_test_booking() -> Booking {
    Booking {
        contact: ContactDetails::new("Claire", "Moreau", "claire@example.fr", "0611223344"),
        dress_id: Some(3),
        preferred_date: None,
        preferred_time: None,
        appointment_type: AppointmentType::Fitting,
        message: Some(String::from("I would like to try the ivory dress")),
    }
}

#[test]
fn test_booking_starts_pending_with_zero_count() {
    let appointment: NewAppointment =
        apply_booking(create_test_booking(), &create_test_client()).unwrap();

    assert_eq!(appointment.user_id, "client-42");
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.last_proposal_by, Party::User);
    assert_eq!(appointment.negotiation_count, 0);
    assert_eq!(appointment.dress_id, Some(3));
    assert_eq!(
        appointment.message,
        "[fitting] I would like to try the ivory dress"
    );
}

#[test]
fn test_booking_without_message_records_type() {
    let mut booking: Booking = create_test_booking();
    booking.message = None;
    booking.appointment_type = AppointmentType::Alteration;

    let appointment: NewAppointment = apply_booking(booking, &create_test_client()).unwrap();

    assert_eq!(appointment.message, "Appointment type: alteration");
}

#[test]
fn test_booking_rejects_invalid_phone() {
    let mut booking: Booking = create_test_booking();
    booking.contact.phone = String::from("12345");

    let err: CoreError = apply_booking(booking, &create_test_client()).unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidPhone(_))
    ));
}

#[test]
fn test_booking_rejects_missing_last_name() {
    let mut booking: Booking = create_test_booking();
    booking.contact.last_name = String::new();

    let err: CoreError = apply_booking(booking, &create_test_client()).unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidName {
            field: "last name",
            ..
        })
    ));
}
