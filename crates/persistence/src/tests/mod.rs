// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use atelier::{Booking, NewAppointment, apply_booking};
use atelier_audit::Actor;
use atelier_domain::{AppointmentType, ContactDetails, parse_date};

use crate::{AppointmentQuery, NewDress, SqlitePersistence};

pub fn create_test_client(id: &str) -> Actor {
    Actor::client(id)
}

pub fn create_test_admin() -> Actor {
    Actor::admin("staff-1")
}

pub fn create_test_booking(preferred_date: Option<&str>) -> Booking {
    Booking {
        contact: ContactDetails::new("Camille", "Durand", "camille@example.fr", "0612345678"),
        dress_id: None,
        preferred_date: preferred_date.map(|d| parse_date(d).unwrap()),
        preferred_time: None,
        appointment_type: AppointmentType::Consultation,
        message: None,
    }
}

/// Books an appointment for `client` and returns its id.
pub fn book(
    persistence: &mut SqlitePersistence,
    client: &str,
    preferred_date: Option<&str>,
) -> i64 {
    let booking: Booking = create_test_booking(preferred_date);
    let appointment: NewAppointment = apply_booking(booking, &create_test_client(client)).unwrap();
    persistence.insert_appointment(&appointment).unwrap()
}

/// Counts every stored appointment.
pub fn count_all(persistence: &mut SqlitePersistence) -> usize {
    persistence
        .list_appointments(AppointmentQuery::all())
        .unwrap()
        .len()
}

pub fn create_test_dress() -> NewDress {
    NewDress {
        name: String::from("Aurore"),
        style: Some(String::from("A-line")),
        price_cents: Some(125_000),
    }
}
