// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use atelier_domain::format_date;
use atelier_persistence::SqlitePersistence;
use time::OffsetDateTime;

use crate::{
    AuthenticatedActor, BookAppointmentRequest, BookAppointmentResponse, CounterProposalRequest,
    Role, book_appointment,
};

pub fn setup_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Today's UTC date in wire form.
pub fn today() -> String {
    format_date(OffsetDateTime::now_utc().date())
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("staff-1"), Role::Admin)
}

pub fn create_test_client(id: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(id.to_string(), Role::Client)
}

pub fn create_test_booking_request(preferred_date: Option<&str>) -> BookAppointmentRequest {
    BookAppointmentRequest {
        first_name: String::from("Camille"),
        last_name: String::from("Durand"),
        email: String::from("camille@example.fr"),
        phone: String::from("06 12 34 56 78"),
        dress_id: None,
        preferred_date: preferred_date.map(String::from),
        preferred_time: Some(String::from("14:30")),
        appointment_type: None,
        message: None,
    }
}

pub fn create_counter_request(
    date: &str,
    time: Option<&str>,
    note: Option<&str>,
) -> CounterProposalRequest {
    CounterProposalRequest {
        date: Some(date.to_string()),
        time: time.map(String::from),
        note: note.map(String::from),
    }
}

/// Books an appointment for `client` and returns its id.
pub fn book_for(
    persistence: &mut SqlitePersistence,
    client: &str,
    preferred_date: Option<&str>,
) -> i64 {
    let response: BookAppointmentResponse = book_appointment(
        persistence,
        &create_test_booking_request(preferred_date),
        &create_test_client(client),
    )
    .expect("Booking should succeed");
    response.appointment_id
}
