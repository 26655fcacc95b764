// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Negotiation};
use atelier_audit::Actor;
use atelier_domain::{AppointmentStatus, Party, ProposedSlot, parse_date};

pub fn create_test_client() -> Actor {
    Actor::client("client-42")
}

pub fn create_test_admin() -> Actor {
    Actor::admin("staff-1")
}

pub fn create_test_negotiation(status: AppointmentStatus) -> Negotiation {
    Negotiation {
        appointment_id: 1,
        status,
        last_proposal_by: Party::User,
        negotiation_count: 0,
        preferred_date: Some(parse_date("2026-03-10").unwrap()),
        preferred_time: None,
        message: Some(String::from("Appointment type: consultation")),
    }
}

pub fn counter(date: &str, time: Option<&str>, note: Option<&str>) -> Command {
    Command::CounterPropose {
        slot: ProposedSlot::parse(Some(date), time).unwrap(),
        note: note.map(str::to_string),
    }
}
