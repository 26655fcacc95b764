// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `appointments` — Appointment listing and lookup, with the dress join
//! - `history` — Negotiation history
//! - `dresses` — Dress lookup

pub mod appointments;
pub mod dresses;
pub mod history;

pub use appointments::{
    AppointmentQuery, get_appointment, list_appointment_statuses, list_appointments,
};
pub use dresses::get_dress;
pub use history::get_history;
