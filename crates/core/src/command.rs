// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atelier_audit::Action;
use atelier_domain::{AppointmentType, ContactDetails, ProposedSlot};
use time::{Date, Time};

/// A negotiation step requested against an existing appointment.
///
/// Commands carry intent only. Whether the step is allowed depends on the
/// current status and on which party issues it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Client accepts the date the atelier proposed.
    Accept,
    /// Propose another date, with an optional time and note.
    CounterPropose {
        /// The proposed date and time.
        slot: ProposedSlot,
        /// Optional note that replaces the appointment message.
        note: Option<String>,
    },
    /// Refuse the appointment or the current proposal.
    Refuse,
    /// Cancel the appointment.
    Cancel,
    /// Confirm the current date.
    Confirm,
}

impl Command {
    /// The history action this command performs.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Accept => Action::Accept,
            Self::CounterPropose { .. } => Action::CounterPropose,
            Self::Refuse => Action::Refuse,
            Self::Cancel => Action::Cancel,
            Self::Confirm => Action::Confirm,
        }
    }
}

/// A client's booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Contact snapshot kept with the appointment.
    pub contact: ContactDetails,
    /// The dress the appointment is about, if any.
    pub dress_id: Option<i64>,
    /// Preferred date.
    pub preferred_date: Option<Date>,
    /// Preferred time of day.
    pub preferred_time: Option<Time>,
    /// Kind of visit.
    pub appointment_type: AppointmentType,
    /// Free-text message from the client.
    pub message: Option<String>,
}
