// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atelier_audit::{Action, HistoryEntry};
use atelier_domain::{AppointmentStatus, ContactDetails, Party};
use time::{Date, Time};

/// The negotiable part of a persisted appointment.
///
/// This is everything a transition reads or writes. Contact details and
/// the dress reference never change after booking and are not carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiation {
    /// The appointment this negotiation belongs to.
    pub appointment_id: i64,
    /// Current status.
    pub status: AppointmentStatus,
    /// Who made the most recent proposal-bearing write.
    pub last_proposal_by: Party,
    /// Number of proposals and acceptances so far.
    pub negotiation_count: u32,
    /// Currently proposed date.
    pub preferred_date: Option<Date>,
    /// Currently proposed time of day.
    pub preferred_time: Option<Time>,
    /// Message attached to the current proposal.
    pub message: Option<String>,
}

/// The outcome of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the transition.
    pub new_state: Negotiation,
    /// The single history entry describing the transition.
    pub history_entry: HistoryEntry,
    /// Which action was performed.
    pub action: Action,
}

/// An appointment ready to be inserted, produced by a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    /// Identity of the client who booked.
    pub user_id: String,
    /// The dress the appointment is about, if any.
    pub dress_id: Option<i64>,
    /// Contact snapshot.
    pub contact: ContactDetails,
    /// Preferred date.
    pub preferred_date: Option<Date>,
    /// Preferred time of day.
    pub preferred_time: Option<Time>,
    /// Initial status, always pending.
    pub status: AppointmentStatus,
    /// Initial proposer, always the client.
    pub last_proposal_by: Party,
    /// Initial count, always zero.
    pub negotiation_count: u32,
    /// Stored message, prefixed with the appointment type.
    pub message: String,
}
