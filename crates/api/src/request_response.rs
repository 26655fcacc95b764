// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the appointment API.

use atelier_domain::StatusCounts;
use serde::{Deserialize, Serialize};

use crate::capabilities::AppointmentCapabilities;

/// API request to book an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    /// The client's first name.
    pub first_name: String,
    /// The client's last name.
    pub last_name: String,
    /// The client's email address.
    pub email: String,
    /// The client's phone number.
    pub phone: String,
    /// The dress the appointment is about, if any.
    #[serde(default)]
    pub dress_id: Option<i64>,
    /// Preferred date (`YYYY-MM-DD`).
    #[serde(default)]
    pub preferred_date: Option<String>,
    /// Preferred time (`HH:MM`).
    #[serde(default)]
    pub preferred_time: Option<String>,
    /// `consultation`, `fitting`, `alteration` or `other`.
    #[serde(default)]
    pub appointment_type: Option<String>,
    /// Free-text message.
    #[serde(default)]
    pub message: Option<String>,
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    /// The new appointment's id.
    pub appointment_id: i64,
    /// The initial status (`pending`).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// A dress shown alongside an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DressInfo {
    /// The dress id.
    pub dress_id: i64,
    /// The dress name.
    pub name: String,
    /// The dress style.
    pub style: Option<String>,
    /// The price in cents.
    pub price_cents: Option<i64>,
}

/// One appointment as projected for a viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentInfo {
    /// The appointment id.
    pub appointment_id: i64,
    /// The owning client.
    pub user_id: String,
    /// The joined dress, if any.
    pub dress: Option<DressInfo>,
    /// Contact first name.
    pub first_name: String,
    /// Contact last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Currently proposed date.
    pub preferred_date: Option<String>,
    /// Currently proposed time.
    pub preferred_time: Option<String>,
    /// The negotiation status.
    pub status: String,
    /// Badge label for the viewer.
    pub badge: String,
    /// Whether the viewer is expected to act.
    pub needs_action: bool,
    /// `user` or `admin`.
    pub last_proposal_by: String,
    /// Number of proposals and acceptances so far.
    pub negotiation_count: u32,
    /// Message attached to the current proposal.
    pub message: Option<String>,
    /// Booking timestamp.
    pub created_at: String,
    /// Actions the viewer may take now.
    pub capabilities: AppointmentCapabilities,
}

/// API response listing appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAppointmentsResponse {
    /// The appointments, ordered by preferred date with undated ones last.
    pub appointments: Vec<AppointmentInfo>,
    /// Counters over every appointment, for admins only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<StatusCounts>,
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntryInfo {
    /// The entry id.
    pub history_id: i64,
    /// `user` or `admin`.
    pub proposed_by: String,
    /// Proposed date, for proposals.
    pub proposed_date: Option<String>,
    /// Proposed time, for proposals that carry one.
    pub proposed_time: Option<String>,
    /// Description of the action.
    pub message: String,
    /// When the entry was written.
    pub created_at: String,
}

/// API response with an appointment's history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentHistoryResponse {
    /// The appointment id.
    pub appointment_id: i64,
    /// The entries, oldest first.
    pub entries: Vec<HistoryEntryInfo>,
}

/// API request for a counter-proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterProposalRequest {
    /// Proposed date (`YYYY-MM-DD`). Required.
    #[serde(default)]
    pub date: Option<String>,
    /// Proposed time (`HH:MM`).
    #[serde(default)]
    pub time: Option<String>,
    /// Note sent with the proposal.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response after a negotiation transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// The appointment id.
    pub appointment_id: i64,
    /// The action performed.
    pub action: String,
    /// The resulting status.
    pub status: String,
    /// The resulting last proposer.
    pub last_proposal_by: String,
    /// The resulting negotiation count.
    pub negotiation_count: u32,
    /// The id of the history entry written.
    pub history_id: i64,
    /// The history message written.
    pub message: String,
}

/// API request for the bulk reset.
///
/// Both fields must carry the exact confirmation phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetAppointmentsRequest {
    /// First confirmation.
    pub confirmation: String,
    /// Second confirmation.
    pub final_confirmation: String,
}

/// API response for the bulk reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetAppointmentsResponse {
    /// Number of appointments deleted.
    pub deleted: usize,
    /// A success message.
    pub message: String,
}

/// An occupied calendar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedSlotInfo {
    /// The appointment occupying the slot.
    pub appointment_id: i64,
    /// The slot date.
    pub preferred_date: Option<String>,
    /// The slot time.
    pub preferred_time: Option<String>,
    /// The appointment status.
    pub status: String,
}

/// API response for calendar occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyResponse {
    /// The occupied slots, ordered by date.
    pub slots: Vec<OccupiedSlotInfo>,
}
