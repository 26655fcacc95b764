// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side projections of appointment status.
//!
//! Everything here is a pure function of the status and the viewing party.

use crate::error::DomainError;
use crate::types::{AppointmentStatus, Party};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Returns whether `viewer` is the one expected to act on an appointment.
///
/// The atelier acts on `pending` and `waiting_admin`; the client acts on
/// `waiting_user`. Nobody acts on a terminal appointment.
#[must_use]
pub const fn needs_action(status: AppointmentStatus, viewer: Party) -> bool {
    match viewer {
        Party::Admin => status.awaits_admin(),
        Party::User => matches!(status, AppointmentStatus::WaitingUser),
    }
}

/// Short human label shown next to an appointment.
#[must_use]
pub const fn status_badge(status: AppointmentStatus, viewer: Party) -> &'static str {
    match (viewer, status) {
        (Party::User, AppointmentStatus::Pending | AppointmentStatus::WaitingAdmin) => {
            "Awaiting atelier"
        }
        (Party::User, AppointmentStatus::WaitingUser) => "Your turn",
        (Party::Admin, AppointmentStatus::Pending) => "New request",
        (Party::Admin, AppointmentStatus::WaitingAdmin) => "Client replied",
        (Party::Admin, AppointmentStatus::WaitingUser) => "Awaiting client reply",
        (_, AppointmentStatus::Confirmed) => "Confirmed",
        (_, AppointmentStatus::Cancelled) => "Cancelled",
    }
}

/// Admin list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    /// No filtering.
    #[default]
    All,
    /// Appointments the atelier must act on.
    Waiting,
    /// Exactly one status.
    Status(AppointmentStatus),
}

impl AppointmentFilter {
    /// The statuses this filter admits, or `None` for no restriction.
    #[must_use]
    pub fn statuses(&self) -> Option<Vec<AppointmentStatus>> {
        match self {
            Self::All => None,
            Self::Waiting => Some(vec![
                AppointmentStatus::Pending,
                AppointmentStatus::WaitingAdmin,
            ]),
            Self::Status(status) => Some(vec![*status]),
        }
    }
}

impl FromStr for AppointmentFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Self::All),
            "waiting" => Ok(Self::Waiting),
            other => other
                .parse::<AppointmentStatus>()
                .map(Self::Status)
                .map_err(|_| DomainError::InvalidFilter(s.to_string())),
        }
    }
}

/// Dashboard counters for the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Every appointment.
    pub total: usize,
    /// Appointments the atelier must act on.
    pub waiting: usize,
    /// Appointments waiting on the client.
    pub waiting_user: usize,
    /// Confirmed appointments.
    pub confirmed: usize,
    /// Cancelled appointments.
    pub cancelled: usize,
}

impl StatusCounts {
    /// Tallies a set of statuses.
    #[must_use]
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AppointmentStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                counts.total += 1;
                match status {
                    AppointmentStatus::Pending | AppointmentStatus::WaitingAdmin => {
                        counts.waiting += 1;
                    }
                    AppointmentStatus::WaitingUser => counts.waiting_user += 1,
                    AppointmentStatus::Confirmed => counts.confirmed += 1,
                    AppointmentStatus::Cancelled => counts.cancelled += 1,
                }
                counts
            })
    }
}
