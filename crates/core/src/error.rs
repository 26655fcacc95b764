// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atelier_audit::Action;
use atelier_domain::{AppointmentStatus, DomainError, Party};

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The appointment is confirmed or cancelled.
    Terminal,
    /// The other party is expected to answer first.
    NotYourTurn,
    /// This party never performs this action from this status.
    NotAvailable,
}

impl RejectionReason {
    /// Converts this reason to a short description.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Terminal => "the appointment is already closed",
            Self::NotYourTurn => "the other party must answer first",
            Self::NotAvailable => "this action is not available here",
        }
    }
}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The action is not allowed for this party in this status.
    TransitionRejected {
        /// The attempted action.
        action: Action,
        /// The status the appointment was in.
        status: AppointmentStatus,
        /// The party that attempted it.
        party: Party,
        /// Why it was refused.
        reason: RejectionReason,
    },
    /// The negotiation counter cannot grow any further.
    NegotiationCountOverflow {
        /// The appointment concerned.
        appointment_id: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::TransitionRejected {
                action,
                status,
                party,
                reason,
            } => write!(
                f,
                "Cannot {action} as {party} while appointment is {status}: {}",
                reason.as_str()
            ),
            Self::NegotiationCountOverflow { appointment_id } => write!(
                f,
                "Negotiation count overflow for appointment {appointment_id}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
