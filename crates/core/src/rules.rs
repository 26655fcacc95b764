// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The negotiation transition table.
//!
//! | From                         | Party | Action          | To              |
//! |------------------------------|-------|-----------------|-----------------|
//! | `pending`, `waiting_admin`   | admin | confirm         | `confirmed`     |
//! | `pending`, `waiting_admin`   | admin | counter-propose | `waiting_user`  |
//! | `pending`, `waiting_admin`   | admin | refuse          | `cancelled`     |
//! | `waiting_user`               | user  | accept          | `waiting_admin` |
//! | `waiting_user`               | user  | counter-propose | `waiting_admin` |
//! | `waiting_user`               | user  | refuse          | `cancelled`     |
//! | `pending`, `waiting_admin`   | user  | cancel          | `cancelled`     |
//! | `waiting_user`, `confirmed`  | admin | cancel          | `cancelled`     |
//!
//! Everything else is rejected.

use crate::error::{CoreError, RejectionReason};
use atelier_audit::Action;
use atelier_domain::{AppointmentStatus, Party, needs_action};

/// Returns whether `party` may perform `action` on an appointment in `status`.
#[must_use]
pub const fn permits(action: Action, status: AppointmentStatus, party: Party) -> bool {
    use AppointmentStatus::{Confirmed, WaitingUser};

    match (action, party) {
        (Action::Confirm | Action::CounterPropose | Action::Refuse, Party::Admin)
        | (Action::Cancel, Party::User) => status.awaits_admin(),
        (Action::Accept | Action::CounterPropose | Action::Refuse, Party::User) => {
            matches!(status, WaitingUser)
        }
        (Action::Cancel, Party::Admin) => matches!(status, WaitingUser | Confirmed),
        (Action::Accept, Party::Admin) | (Action::Confirm, Party::User) => false,
    }
}

/// Lists the actions `party` may perform on an appointment in `status`.
#[must_use]
pub fn available_actions(status: AppointmentStatus, party: Party) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| permits(*action, status, party))
        .collect()
}

/// Fails with a typed rejection unless the action is permitted.
///
/// # Errors
///
/// Returns `CoreError::TransitionRejected` when the table has no row for
/// this combination.
pub const fn ensure_permitted(
    action: Action,
    status: AppointmentStatus,
    party: Party,
) -> Result<(), CoreError> {
    if permits(action, status, party) {
        return Ok(());
    }

    let reason: RejectionReason = if status.is_terminal() {
        RejectionReason::Terminal
    } else if needs_action(status, party) {
        RejectionReason::NotAvailable
    } else {
        RejectionReason::NotYourTurn
    };

    Err(CoreError::TransitionRejected {
        action,
        status,
        party,
        reason,
    })
}
