// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{counter, create_test_negotiation};
use crate::{Command, CoreError, Negotiation, TransitionResult, apply, available_actions, permits};
use atelier_audit::{Action, Actor};
use atelier_domain::{AppointmentStatus, Party};

fn command_for(action: Action) -> Command {
    match action {
        Action::Accept => Command::Accept,
        Action::CounterPropose => counter("2026-05-01", Some("09:30"), None),
        Action::Refuse => Command::Refuse,
        Action::Cancel => Command::Cancel,
        Action::Confirm => Command::Confirm,
    }
}

fn actor_for(party: Party) -> Actor {
    match party {
        Party::User => Actor::client("client-42"),
        Party::Admin => Actor::admin("staff-1"),
    }
}

#[test]
fn test_apply_agrees_with_table_for_every_combination() {
    for status in AppointmentStatus::ALL {
        for party in [Party::User, Party::Admin] {
            for action in Action::ALL {
                let state: Negotiation = create_test_negotiation(status);
                let result: Result<TransitionResult, CoreError> =
                    apply(&state, command_for(action), &actor_for(party));
                assert_eq!(
                    result.is_ok(),
                    permits(action, status, party),
                    "{action} by {party} from {status}"
                );
            }
        }
    }
}

#[test]
fn test_every_success_keeps_status_in_closed_set_and_count_monotonic() {
    for status in AppointmentStatus::ALL {
        for party in [Party::User, Party::Admin] {
            for action in available_actions(status, party) {
                let state: Negotiation = create_test_negotiation(status);
                let result: TransitionResult =
                    apply(&state, command_for(action), &actor_for(party)).unwrap();
                assert!(AppointmentStatus::ALL.contains(&result.new_state.status));
                assert!(result.new_state.negotiation_count >= state.negotiation_count);
                assert_eq!(result.history_entry.proposed_by, party);
                assert_eq!(result.history_entry.appointment_id, state.appointment_id);
            }
        }
    }
}

#[test]
fn test_history_proposer_matches_last_proposal_by_for_proposals() {
    for status in AppointmentStatus::ALL {
        for party in [Party::User, Party::Admin] {
            for action in available_actions(status, party) {
                let state: Negotiation = create_test_negotiation(status);
                let result: TransitionResult =
                    apply(&state, command_for(action), &actor_for(party)).unwrap();
                if matches!(action, Action::CounterPropose | Action::Accept) {
                    assert_eq!(result.new_state.last_proposal_by, party);
                }
            }
        }
    }
}

#[test]
fn test_cancelled_is_fully_terminal() {
    for party in [Party::User, Party::Admin] {
        assert!(available_actions(AppointmentStatus::Cancelled, party).is_empty());
    }
}

#[test]
fn test_confirmed_only_allows_admin_override_cancel() {
    assert!(available_actions(AppointmentStatus::Confirmed, Party::User).is_empty());
    assert_eq!(
        available_actions(AppointmentStatus::Confirmed, Party::Admin),
        vec![Action::Cancel]
    );
}

#[test]
fn test_available_actions_per_view() {
    assert_eq!(
        available_actions(AppointmentStatus::Pending, Party::Admin),
        vec![Action::CounterPropose, Action::Refuse, Action::Confirm]
    );
    assert_eq!(
        available_actions(AppointmentStatus::Pending, Party::User),
        vec![Action::Cancel]
    );
    assert_eq!(
        available_actions(AppointmentStatus::WaitingUser, Party::User),
        vec![Action::Accept, Action::CounterPropose, Action::Refuse]
    );
    assert_eq!(
        available_actions(AppointmentStatus::WaitingUser, Party::Admin),
        vec![Action::Cancel]
    );
}
