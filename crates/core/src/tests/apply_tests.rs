// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    counter, create_test_admin, create_test_client, create_test_negotiation,
};
use crate::{Command, CoreError, Negotiation, RejectionReason, TransitionResult, apply};
use atelier_audit::Action;
use atelier_domain::{AppointmentStatus, DomainError, Party, format_date, format_time};

#[test]
fn test_admin_confirm_from_pending() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::Pending);

    let result: TransitionResult = apply(&state, Command::Confirm, &create_test_admin()).unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::Confirmed);
    assert_eq!(result.new_state.last_proposal_by, Party::Admin);
    assert_eq!(result.new_state.negotiation_count, 0);
    assert_eq!(result.action, Action::Confirm);
    assert_eq!(result.history_entry.proposed_by, Party::Admin);
    assert_eq!(
        result.history_entry.message,
        "Admin confirmed the appointment"
    );
    assert!(!result.history_entry.is_proposal());
}

#[test]
fn test_admin_counter_updates_slot_and_message() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingAdmin);

    let result: TransitionResult = apply(
        &state,
        counter("2026-03-12", Some("15:00"), Some("Afternoon only")),
        &create_test_admin(),
    )
    .unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::WaitingUser);
    assert_eq!(result.new_state.last_proposal_by, Party::Admin);
    assert_eq!(result.new_state.negotiation_count, 1);
    assert_eq!(
        result.new_state.preferred_date.map(format_date).as_deref(),
        Some("2026-03-12")
    );
    assert_eq!(
        result.new_state.preferred_time.map(format_time).as_deref(),
        Some("15:00")
    );
    assert_eq!(result.new_state.message.as_deref(), Some("Afternoon only"));
    assert_eq!(result.history_entry.message, "Afternoon only");
    assert!(result.history_entry.is_proposal());
}

#[test]
fn test_counter_without_note_clears_message_and_uses_default_history_text() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingUser);

    let result: TransitionResult = apply(
        &state,
        counter("2026-03-14", None, Some("   ")),
        &create_test_client(),
    )
    .unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::WaitingAdmin);
    assert_eq!(result.new_state.last_proposal_by, Party::User);
    assert_eq!(result.new_state.message, None);
    assert_eq!(result.new_state.preferred_time, None);
    assert_eq!(result.history_entry.message, "Client proposed a new date");
}

#[test]
fn test_client_accept_increments_count() {
    let mut state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingUser);
    state.negotiation_count = 3;
    state.last_proposal_by = Party::Admin;

    let result: TransitionResult = apply(&state, Command::Accept, &create_test_client()).unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::WaitingAdmin);
    assert_eq!(result.new_state.last_proposal_by, Party::User);
    assert_eq!(result.new_state.negotiation_count, 4);
    assert_eq!(result.new_state.preferred_date, state.preferred_date);
    assert!(result.history_entry.message.contains("accepted"));
}

#[test]
fn test_client_refuse_keeps_last_proposer() {
    let mut state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingUser);
    state.last_proposal_by = Party::Admin;
    state.negotiation_count = 1;

    let result: TransitionResult = apply(&state, Command::Refuse, &create_test_client()).unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::Cancelled);
    assert_eq!(result.new_state.last_proposal_by, Party::Admin);
    assert_eq!(result.new_state.negotiation_count, 1);
    assert_eq!(result.history_entry.proposed_by, Party::User);
}

#[test]
fn test_admin_refuse_sets_admin_as_last_proposer() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::Pending);

    let result: TransitionResult = apply(&state, Command::Refuse, &create_test_admin()).unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::Cancelled);
    assert_eq!(result.new_state.last_proposal_by, Party::Admin);
    assert_eq!(
        result.history_entry.message,
        "Admin refused the appointment"
    );
}

#[test]
fn test_client_cancel_from_waiting_admin() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingAdmin);

    let result: TransitionResult = apply(&state, Command::Cancel, &create_test_client()).unwrap();

    assert_eq!(result.new_state.status, AppointmentStatus::Cancelled);
    assert_eq!(result.new_state.last_proposal_by, Party::User);
    assert_eq!(
        result.history_entry.message,
        "Client cancelled the appointment"
    );
}

#[test]
fn test_admin_override_cancel_messages_depend_on_status() {
    let confirmed: Negotiation = create_test_negotiation(AppointmentStatus::Confirmed);
    let in_progress: Negotiation = create_test_negotiation(AppointmentStatus::WaitingUser);

    let from_confirmed: TransitionResult =
        apply(&confirmed, Command::Cancel, &create_test_admin()).unwrap();
    let from_in_progress: TransitionResult =
        apply(&in_progress, Command::Cancel, &create_test_admin()).unwrap();

    assert_eq!(
        from_confirmed.new_state.status,
        AppointmentStatus::Cancelled
    );
    assert_eq!(
        from_confirmed.history_entry.message,
        "Admin cancelled the confirmed appointment"
    );
    assert_eq!(
        from_in_progress.history_entry.message,
        "Admin cancelled the in-progress appointment"
    );
    assert_eq!(from_in_progress.new_state.last_proposal_by, Party::Admin);
}

#[test]
fn test_confirm_and_refuse_and_cancel_never_change_count() {
    let mut state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingAdmin);
    state.negotiation_count = 5;

    for command in [Command::Confirm, Command::Refuse] {
        let result: TransitionResult = apply(&state, command, &create_test_admin()).unwrap();
        assert_eq!(result.new_state.negotiation_count, 5);
    }
    let result: TransitionResult = apply(&state, Command::Cancel, &create_test_client()).unwrap();
    assert_eq!(result.new_state.negotiation_count, 5);
}

#[test]
fn test_rejected_transition_reports_reason() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingUser);

    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::Confirm, &create_test_admin());

    assert_eq!(
        result,
        Err(CoreError::TransitionRejected {
            action: Action::Confirm,
            status: AppointmentStatus::WaitingUser,
            party: Party::Admin,
            reason: RejectionReason::NotYourTurn,
        })
    );
}

#[test]
fn test_terminal_rejection_reason() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::Cancelled);

    let err: CoreError = apply(&state, Command::Cancel, &create_test_admin()).unwrap_err();

    assert!(matches!(
        err,
        CoreError::TransitionRejected {
            reason: RejectionReason::Terminal,
            ..
        }
    ));
}

#[test]
fn test_admin_cannot_cancel_pending() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::Pending);

    let err: CoreError = apply(&state, Command::Cancel, &create_test_admin()).unwrap_err();

    assert!(matches!(
        err,
        CoreError::TransitionRejected {
            reason: RejectionReason::NotAvailable,
            ..
        }
    ));
}

#[test]
fn test_over_long_note_is_a_domain_violation() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::Pending);
    let note: String = "x".repeat(2000);

    let err: CoreError = apply(
        &state,
        counter("2026-03-12", None, Some(&note)),
        &create_test_admin(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::MessageTooLong { .. })
    ));
}

#[test]
fn test_count_overflow_is_reported() {
    let mut state: Negotiation = create_test_negotiation(AppointmentStatus::WaitingUser);
    state.negotiation_count = u32::MAX;

    let err: CoreError = apply(&state, Command::Accept, &create_test_client()).unwrap_err();

    assert_eq!(
        err,
        CoreError::NegotiationCountOverflow { appointment_id: 1 }
    );
}

#[test]
fn test_apply_does_not_modify_input_state() {
    let state: Negotiation = create_test_negotiation(AppointmentStatus::Pending);
    let before: Negotiation = state.clone();

    let _ = apply(&state, Command::Confirm, &create_test_admin()).unwrap();

    assert_eq!(state, before);
}
