// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end negotiation scenarios through the API handlers.

use atelier_domain::{AppointmentStatus, Party, format_date};
use atelier_persistence::{AppointmentRecord, HistoryRecord, SqlitePersistence};

use crate::{
    ApiError, AppointmentHistoryResponse, AuthenticatedActor, CounterProposalRequest,
    TransitionResponse, accept_proposal, cancel_appointment, confirm_appointment, counter_propose,
    get_appointment_history, refuse_appointment,
};

use super::helpers::{
    book_for, create_counter_request, create_test_admin, create_test_client,
    setup_test_persistence, today,
};

#[test]
fn test_scenario_counter_accept_confirm() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let client: AuthenticatedActor = create_test_client("client-1");
    let admin: AuthenticatedActor = create_test_admin();
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));

    let proposed: TransitionResponse = counter_propose(
        &mut persistence,
        id,
        &create_counter_request(
            "2099-05-06",
            Some("10:00"),
            Some("We are closed on the 4th"),
        ),
        &admin,
    )
    .unwrap();
    assert_eq!(proposed.status, "waiting_user");
    assert_eq!(proposed.last_proposal_by, "admin");
    assert_eq!(proposed.negotiation_count, 1);
    assert_eq!(proposed.message, "We are closed on the 4th");

    let accepted: TransitionResponse = accept_proposal(&mut persistence, id, &client).unwrap();
    assert_eq!(accepted.status, "waiting_admin");
    assert_eq!(accepted.last_proposal_by, "user");
    assert_eq!(accepted.negotiation_count, 2);

    let confirmed: TransitionResponse = confirm_appointment(&mut persistence, id, &admin).unwrap();
    assert_eq!(confirmed.status, "confirmed");
    assert_eq!(confirmed.negotiation_count, 2);

    let record: AppointmentRecord = persistence.get_appointment(id).unwrap();
    assert_eq!(record.status, AppointmentStatus::Confirmed);
    assert_eq!(record.last_proposal_by, Party::Admin);
    assert_eq!(record.message.as_deref(), Some("We are closed on the 4th"));

    let history: AppointmentHistoryResponse =
        get_appointment_history(&mut persistence, id, &client).unwrap();
    let messages: Vec<&str> = history.entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "We are closed on the 4th",
            "Client accepted the proposal",
            "Admin confirmed the appointment",
        ]
    );
    assert_eq!(
        history.entries[0].proposed_date.as_deref(),
        Some("2099-05-06")
    );
    assert_eq!(history.entries[0].proposed_time.as_deref(), Some("10:00"));
    assert_eq!(history.entries[1].proposed_date, None);
}

#[test]
fn test_scenario_client_counter_then_admin_refuse() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let client: AuthenticatedActor = create_test_client("client-1");
    let admin: AuthenticatedActor = create_test_admin();
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));

    counter_propose(
        &mut persistence,
        id,
        &create_counter_request("2099-05-06", None, None),
        &admin,
    )
    .unwrap();
    let countered: TransitionResponse = counter_propose(
        &mut persistence,
        id,
        &create_counter_request("2099-05-08", Some("16:00"), None),
        &client,
    )
    .unwrap();
    assert_eq!(countered.status, "waiting_admin");
    assert_eq!(countered.message, "Client proposed a new date");
    assert_eq!(countered.negotiation_count, 2);

    let refused: TransitionResponse = refuse_appointment(&mut persistence, id, &admin).unwrap();
    assert_eq!(refused.status, "cancelled");
    assert_eq!(refused.last_proposal_by, "admin");
    assert_eq!(refused.message, "Admin refused the appointment");
}

#[test]
fn test_scenario_admin_refuses_new_booking() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let client: AuthenticatedActor = create_test_client("client-1");
    let admin: AuthenticatedActor = create_test_admin();
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));

    let refused: TransitionResponse = refuse_appointment(&mut persistence, id, &admin).unwrap();
    assert_eq!(refused.status, "cancelled");
    assert_eq!(refused.negotiation_count, 0);
    assert_eq!(refused.last_proposal_by, "admin");

    let record: AppointmentRecord = persistence.get_appointment(id).unwrap();
    assert_eq!(record.status, AppointmentStatus::Cancelled);
    assert_eq!(record.negotiation_count, 0);

    let history: AppointmentHistoryResponse =
        get_appointment_history(&mut persistence, id, &client).unwrap();
    assert_eq!(history.entries.len(), 1);
    assert_eq!(history.entries[0].proposed_by, "admin");
    assert_eq!(history.entries[0].message, "Admin refused the appointment");
}

#[test]
fn test_scenario_client_cancels_pending_request() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let client: AuthenticatedActor = create_test_client("client-1");
    let id: i64 = book_for(&mut persistence, "client-1", None);

    let cancelled: TransitionResponse = cancel_appointment(&mut persistence, id, &client).unwrap();
    assert_eq!(cancelled.status, "cancelled");
    assert_eq!(cancelled.last_proposal_by, "user");
    assert_eq!(cancelled.negotiation_count, 0);
    assert_eq!(cancelled.message, "Client cancelled the appointment");
}

#[test]
fn test_scenario_admin_override_cancel_after_confirmation() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let admin: AuthenticatedActor = create_test_admin();
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));

    confirm_appointment(&mut persistence, id, &admin).unwrap();
    let cancelled: TransitionResponse = cancel_appointment(&mut persistence, id, &admin).unwrap();
    assert_eq!(cancelled.status, "cancelled");
    assert_eq!(
        cancelled.message,
        "Admin cancelled the confirmed appointment"
    );

    let history: Vec<HistoryRecord> = persistence.get_history(id).unwrap();
    assert_eq!(history.len(), 2);
}

#[test]
fn test_rejected_transition_writes_nothing() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let client: AuthenticatedActor = create_test_client("client-1");
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));
    let before: AppointmentRecord = persistence.get_appointment(id).unwrap();

    let result: Result<TransitionResponse, ApiError> =
        accept_proposal(&mut persistence, id, &client);

    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "negotiation_transition");
        }
        other => panic!("Expected DomainRuleViolation, got {other:?}"),
    }
    assert_eq!(persistence.get_appointment(id).unwrap(), before);
    assert!(persistence.get_history(id).unwrap().is_empty());
}

#[test]
fn test_terminal_appointment_rejects_every_client_action() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let client: AuthenticatedActor = create_test_client("client-1");
    let id: i64 = book_for(&mut persistence, "client-1", None);
    cancel_appointment(&mut persistence, id, &client).unwrap();

    assert!(accept_proposal(&mut persistence, id, &client).is_err());
    assert!(refuse_appointment(&mut persistence, id, &client).is_err());
    assert!(cancel_appointment(&mut persistence, id, &client).is_err());
    assert!(
        counter_propose(
            &mut persistence,
            id,
            &create_counter_request("2099-06-01", None, None),
            &client,
        )
        .is_err()
    );
    assert_eq!(persistence.get_history(id).unwrap().len(), 1);
}

#[test]
fn test_counter_proposal_without_date_is_invalid_input() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let id: i64 = book_for(&mut persistence, "client-1", None);
    let mut request: CounterProposalRequest = create_counter_request("", Some("10:00"), None);
    request.date = None;

    let result: Result<TransitionResponse, ApiError> =
        counter_propose(&mut persistence, id, &request, &create_test_admin());

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "date"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert!(persistence.get_history(id).unwrap().is_empty());
}

#[test]
fn test_unknown_appointment_is_not_found() {
    let mut persistence: SqlitePersistence = setup_test_persistence();

    let result: Result<TransitionResponse, ApiError> =
        confirm_appointment(&mut persistence, 999, &create_test_admin());

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_counter_proposal_in_the_past_is_invalid_input() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));
    let before: AppointmentRecord = persistence.get_appointment(id).unwrap();
    let request: CounterProposalRequest = create_counter_request("2001-01-01", None, None);

    let result: Result<TransitionResponse, ApiError> =
        counter_propose(&mut persistence, id, &request, &create_test_admin());

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "date"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert_eq!(persistence.get_appointment(id).unwrap(), before);
    assert!(persistence.get_history(id).unwrap().is_empty());
}

#[test]
fn test_counter_proposal_for_today_is_accepted() {
    let mut persistence: SqlitePersistence = setup_test_persistence();
    let id: i64 = book_for(&mut persistence, "client-1", Some("2099-05-04"));
    let date: String = today();
    let request: CounterProposalRequest = create_counter_request(&date, None, None);

    let response: TransitionResponse =
        counter_propose(&mut persistence, id, &request, &create_test_admin()).unwrap();

    assert_eq!(response.status, "waiting_user");
    let history: Vec<HistoryRecord> = persistence.get_history(id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].proposed_date.map(format_date), Some(date));
}
