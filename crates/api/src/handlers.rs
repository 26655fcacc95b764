// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each mutating handler follows the same order: authenticate the actor,
//! authorize it, parse and validate input, run the engine, then persist.
//! Any failure before persistence leaves the store untouched.

use atelier::{
    Booking, Command, Negotiation, NewAppointment, TransitionResult, apply, apply_booking,
};
use atelier_audit::{Action, Actor};
use atelier_domain::{
    AppointmentFilter, AppointmentStatus, AppointmentType, ContactDetails, Party, ProposedSlot,
    StatusCounts, format_date, format_time, needs_action, parse_date, parse_time, status_badge,
    validate_not_past, validate_reset_confirmation,
};
use atelier_persistence::{AppointmentQuery, AppointmentRecord, HistoryRecord, SqlitePersistence};
use time::{Date, OffsetDateTime, Time};
use tracing::{debug, info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService, Role};
use crate::capabilities::compute_appointment_capabilities;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AppointmentHistoryResponse, AppointmentInfo, BookAppointmentRequest, BookAppointmentResponse,
    CounterProposalRequest, DressInfo, HistoryEntryInfo, ListAppointmentsResponse,
    OccupancyResponse, OccupiedSlotInfo, ResetAppointmentsRequest, ResetAppointmentsResponse,
    TransitionResponse,
};

/// Statuses that occupy a calendar slot when no explicit set is requested.
pub const DEFAULT_OCCUPYING_STATUSES: [AppointmentStatus; 3] = [
    AppointmentStatus::Confirmed,
    AppointmentStatus::WaitingUser,
    AppointmentStatus::WaitingAdmin,
];

/// Books a new appointment for the calling client.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not a client
/// - Any contact field, date, time, type or message is invalid
/// - The preferred date is before today
/// - The referenced dress does not exist
/// - The insert fails
pub fn book_appointment(
    persistence: &mut SqlitePersistence,
    request: &BookAppointmentRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<BookAppointmentResponse, ApiError> {
    AuthorizationService::authorize_book(authenticated_actor)?;

    let appointment_type: AppointmentType = match non_blank(request.appointment_type.as_deref())
    {
        Some(value) => value.parse().map_err(translate_domain_error)?,
        None => AppointmentType::default(),
    };
    let preferred_date: Option<Date> = non_blank(request.preferred_date.as_deref())
        .map(parse_date)
        .transpose()
        .map_err(translate_domain_error)?;
    if let Some(date) = preferred_date {
        validate_not_past(date, today()).map_err(translate_domain_error)?;
    }
    let preferred_time: Option<Time> = non_blank(request.preferred_time.as_deref())
        .map(parse_time)
        .transpose()
        .map_err(translate_domain_error)?;

    let booking: Booking = Booking {
        contact: ContactDetails::new(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.phone,
        ),
        dress_id: request.dress_id,
        preferred_date,
        preferred_time,
        appointment_type,
        message: request.message.clone(),
    };

    let actor: Actor = authenticated_actor.to_actor();
    let new_appointment: NewAppointment =
        apply_booking(booking, &actor).map_err(translate_core_error)?;

    let appointment_id: i64 = persistence
        .insert_appointment(&new_appointment)
        .map_err(translate_persistence_error)?;

    info!(
        appointment_id,
        user_id = %authenticated_actor.id,
        appointment_type = appointment_type.as_str(),
        "Appointment booked"
    );

    Ok(BookAppointmentResponse {
        appointment_id,
        status: new_appointment.status.as_str().to_string(),
        message: String::from("Appointment request received"),
    })
}

/// Lists appointments for the caller.
///
/// Clients see only their own appointments. Admins see everyone's and also
/// receive dashboard counters computed over the whole book, regardless of
/// the filter.
///
/// # Arguments
///
/// * `filter` - `all`, `waiting` or a status name; absent means `all`
///
/// # Errors
///
/// Returns an error if the filter is unknown or the query fails.
pub fn list_appointments(
    persistence: &mut SqlitePersistence,
    filter: Option<&str>,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListAppointmentsResponse, ApiError> {
    let filter: AppointmentFilter = filter
        .map(str::trim)
        .unwrap_or_default()
        .parse()
        .map_err(translate_domain_error)?;
    let statuses: Option<Vec<AppointmentStatus>> = filter.statuses();

    let mut query: AppointmentQuery<'_> = match authenticated_actor.role {
        Role::Client => AppointmentQuery::owned_by(&authenticated_actor.id),
        Role::Admin => AppointmentQuery::all(),
    };
    if let Some(statuses) = statuses.as_deref() {
        query = query.with_statuses(statuses);
    }

    let records: Vec<AppointmentRecord> = persistence
        .list_appointments(query)
        .map_err(translate_persistence_error)?;

    let counts: Option<StatusCounts> = match authenticated_actor.role {
        Role::Admin => Some(StatusCounts::tally(
            persistence
                .list_appointment_statuses()
                .map_err(translate_persistence_error)?,
        )),
        Role::Client => None,
    };

    debug!(
        actor_id = %authenticated_actor.id,
        count = records.len(),
        "Listed appointments"
    );

    Ok(ListAppointmentsResponse {
        appointments: records
            .iter()
            .map(|record| appointment_info(record, authenticated_actor.role))
            .collect(),
        counts,
    })
}

/// Returns an appointment's history, oldest first.
///
/// # Errors
///
/// Returns an error if the appointment does not exist, a client does not
/// own it, or the query fails.
pub fn get_appointment_history(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AppointmentHistoryResponse, ApiError> {
    let record: AppointmentRecord = persistence
        .get_appointment(appointment_id)
        .map_err(translate_persistence_error)?;
    AuthorizationService::authorize_view(authenticated_actor, &record)?;

    let entries: Vec<HistoryRecord> = persistence
        .get_history(appointment_id)
        .map_err(translate_persistence_error)?;

    Ok(AppointmentHistoryResponse {
        appointment_id,
        entries: entries.iter().map(history_entry_info).collect(),
    })
}

/// Client accepts the atelier's latest proposal.
///
/// # Errors
///
/// Returns an error if the transition is not allowed or cannot be persisted.
pub fn accept_proposal(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<TransitionResponse, ApiError> {
    negotiate(
        persistence,
        appointment_id,
        Command::Accept,
        authenticated_actor,
    )
}

/// Either party proposes a new date, and optionally a time and note.
///
/// # Errors
///
/// Returns an error if the date is missing, malformed or before today, the
/// transition is not allowed, or it cannot be persisted.
pub fn counter_propose(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    request: &CounterProposalRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<TransitionResponse, ApiError> {
    let date: Option<&str> = request.date.as_deref();
    let time: Option<&str> = request.time.as_deref();
    let slot: ProposedSlot =
        ProposedSlot::parse(date, time).map_err(translate_domain_error)?;
    validate_not_past(slot.date(), today()).map_err(translate_domain_error)?;
    let command: Command = Command::CounterPropose {
        slot,
        note: request.note.clone(),
    };
    negotiate(persistence, appointment_id, command, authenticated_actor)
}

/// Either party refuses, cancelling the appointment.
///
/// # Errors
///
/// Returns an error if the transition is not allowed or cannot be persisted.
pub fn refuse_appointment(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<TransitionResponse, ApiError> {
    negotiate(
        persistence,
        appointment_id,
        Command::Refuse,
        authenticated_actor,
    )
}

/// Cancels an appointment.
///
/// A client cancels while the atelier has yet to answer; an admin cancels
/// while the client is deciding or after confirmation.
///
/// # Errors
///
/// Returns an error if the transition is not allowed or cannot be persisted.
pub fn cancel_appointment(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<TransitionResponse, ApiError> {
    negotiate(
        persistence,
        appointment_id,
        Command::Cancel,
        authenticated_actor,
    )
}

/// Admin confirms the appointment at the current date and time.
///
/// # Errors
///
/// Returns an error if the transition is not allowed or cannot be persisted.
pub fn confirm_appointment(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<TransitionResponse, ApiError> {
    negotiate(
        persistence,
        appointment_id,
        Command::Confirm,
        authenticated_actor,
    )
}

/// Deletes every appointment and its history.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, either confirmation does
/// not carry the exact phrase, or the delete fails.
pub fn reset_all_appointments(
    persistence: &mut SqlitePersistence,
    request: &ResetAppointmentsRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ResetAppointmentsResponse, ApiError> {
    AuthorizationService::authorize_admin(authenticated_actor, "reset_all_appointments")?;
    if let Err(err) =
        validate_reset_confirmation(&request.confirmation, &request.final_confirmation)
    {
        warn!(actor_id = %authenticated_actor.id, "Bulk reset not confirmed");
        return Err(translate_domain_error(err));
    }

    let deleted: usize = persistence
        .delete_all_appointments()
        .map_err(translate_persistence_error)?;

    warn!(
        actor_id = %authenticated_actor.id,
        deleted,
        "All appointments deleted"
    );

    Ok(ResetAppointmentsResponse {
        deleted,
        message: format!("Deleted {deleted} appointments"),
    })
}

/// Lists the slots held by appointments in the given statuses.
///
/// Only dates, times and statuses are returned, so clients may call this
/// to see which slots are taken.
///
/// # Arguments
///
/// * `statuses` - Comma-separated status names; absent means confirmed,
///   waiting on the client, or waiting on the atelier
///
/// # Errors
///
/// Returns an error if a status name is unknown or the query fails.
pub fn get_occupancy(
    persistence: &mut SqlitePersistence,
    statuses: Option<&str>,
    authenticated_actor: &AuthenticatedActor,
) -> Result<OccupancyResponse, ApiError> {
    let statuses: Vec<AppointmentStatus> = match non_blank(statuses) {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<AppointmentStatus>, _>>()
            .map_err(translate_domain_error)?,
        None => DEFAULT_OCCUPYING_STATUSES.to_vec(),
    };

    let records: Vec<AppointmentRecord> = persistence
        .list_appointments(AppointmentQuery::all().with_statuses(&statuses))
        .map_err(translate_persistence_error)?;

    debug!(
        actor_id = %authenticated_actor.id,
        count = records.len(),
        "Listed occupied slots"
    );

    Ok(OccupancyResponse {
        slots: records
            .iter()
            .map(|record| OccupiedSlotInfo {
                appointment_id: record.appointment_id,
                preferred_date: record.preferred_date.map(format_date),
                preferred_time: record.preferred_time.map(format_time),
                status: record.status.as_str().to_string(),
            })
            .collect(),
    })
}

/// Loads, authorizes, applies and persists one negotiation step.
fn negotiate(
    persistence: &mut SqlitePersistence,
    appointment_id: i64,
    command: Command,
    authenticated_actor: &AuthenticatedActor,
) -> Result<TransitionResponse, ApiError> {
    let action: Action = command.action();
    let record: AppointmentRecord = persistence
        .get_appointment(appointment_id)
        .map_err(translate_persistence_error)?;
    AuthorizationService::authorize_negotiation(authenticated_actor, &record, action)?;

    let state: Negotiation = record.negotiation();
    let actor: Actor = authenticated_actor.to_actor();
    let result: TransitionResult = apply(&state, command, &actor).map_err(|err| {
        warn!(
            appointment_id,
            action = action.as_str(),
            actor_id = %actor.id,
            error = %err,
            "Transition rejected"
        );
        translate_core_error(err)
    })?;

    let history_id: i64 = persistence
        .persist_transition(&state, &result)
        .map_err(|err| {
            warn!(appointment_id, error = %err, "Transition not persisted");
            translate_persistence_error(err)
        })?;

    info!(
        appointment_id,
        action = action.as_str(),
        actor_id = %actor.id,
        from = state.status.as_str(),
        to = result.new_state.status.as_str(),
        "Transition applied"
    );

    Ok(TransitionResponse {
        appointment_id,
        action: action.as_str().to_string(),
        status: result.new_state.status.as_str().to_string(),
        last_proposal_by: result.new_state.last_proposal_by.as_str().to_string(),
        negotiation_count: result.new_state.negotiation_count,
        history_id,
        message: result.history_entry.message,
    })
}

fn appointment_info(record: &AppointmentRecord, role: Role) -> AppointmentInfo {
    let viewer: Party = role.party();
    AppointmentInfo {
        appointment_id: record.appointment_id,
        user_id: record.user_id.clone(),
        dress: record.dress.as_ref().map(|dress| DressInfo {
            dress_id: dress.dress_id,
            name: dress.name.clone(),
            style: dress.style.clone(),
            price_cents: dress.price_cents,
        }),
        first_name: record.contact.first_name.clone(),
        last_name: record.contact.last_name.clone(),
        email: record.contact.email.clone(),
        phone: record.contact.phone.clone(),
        preferred_date: record.preferred_date.map(format_date),
        preferred_time: record.preferred_time.map(format_time),
        status: record.status.as_str().to_string(),
        badge: status_badge(record.status, viewer).to_string(),
        needs_action: needs_action(record.status, viewer),
        last_proposal_by: record.last_proposal_by.as_str().to_string(),
        negotiation_count: record.negotiation_count,
        message: record.message.clone(),
        created_at: record.created_at.clone(),
        capabilities: compute_appointment_capabilities(record.status, role),
    }
}

fn history_entry_info(entry: &HistoryRecord) -> HistoryEntryInfo {
    HistoryEntryInfo {
        history_id: entry.history_id,
        proposed_by: entry.proposed_by.as_str().to_string(),
        proposed_date: entry.proposed_date.map(format_date),
        proposed_time: entry.proposed_time.map(format_time),
        message: entry.message.clone(),
        created_at: entry.created_at.clone(),
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
