// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment mutations.

use atelier::{Negotiation, NewAppointment, TransitionResult};
use atelier_audit::HistoryEntry;
use atelier_domain::{format_date, format_time};
use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use tracing::{debug, info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::{NegotiationChanges, NewAppointmentRow, NewHistoryRow};
use crate::diesel_schema::{appointment_history, appointments};
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;
use crate::queries::get_dress;

fn count_to_column(appointment_id: i64, count: u32) -> Result<i32, PersistenceError> {
    count
        .to_i32()
        .ok_or_else(|| PersistenceError::InvalidStoredValue {
            column: "appointments.negotiation_count",
            value: format!("{count} (appointment {appointment_id})"),
        })
}

/// Inserts a freshly booked appointment.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `appointment` - The validated booking
///
/// # Returns
///
/// The id assigned to the appointment.
///
/// # Errors
///
/// Returns `PersistenceError::DressNotFound` if the referenced dress does
/// not exist, or another error if the insert fails.
pub fn insert_appointment(
    conn: &mut SqliteConnection,
    appointment: &NewAppointment,
) -> Result<i64, PersistenceError> {
    if let Some(dress_id) = appointment.dress_id {
        if get_dress(conn, dress_id)?.is_none() {
            return Err(PersistenceError::DressNotFound(dress_id));
        }
    }

    let created_at: String = now_timestamp()?;
    let row: NewAppointmentRow<'_> = NewAppointmentRow {
        user_id: &appointment.user_id,
        dress_id: appointment.dress_id,
        first_name: &appointment.contact.first_name,
        last_name: &appointment.contact.last_name,
        email: &appointment.contact.email,
        phone: &appointment.contact.phone,
        preferred_date: appointment.preferred_date.map(format_date),
        preferred_time: appointment.preferred_time.map(format_time),
        status: appointment.status.as_str(),
        last_proposal_by: appointment.last_proposal_by.as_str(),
        negotiation_count: count_to_column(0, appointment.negotiation_count)?,
        message: Some(appointment.message.as_str()),
        created_at: &created_at,
    };

    diesel::insert_into(appointments::table)
        .values(&row)
        .execute(conn)?;
    let appointment_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        appointment_id,
        user_id = %appointment.user_id,
        "Inserted appointment"
    );
    Ok(appointment_id)
}

fn insert_history_entry(
    conn: &mut SqliteConnection,
    entry: &HistoryEntry,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    let row: NewHistoryRow<'_> = NewHistoryRow {
        appointment_id: entry.appointment_id,
        proposed_by: entry.proposed_by.as_str(),
        proposed_date: entry.proposed_slot.map(|slot| format_date(slot.date())),
        proposed_time: entry
            .proposed_slot
            .and_then(|slot| slot.time())
            .map(format_time),
        message: &entry.message,
        created_at,
    };

    diesel::insert_into(appointment_history::table)
        .values(&row)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

/// Persists a transition: the appointment update and its history entry.
///
/// The update only applies if the appointment still has the status and
/// negotiation count it was read with. Both writes share one transaction,
/// so either both land or neither does.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `expected` - The state the transition was computed from
/// * `result` - The transition to persist
///
/// # Returns
///
/// The id of the inserted history entry.
///
/// # Errors
///
/// Returns `PersistenceError::ConcurrentModification` if the appointment
/// moved on since it was read, `PersistenceError::AppointmentNotFound` if
/// it no longer exists, or another error if a write fails. Nothing is
/// written in any error case.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    expected: &Negotiation,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let appointment_id: i64 = expected.appointment_id;
    let expected_count: i32 = count_to_column(appointment_id, expected.negotiation_count)?;
    let new_state: &Negotiation = &result.new_state;

    let changes: NegotiationChanges<'_> = NegotiationChanges {
        status: new_state.status.as_str(),
        last_proposal_by: new_state.last_proposal_by.as_str(),
        negotiation_count: count_to_column(appointment_id, new_state.negotiation_count)?,
        preferred_date: new_state.preferred_date.map(format_date),
        preferred_time: new_state.preferred_time.map(format_time),
        message: new_state.message.as_deref(),
    };

    let history_id: i64 = conn.transaction::<_, PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(
            appointments::table
                .filter(appointments::appointment_id.eq(appointment_id))
                .filter(appointments::status.eq(expected.status.as_str()))
                .filter(appointments::negotiation_count.eq(expected_count)),
        )
        .set(&changes)
        .execute(conn)?;

        if updated == 0 {
            let exists: bool = diesel::select(diesel::dsl::exists(
                appointments::table.filter(appointments::appointment_id.eq(appointment_id)),
            ))
            .get_result(conn)?;
            if !exists {
                return Err(PersistenceError::AppointmentNotFound(appointment_id));
            }
            warn!(
                appointment_id,
                expected_status = %expected.status,
                expected_count,
                "Conditional appointment update matched no row"
            );
            return Err(PersistenceError::ConcurrentModification { appointment_id });
        }

        let created_at: String = now_timestamp()?;
        insert_history_entry(conn, &result.history_entry, &created_at)
    })?;

    info!(
        appointment_id,
        history_id,
        action = %result.action,
        from = %expected.status,
        to = %new_state.status,
        negotiation_count = new_state.negotiation_count,
        "Persisted transition"
    );
    Ok(history_id)
}

/// Deletes every history entry and every appointment.
///
/// # Returns
///
/// The number of appointments deleted.
///
/// # Errors
///
/// Returns an error if a delete fails; nothing is deleted in that case.
pub fn delete_all_appointments(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let (history_deleted, appointments_deleted) =
        conn.transaction::<_, PersistenceError, _>(|conn| {
            let history_deleted: usize = diesel::delete(appointment_history::table).execute(conn)?;
            let appointments_deleted: usize = diesel::delete(appointments::table).execute(conn)?;
            Ok((history_deleted, appointments_deleted))
        })?;

    debug!(history_deleted, "Deleted history entries");
    warn!(appointments_deleted, "Deleted all appointments");
    Ok(appointments_deleted)
}
