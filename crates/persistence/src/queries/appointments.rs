// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment queries.
//!
//! Lists are ordered by preferred date ascending with undated appointments
//! last, then by appointment id.

use atelier_domain::AppointmentStatus;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{AppointmentRecord, AppointmentRow, JoinedDress};
use crate::diesel_schema::{appointments, dresses};
use crate::error::PersistenceError;

/// Restrictions applied when listing appointments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentQuery<'a> {
    /// Only appointments owned by this client. `None` lists everyone's.
    pub owner: Option<&'a str>,
    /// Only appointments in one of these statuses. `None` lists all.
    pub statuses: Option<&'a [AppointmentStatus]>,
}

impl<'a> AppointmentQuery<'a> {
    /// Every appointment.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            owner: None,
            statuses: None,
        }
    }

    /// Appointments owned by `owner`.
    #[must_use]
    pub const fn owned_by(owner: &'a str) -> Self {
        Self {
            owner: Some(owner),
            statuses: None,
        }
    }

    /// Restricts the query to `statuses`.
    #[must_use]
    pub const fn with_statuses(mut self, statuses: &'a [AppointmentStatus]) -> Self {
        self.statuses = Some(statuses);
        self
    }
}

/// Lists appointments with their dress.
///
/// # Errors
///
/// Returns an error if the query fails or a row holds an invalid value.
pub fn list_appointments(
    conn: &mut SqliteConnection,
    query: AppointmentQuery<'_>,
) -> Result<Vec<AppointmentRecord>, PersistenceError> {
    let mut statement = appointments::table
        .left_join(dresses::table)
        .select((
            AppointmentRow::as_select(),
            (
                dresses::dress_id.nullable(),
                dresses::name.nullable(),
                dresses::style.nullable(),
                dresses::price_cents.nullable(),
            ),
        ))
        .order((
            appointments::preferred_date.is_null().asc(),
            appointments::preferred_date.asc(),
            appointments::appointment_id.asc(),
        ))
        .into_boxed();

    if let Some(owner) = query.owner {
        statement = statement.filter(appointments::user_id.eq(owner));
    }
    if let Some(statuses) = query.statuses {
        let values: Vec<&'static str> = statuses.iter().map(AppointmentStatus::as_str).collect();
        statement = statement.filter(appointments::status.eq_any(values));
    }

    let rows: Vec<(AppointmentRow, JoinedDress)> = statement.load(conn)?;
    debug!(
        owner = query.owner,
        count = rows.len(),
        "Loaded appointments"
    );

    rows.into_iter()
        .map(|(row, dress)| row.into_record(dress))
        .collect()
}

/// Retrieves one appointment with its dress.
///
/// # Errors
///
/// Returns `PersistenceError::AppointmentNotFound` if no such appointment
/// exists, or another error if the query fails.
pub fn get_appointment(
    conn: &mut SqliteConnection,
    appointment_id: i64,
) -> Result<AppointmentRecord, PersistenceError> {
    let row: Option<(AppointmentRow, JoinedDress)> = appointments::table
        .left_join(dresses::table)
        .filter(appointments::appointment_id.eq(appointment_id))
        .select((
            AppointmentRow::as_select(),
            (
                dresses::dress_id.nullable(),
                dresses::name.nullable(),
                dresses::style.nullable(),
                dresses::price_cents.nullable(),
            ),
        ))
        .first(conn)
        .optional()?;

    let (row, dress) = row.ok_or(PersistenceError::AppointmentNotFound(appointment_id))?;
    row.into_record(dress)
}

/// Lists the status of every appointment, for dashboard counters.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is invalid.
pub fn list_appointment_statuses(
    conn: &mut SqliteConnection,
) -> Result<Vec<AppointmentStatus>, PersistenceError> {
    let values: Vec<String> = appointments::table
        .select(appointments::status)
        .load::<String>(conn)?;

    values
        .into_iter()
        .map(|value| {
            value
                .parse::<AppointmentStatus>()
                .map_err(|_| PersistenceError::InvalidStoredValue {
                    column: "appointments.status",
                    value,
                })
        })
        .collect()
}
