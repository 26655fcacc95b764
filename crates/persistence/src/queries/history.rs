// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Negotiation history queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{HistoryRecord, HistoryRow};
use crate::diesel_schema::appointment_history;
use crate::error::PersistenceError;

/// Retrieves the history of an appointment, oldest first.
///
/// Ties on `created_at` are broken by insertion order. An appointment with
/// no history, or an unknown id, yields an empty list.
///
/// # Errors
///
/// Returns an error if the query fails or a row holds an invalid value.
pub fn get_history(
    conn: &mut SqliteConnection,
    appointment_id: i64,
) -> Result<Vec<HistoryRecord>, PersistenceError> {
    let rows: Vec<HistoryRow> = appointment_history::table
        .filter(appointment_history::appointment_id.eq(appointment_id))
        .order((
            appointment_history::created_at.asc(),
            appointment_history::history_id.asc(),
        ))
        .select(HistoryRow::as_select())
        .load(conn)?;

    debug!(appointment_id, count = rows.len(), "Loaded history");

    rows.into_iter().map(HistoryRecord::try_from).collect()
}
