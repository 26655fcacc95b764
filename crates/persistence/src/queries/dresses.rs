// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dress lookup.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{DressRow, DressSummary};
use crate::diesel_schema::dresses;
use crate::error::PersistenceError;

/// Retrieves a dress by id.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the dress does not exist.
pub fn get_dress(
    conn: &mut SqliteConnection,
    dress_id: i64,
) -> Result<Option<DressSummary>, PersistenceError> {
    let row: Option<DressRow> = dresses::table
        .filter(dresses::dress_id.eq(dress_id))
        .select(DressRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(DressSummary::from))
}
