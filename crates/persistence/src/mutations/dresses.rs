// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dress mutations.
//!
//! Dresses are managed elsewhere; this insert exists for seeding and tests.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewDress, NewDressRow};
use crate::diesel_schema::dresses;
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;

/// Inserts a dress and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_dress(
    conn: &mut SqliteConnection,
    dress: &NewDress,
) -> Result<i64, PersistenceError> {
    let created_at: String = now_timestamp()?;
    let row: NewDressRow<'_> = NewDressRow {
        name: &dress.name,
        style: dress.style.as_deref(),
        price_cents: dress.price_cents,
        created_at: &created_at,
    };

    diesel::insert_into(dresses::table)
        .values(&row)
        .execute(conn)?;
    let dress_id: i64 = conn.get_last_insert_rowid()?;

    info!(dress_id, name = %dress.name, "Inserted dress");
    Ok(dress_id)
}
