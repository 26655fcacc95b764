// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `appointments` — Booking inserts, transitions and the bulk reset
//! - `dresses` — Dress inserts
//!
//! Every multi-statement mutation runs inside a single transaction.

pub mod appointments;
pub mod dresses;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::PersistenceError;

pub use appointments::{delete_all_appointments, insert_appointment, persist_transition};
pub use dresses::insert_dress;

/// Current UTC time as a fixed-width, lexically sortable timestamp.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub(crate) fn now_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
        ))
        .map_err(|e| PersistenceError::DatabaseError(format!("Failed to format timestamp: {e}")))
}
