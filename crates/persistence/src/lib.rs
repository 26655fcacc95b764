// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the atelier appointment system.
//!
//! Appointments, their negotiation history and the dresses they reference
//! live in `SQLite`, accessed through Diesel. Migrations are embedded and
//! applied at startup.
//!
//! ## Guarantees
//!
//! - Foreign keys are enforced and verified when a connection is opened
//! - A transition's appointment update and history insert share one
//!   transaction
//! - The appointment update is conditional on the status and negotiation
//!   count the transition was computed from
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` opens a fresh, isolated in-memory
//! database for each call.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use atelier::{Negotiation, NewAppointment, TransitionResult};
use atelier_domain::AppointmentStatus;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use data_models::{AppointmentRecord, DressSummary, HistoryRecord, NewDress};
pub use error::PersistenceError;
pub use queries::AppointmentQuery;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Type alias kept for callers that name the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for appointments, history and dresses.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so tests never
    /// observe each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_atelier_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Appointments
    // ========================================================================

    /// Inserts a booked appointment and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the referenced dress does not exist or the insert
    /// fails.
    pub fn insert_appointment(
        &mut self,
        appointment: &NewAppointment,
    ) -> Result<i64, PersistenceError> {
        mutations::insert_appointment(&mut self.conn, appointment)
    }

    /// Retrieves one appointment with its dress.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::AppointmentNotFound` if it does not exist.
    pub fn get_appointment(
        &mut self,
        appointment_id: i64,
    ) -> Result<AppointmentRecord, PersistenceError> {
        queries::get_appointment(&mut self.conn, appointment_id)
    }

    /// Lists appointments matching `query`, ordered by preferred date with
    /// undated appointments last.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_appointments(
        &mut self,
        query: AppointmentQuery<'_>,
    ) -> Result<Vec<AppointmentRecord>, PersistenceError> {
        queries::list_appointments(&mut self.conn, query)
    }

    /// Lists the status of every appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_appointment_statuses(
        &mut self,
    ) -> Result<Vec<AppointmentStatus>, PersistenceError> {
        queries::list_appointment_statuses(&mut self.conn)
    }

    /// Persists a transition computed from `expected`.
    ///
    /// # Returns
    ///
    /// The id of the inserted history entry.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConcurrentModification` if the appointment
    /// changed since `expected` was read. Nothing is written on error.
    pub fn persist_transition(
        &mut self,
        expected: &Negotiation,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        mutations::persist_transition(&mut self.conn, expected, result)
    }

    /// Deletes every appointment and history entry.
    ///
    /// # Returns
    ///
    /// The number of appointments deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_all_appointments(&mut self) -> Result<usize, PersistenceError> {
        mutations::delete_all_appointments(&mut self.conn)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Retrieves an appointment's history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_history(
        &mut self,
        appointment_id: i64,
    ) -> Result<Vec<HistoryRecord>, PersistenceError> {
        queries::get_history(&mut self.conn, appointment_id)
    }

    // ========================================================================
    // Dresses
    // ========================================================================

    /// Inserts a dress and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_dress(&mut self, dress: &NewDress) -> Result<i64, PersistenceError> {
        mutations::insert_dress(&mut self.conn, dress)
    }

    /// Retrieves a dress by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_dress(&mut self, dress_id: i64) -> Result<Option<DressSummary>, PersistenceError> {
        queries::get_dress(&mut self.conn, dress_id)
    }
}
