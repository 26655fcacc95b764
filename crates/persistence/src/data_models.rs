// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atelier::Negotiation;
use atelier_domain::{AppointmentStatus, ContactDetails, Party, parse_date, parse_time};
use diesel::prelude::*;
use num_traits::ToPrimitive;
use time::{Date, Time};

use crate::diesel_schema::{appointment_history, appointments, dresses};
use crate::error::PersistenceError;

/// A dress as shown next to an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DressSummary {
    pub dress_id: i64,
    pub name: String,
    pub style: Option<String>,
    /// Price in cents.
    pub price_cents: Option<i64>,
}

/// A dress to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDress {
    pub name: String,
    pub style: Option<String>,
    pub price_cents: Option<i64>,
}

/// A persisted appointment with its dress joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRecord {
    pub appointment_id: i64,
    pub user_id: String,
    pub dress_id: Option<i64>,
    pub dress: Option<DressSummary>,
    pub contact: ContactDetails,
    pub preferred_date: Option<Date>,
    pub preferred_time: Option<Time>,
    pub status: AppointmentStatus,
    pub last_proposal_by: Party,
    pub negotiation_count: u32,
    pub message: Option<String>,
    pub created_at: String,
}

impl AppointmentRecord {
    /// Extracts the negotiable state the engine works on.
    #[must_use]
    pub fn negotiation(&self) -> Negotiation {
        Negotiation {
            appointment_id: self.appointment_id,
            status: self.status,
            last_proposal_by: self.last_proposal_by,
            negotiation_count: self.negotiation_count,
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            message: self.message.clone(),
        }
    }
}

/// A persisted history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub history_id: i64,
    pub appointment_id: i64,
    pub proposed_by: Party,
    pub proposed_date: Option<Date>,
    pub proposed_time: Option<Time>,
    pub message: String,
    pub created_at: String,
}

/// Diesel Queryable struct for appointment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AppointmentRow {
    pub appointment_id: i64,
    pub user_id: String,
    pub dress_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub status: String,
    pub last_proposal_by: String,
    pub negotiation_count: i32,
    pub message: Option<String>,
    pub created_at: String,
}

/// Diesel Queryable struct for history rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = appointment_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct HistoryRow {
    pub history_id: i64,
    pub appointment_id: i64,
    pub proposed_by: String,
    pub proposed_date: Option<String>,
    pub proposed_time: Option<String>,
    pub message: String,
    pub created_at: String,
}

/// Diesel Queryable struct for dress rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = dresses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct DressRow {
    pub dress_id: i64,
    pub name: String,
    pub style: Option<String>,
    pub price_cents: Option<i64>,
}

/// Dress columns selected through the appointment left join.
pub(crate) type JoinedDress = (Option<i64>, Option<String>, Option<String>, Option<i64>);

#[derive(Insertable)]
#[diesel(table_name = appointments)]
pub(crate) struct NewAppointmentRow<'a> {
    pub user_id: &'a str,
    pub dress_id: Option<i64>,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub status: &'a str,
    pub last_proposal_by: &'a str,
    pub negotiation_count: i32,
    pub message: Option<&'a str>,
    pub created_at: &'a str,
}

/// The negotiable columns rewritten by a transition.
#[derive(AsChangeset)]
#[diesel(table_name = appointments)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct NegotiationChanges<'a> {
    pub status: &'a str,
    pub last_proposal_by: &'a str,
    pub negotiation_count: i32,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub message: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = appointment_history)]
pub(crate) struct NewHistoryRow<'a> {
    pub appointment_id: i64,
    pub proposed_by: &'a str,
    pub proposed_date: Option<String>,
    pub proposed_time: Option<String>,
    pub message: &'a str,
    pub created_at: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = dresses)]
pub(crate) struct NewDressRow<'a> {
    pub name: &'a str,
    pub style: Option<&'a str>,
    pub price_cents: Option<i64>,
    pub created_at: &'a str,
}

fn invalid(column: &'static str, value: &str) -> PersistenceError {
    PersistenceError::InvalidStoredValue {
        column,
        value: value.to_string(),
    }
}

fn stored_date(
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<Date>, PersistenceError> {
    value
        .map(|v| parse_date(v).map_err(|_| invalid(column, v)))
        .transpose()
}

fn stored_time(
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<Time>, PersistenceError> {
    value
        .map(|v| parse_time(v).map_err(|_| invalid(column, v)))
        .transpose()
}

fn stored_party(column: &'static str, value: &str) -> Result<Party, PersistenceError> {
    value.parse::<Party>().map_err(|_| invalid(column, value))
}

impl AppointmentRow {
    /// Converts a row and its joined dress columns into a record.
    pub(crate) fn into_record(
        self,
        dress: JoinedDress,
    ) -> Result<AppointmentRecord, PersistenceError> {
        let status: AppointmentStatus = self
            .status
            .parse()
            .map_err(|_| invalid("appointments.status", &self.status))?;
        let last_proposal_by: Party =
            stored_party("appointments.last_proposal_by", &self.last_proposal_by)?;
        let negotiation_count: u32 = self.negotiation_count.to_u32().ok_or_else(|| {
            invalid(
                "appointments.negotiation_count",
                &self.negotiation_count.to_string(),
            )
        })?;

        let dress: Option<DressSummary> = match dress {
            (Some(dress_id), Some(name), style, price_cents) => Some(DressSummary {
                dress_id,
                name,
                style,
                price_cents,
            }),
            _ => None,
        };

        Ok(AppointmentRecord {
            appointment_id: self.appointment_id,
            preferred_date: stored_date(
                "appointments.preferred_date",
                self.preferred_date.as_deref(),
            )?,
            preferred_time: stored_time(
                "appointments.preferred_time",
                self.preferred_time.as_deref(),
            )?,
            user_id: self.user_id,
            dress_id: self.dress_id,
            dress,
            contact: ContactDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
            },
            status,
            last_proposal_by,
            negotiation_count,
            message: self.message,
            created_at: self.created_at,
        })
    }
}

impl TryFrom<HistoryRow> for HistoryRecord {
    type Error = PersistenceError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            history_id: row.history_id,
            appointment_id: row.appointment_id,
            proposed_by: stored_party("appointment_history.proposed_by", &row.proposed_by)?,
            proposed_date: stored_date(
                "appointment_history.proposed_date",
                row.proposed_date.as_deref(),
            )?,
            proposed_time: stored_time(
                "appointment_history.proposed_time",
                row.proposed_time.as_deref(),
            )?,
            message: row.message,
            created_at: row.created_at,
        })
    }
}

impl From<DressRow> for DressSummary {
    fn from(row: DressRow) -> Self {
        Self {
            dress_id: row.dress_id,
            name: row.name,
            style: row.style,
            price_cents: row.price_cents,
        }
    }
}
