// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the atelier appointment system.
//!
//! Handlers take an authenticated actor, enforce ownership and role rules,
//! translate wire input into engine commands and persist the results. Errors
//! from lower layers are translated explicitly into [`ApiError`].

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

mod auth;
mod capabilities;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use capabilities::{AppointmentCapabilities, Capability, compute_appointment_capabilities};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    DEFAULT_OCCUPYING_STATUSES, accept_proposal, book_appointment, cancel_appointment,
    confirm_appointment, counter_propose, get_appointment_history, get_occupancy,
    list_appointments, refuse_appointment, reset_all_appointments,
};
pub use request_response::{
    AppointmentHistoryResponse, AppointmentInfo, BookAppointmentRequest, BookAppointmentResponse,
    CounterProposalRequest, DressInfo, HistoryEntryInfo, ListAppointmentsResponse,
    OccupancyResponse, OccupiedSlotInfo, ResetAppointmentsRequest, ResetAppointmentsResponse,
    TransitionResponse,
};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
