// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routes and handlers.
//!
//! Handlers hold the persistence lock for the whole validate, transition and
//! persist sequence of a request.

use atelier_api::{
    AppointmentHistoryResponse, BookAppointmentRequest, BookAppointmentResponse,
    CounterProposalRequest, ListAppointmentsResponse, OccupancyResponse, ResetAppointmentsRequest,
    ResetAppointmentsResponse, TransitionResponse, accept_proposal, book_appointment,
    cancel_appointment, confirm_appointment, counter_propose, get_appointment_history,
    get_occupancy, list_appointments, refuse_appointment, reset_all_appointments,
};
use atelier_persistence::SqlitePersistence;
use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::HttpError;
use crate::session::SessionActor;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single persistence connection.
    pub persistence: Arc<Mutex<SqlitePersistence>>,
}

impl AppState {
    /// Wraps a persistence adapter for sharing between handlers.
    pub fn new(persistence: SqlitePersistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }
}

/// Query parameters for `GET /appointments`.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    filter: Option<String>,
}

/// Query parameters for `GET /appointments/occupancy`.
#[derive(Debug, Default, Deserialize)]
struct OccupancyQuery {
    status: Option<String>,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers.
    pub status: String,
}

/// Builds the application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/appointments", post(handle_book).get(handle_list))
        .route("/appointments/occupancy", get(handle_occupancy))
        .route("/appointments/reset", post(handle_reset))
        .route("/appointments/{id}/history", get(handle_history))
        .route("/appointments/{id}/accept", post(handle_accept))
        .route("/appointments/{id}/counter", post(handle_counter))
        .route("/appointments/{id}/refuse", post(handle_refuse))
        .route("/appointments/{id}/cancel", post(handle_cancel))
        .route("/appointments/{id}/confirm", post(handle_confirm))
        .with_state(app_state)
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/appointments`.
async fn handle_book(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(req): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookAppointmentResponse>), HttpError> {
    info!(actor_id = %actor.id, "Handling book_appointment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BookAppointmentResponse = book_appointment(&mut persistence, &req, &actor)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/appointments`.
async fn handle_list(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListAppointmentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListAppointmentsResponse =
        list_appointments(&mut persistence, query.filter.as_deref(), &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/appointments/occupancy`.
async fn handle_occupancy(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Query(query): Query<OccupancyQuery>,
) -> Result<Json<OccupancyResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: OccupancyResponse =
        get_occupancy(&mut persistence, query.status.as_deref(), &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/appointments/{id}/history`.
async fn handle_history(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(appointment_id): Path<i64>,
) -> Result<Json<AppointmentHistoryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AppointmentHistoryResponse =
        get_appointment_history(&mut persistence, appointment_id, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/appointments/{id}/accept`.
async fn handle_accept(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(appointment_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(actor_id = %actor.id, appointment_id, "Handling accept request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(accept_proposal(
        &mut persistence,
        appointment_id,
        &actor,
    )?))
}

/// Handler for POST `/appointments/{id}/counter`.
async fn handle_counter(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(appointment_id): Path<i64>,
    Json(req): Json<CounterProposalRequest>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        appointment_id,
        date = ?req.date,
        "Handling counter-proposal request"
    );
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(counter_propose(
        &mut persistence,
        appointment_id,
        &req,
        &actor,
    )?))
}

/// Handler for POST `/appointments/{id}/refuse`.
async fn handle_refuse(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(appointment_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(actor_id = %actor.id, appointment_id, "Handling refuse request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(refuse_appointment(
        &mut persistence,
        appointment_id,
        &actor,
    )?))
}

/// Handler for POST `/appointments/{id}/cancel`.
async fn handle_cancel(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(appointment_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(actor_id = %actor.id, appointment_id, "Handling cancel request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(cancel_appointment(
        &mut persistence,
        appointment_id,
        &actor,
    )?))
}

/// Handler for POST `/appointments/{id}/confirm`.
async fn handle_confirm(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Path(appointment_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(actor_id = %actor.id, appointment_id, "Handling confirm request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(confirm_appointment(
        &mut persistence,
        appointment_id,
        &actor,
    )?))
}

/// Handler for POST `/appointments/reset`.
async fn handle_reset(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Json(req): Json<ResetAppointmentsRequest>,
) -> Result<Json<ResetAppointmentsResponse>, HttpError> {
    info!(actor_id = %actor.id, "Handling bulk reset request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(reset_all_appointments(
        &mut persistence,
        &req,
        &actor,
    )?))
}
