// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor extraction for the server.
//!
//! Identity is asserted by the upstream auth collaborator on every request,
//! either as `actor_id` and `actor_role` query parameters or as the
//! `X-Actor-Id` and `X-Actor-Role` headers. Query parameters win when both
//! are present.

use atelier_api::{AuthenticatedActor, authenticate_stub};
use axum::{
    extract::{FromRequestParts, Query},
    http::{HeaderMap, request::Parts},
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::HttpError;

/// Header carrying the actor id.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the actor role.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

#[derive(Debug, Default, Deserialize)]
struct ActorParams {
    actor_id: Option<String>,
    actor_role: Option<String>,
}

/// Extractor for the acting client or admin.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionActor(actor): SessionActor,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the id or role is missing, the id is empty,
/// or the role is unknown.
pub struct SessionActor(pub AuthenticatedActor);

impl<S> FromRequestParts<S> for SessionActor
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params: ActorParams = Query::<ActorParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();

        let actor_id: String = params
            .actor_id
            .or_else(|| header_value(&parts.headers, ACTOR_ID_HEADER))
            .ok_or_else(|| {
                debug!("Request carries no actor id");
                HttpError::unauthenticated("Missing actor_id")
            })?;
        let actor_role: String = params
            .actor_role
            .or_else(|| header_value(&parts.headers, ACTOR_ROLE_HEADER))
            .ok_or_else(|| {
                debug!("Request carries no actor role");
                HttpError::unauthenticated("Missing actor_role")
            })?;

        let actor: AuthenticatedActor = authenticate_stub(&actor_id, &actor_role).map_err(|e| {
            warn!(error = %e, "Actor authentication failed");
            HttpError::unauthenticated(e.to_string())
        })?;

        debug!(actor_id = %actor.id, role = %actor.role, "Actor authenticated");
        Ok(Self(actor))
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
