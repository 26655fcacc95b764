// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization for the appointment API.
//!
//! Identity is supplied by an upstream collaborator and accepted here as an
//! explicit actor id and role. Authorization fails closed: every mutating
//! handler checks the actor before the engine runs, and nothing is written
//! when a check fails.

use atelier_audit::{Action, Actor};
use atelier_domain::Party;
use atelier_persistence::AppointmentRecord;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A client of the atelier.
    ///
    /// Clients book appointments and negotiate only the ones they own.
    Client,
    /// An atelier administrator.
    ///
    /// Admins see every appointment, negotiate any of them and may reset
    /// the whole appointment book.
    Admin,
}

impl Role {
    /// Returns the negotiating party this role speaks for.
    #[must_use]
    pub const fn party(&self) -> Party {
        match self {
            Self::Client => Party::User,
            Self::Admin => Party::Admin,
        }
    }

    /// Returns the wire name of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" | "user" => Ok(Self::Client),
            "admin" => Ok(Self::Admin),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role: '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this actor into the engine's actor.
    #[must_use]
    pub fn to_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.party())
    }

    /// Returns whether this actor owns the given appointment.
    #[must_use]
    pub fn owns(&self, appointment: &AppointmentRecord) -> bool {
        appointment.user_id == self.id
    }
}

/// Accepts an identity asserted by the upstream auth collaborator.
///
/// # Errors
///
/// Returns an error if the actor id is empty or the role is unknown.
pub fn authenticate_stub(
    actor_id: &str,
    actor_role: &str,
) -> Result<AuthenticatedActor, AuthError> {
    let actor_id: &str = actor_id.trim();
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    let role: Role = actor_role.parse()?;
    Ok(AuthenticatedActor::new(actor_id.to_string(), role))
}

/// Authorization service for checking actor permissions.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks whether an actor may book an appointment.
    ///
    /// Only clients book; the appointment is owned by the booking actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a client.
    pub fn authorize_book(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Client => Ok(()),
            Role::Admin => Err(AuthError::Unauthorized {
                action: String::from("book_appointment"),
                required_role: String::from("Client"),
            }),
        }
    }

    /// Checks whether an actor may perform an admin-only operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin.
    pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Client => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks whether an actor may read an appointment and its history.
    ///
    /// Admins read everything; clients read only what they own.
    ///
    /// # Errors
    ///
    /// Returns an error if a client does not own the appointment.
    pub fn authorize_view(
        actor: &AuthenticatedActor,
        appointment: &AppointmentRecord,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Client if actor.owns(appointment) => Ok(()),
            Role::Client => Err(AuthError::NotOwner {
                action: String::from("view_appointment"),
                appointment_id: appointment.appointment_id,
            }),
        }
    }

    /// Checks whether an actor may negotiate an appointment.
    ///
    /// Whether the action is legal in the appointment's current status is
    /// decided by the engine afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if a client does not own the appointment.
    pub fn authorize_negotiation(
        actor: &AuthenticatedActor,
        appointment: &AppointmentRecord,
        action: Action,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Client if actor.owns(appointment) => Ok(()),
            Role::Client => Err(AuthError::NotOwner {
                action: action.as_str().to_string(),
                appointment_id: appointment.appointment_id,
            }),
        }
    }
}
