// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atelier::CoreError;
use atelier_domain::DomainError;
use atelier_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor's role does not allow the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required to perform this action.
        required_role: String,
    },
    /// A client tried to act on an appointment owned by someone else.
    NotOwner {
        /// The action that was attempted.
        action: String,
        /// The appointment concerned.
        appointment_id: i64,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(
                    f,
                    "Unauthorized: action '{action}' requires role '{required_role}'"
                )
            }
            Self::NotOwner {
                action,
                appointment_id,
            } => write!(
                f,
                "Unauthorized: action '{action}' on appointment {appointment_id} requires ownership"
            ),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors so that
/// internal types never leak across the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor is not allowed to perform the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role or relationship required.
        required_role: String,
    },
    /// A negotiation or reset rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The request input is malformed or fails validation.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource.
        resource_type: String,
        /// A description of what was not found.
        message: String,
    },
    /// The resource changed since it was read; the caller must refetch.
    Conflict {
        /// A description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(
                    f,
                    "Unauthorized: action '{action}' requires '{required_role}'"
                )
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
            AuthError::NotOwner { action, .. } => Self::Unauthorized {
                action,
                required_role: String::from("appointment owner"),
            },
        }
    }
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    let field: &str = match &err {
        DomainError::InvalidStatus(_) => "status",
        DomainError::InvalidParty(_) => "party",
        DomainError::InvalidFilter(_) => "filter",
        DomainError::InvalidAppointmentType(_) => "appointment_type",
        DomainError::InvalidName { field, .. } => *field,
        DomainError::InvalidEmail(_) => "email",
        DomainError::InvalidPhone(_) => "phone",
        DomainError::DateParseError { .. }
        | DomainError::MissingProposalDate
        | DomainError::DateInPast { .. } => "date",
        DomainError::TimeParseError { .. } => "time",
        DomainError::MessageTooLong { .. } => "message",
        DomainError::ResetNotConfirmed => {
            return ApiError::DomainRuleViolation {
                rule: String::from("reset_confirmation"),
                message,
            };
        }
    };
    ApiError::InvalidInput {
        field: field.replace(' ', "_"),
        message,
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::TransitionRejected { .. } => ApiError::DomainRuleViolation {
            rule: String::from("negotiation_transition"),
            message: err.to_string(),
        },
        CoreError::NegotiationCountOverflow { .. } => ApiError::DomainRuleViolation {
            rule: String::from("negotiation_count"),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage details are only surfaced for internal errors.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::AppointmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Appointment"),
            message: format!("Appointment {id} does not exist"),
        },
        PersistenceError::DressNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Dress"),
            message: format!("Dress {id} does not exist"),
        },
        PersistenceError::ConcurrentModification { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
