// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-appointment capabilities.
//!
//! Capabilities tell a view which buttons to offer. They are derived from
//! the same permission table the engine enforces, so a view never offers an
//! action that would be rejected.

use atelier::permits;
use atelier_audit::Action;
use atelier_domain::{AppointmentStatus, Party};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::auth::Role;

/// Whether an action is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is available.
    Allowed,
    /// The action is not available.
    Denied,
}

impl Capability {
    /// Returns whether this capability allows the action.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean.
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let allowed: bool = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(allowed))
    }
}

/// The actions a viewer may take on one appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCapabilities {
    pub can_accept: Capability,
    pub can_counter_propose: Capability,
    pub can_refuse: Capability,
    pub can_cancel: Capability,
    pub can_confirm: Capability,
}

impl AppointmentCapabilities {
    /// Returns the capability for one action.
    #[must_use]
    pub const fn for_action(&self, action: Action) -> Capability {
        match action {
            Action::Accept => self.can_accept,
            Action::CounterPropose => self.can_counter_propose,
            Action::Refuse => self.can_refuse,
            Action::Cancel => self.can_cancel,
            Action::Confirm => self.can_confirm,
        }
    }
}

/// Computes what a viewer in `role` may do with an appointment in `status`.
///
/// Ownership is not considered here; clients only ever see their own
/// appointments.
#[must_use]
pub const fn compute_appointment_capabilities(
    status: AppointmentStatus,
    role: Role,
) -> AppointmentCapabilities {
    let party: Party = role.party();
    AppointmentCapabilities {
        can_accept: Capability::from_bool(permits(Action::Accept, status, party)),
        can_counter_propose: Capability::from_bool(permits(Action::CounterPropose, status, party)),
        can_refuse: Capability::from_bool(permits(Action::Refuse, status, party)),
        can_cancel: Capability::from_bool(permits(Action::Cancel, status, party)),
        can_confirm: Capability::from_bool(permits(Action::Confirm, status, party)),
    }
}
