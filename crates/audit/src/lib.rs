// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use atelier_domain::{Party, ProposedSlot};

/// The identity performing a negotiation step.
///
/// The id is the opaque identity handed over by the authentication
/// collaborator; the party decides which side of the table it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The side this actor negotiates for.
    pub party: Party,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `party` - The side this actor negotiates for
    #[must_use]
    pub const fn new(id: String, party: Party) -> Self {
        Self { id, party }
    }

    /// Creates a client actor.
    #[must_use]
    pub fn client(id: &str) -> Self {
        Self::new(id.to_string(), Party::User)
    }

    /// Creates an atelier staff actor.
    #[must_use]
    pub fn admin(id: &str) -> Self {
        Self::new(id.to_string(), Party::Admin)
    }
}

/// The negotiation step that was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Client accepts the atelier's proposal.
    Accept,
    /// Either side proposes another date.
    CounterPropose,
    /// Either side refuses.
    Refuse,
    /// Client withdraws, or the atelier cancels with the override.
    Cancel,
    /// Atelier confirms the current date.
    Confirm,
}

impl Action {
    /// Every action.
    pub const ALL: [Self; 5] = [
        Self::Accept,
        Self::CounterPropose,
        Self::Refuse,
        Self::Cancel,
        Self::Confirm,
    ];

    /// Converts this action to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::CounterPropose => "counter_propose",
            Self::Refuse => "refuse",
            Self::Cancel => "cancel",
            Self::Confirm => "confirm",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable history entry describing one negotiation step.
///
/// Every successful transition produces exactly one entry. The entry is
/// written in the same transaction as the appointment update and is never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The appointment the step belongs to.
    pub appointment_id: i64,
    /// Who performed the step.
    pub proposed_by: Party,
    /// The proposed date and time, present only for counter-proposals.
    pub proposed_slot: Option<ProposedSlot>,
    /// Human-readable description of the step.
    pub message: String,
}

impl HistoryEntry {
    /// Creates an entry for a step that carries no proposal.
    #[must_use]
    pub const fn new(appointment_id: i64, proposed_by: Party, message: String) -> Self {
        Self {
            appointment_id,
            proposed_by,
            proposed_slot: None,
            message,
        }
    }

    /// Creates an entry for a counter-proposal.
    #[must_use]
    pub const fn proposal(
        appointment_id: i64,
        proposed_by: Party,
        slot: ProposedSlot,
        message: String,
    ) -> Self {
        Self {
            appointment_id,
            proposed_by,
            proposed_slot: Some(slot),
            message,
        }
    }

    /// Returns whether this entry records a proposal.
    #[must_use]
    pub const fn is_proposal(&self) -> bool {
        self.proposed_slot.is_some()
    }
}

#[cfg(test)]
mod tests;
