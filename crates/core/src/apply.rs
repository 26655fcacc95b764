// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Booking, Command};
use crate::error::CoreError;
use crate::rules::ensure_permitted;
use crate::state::{Negotiation, NewAppointment, TransitionResult};
use atelier_audit::{Action, Actor, HistoryEntry};
use atelier_domain::{AppointmentStatus, Party, normalize_message, validate_contact};

/// Applies a negotiation command to an appointment, producing the next state
/// and exactly one history entry.
///
/// This function is pure. Nothing is written; the caller persists the
/// result atomically or discards it.
///
/// # Arguments
///
/// * `state` - The current negotiation state (immutable)
/// * `command` - The step to apply
/// * `actor` - The identity performing the step
///
/// # Errors
///
/// Returns an error if:
/// - The table has no row for this status, action and party
/// - The counter-proposal note is too long
/// - The negotiation count would overflow
pub fn apply(
    state: &Negotiation,
    command: Command,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    let action: Action = command.action();
    let party: Party = actor.party;
    ensure_permitted(action, state.status, party)?;

    let id: i64 = state.appointment_id;
    let mut new_state: Negotiation = state.clone();

    let history_entry: HistoryEntry = match command {
        Command::Confirm => {
            new_state.status = AppointmentStatus::Confirmed;
            new_state.last_proposal_by = Party::Admin;
            HistoryEntry::new(id, party, String::from("Admin confirmed the appointment"))
        }
        Command::Accept => {
            new_state.status = AppointmentStatus::WaitingAdmin;
            new_state.last_proposal_by = Party::User;
            new_state.negotiation_count = next_count(state)?;
            HistoryEntry::new(id, party, String::from("Client accepted the proposal"))
        }
        Command::CounterPropose { slot, note } => {
            let note: Option<String> = normalize_message(note.as_deref())?;
            new_state.status = match party {
                Party::Admin => AppointmentStatus::WaitingUser,
                Party::User => AppointmentStatus::WaitingAdmin,
            };
            new_state.last_proposal_by = party;
            new_state.negotiation_count = next_count(state)?;
            new_state.preferred_date = Some(slot.date());
            new_state.preferred_time = slot.time();
            new_state.message.clone_from(&note);

            let message: String = note.unwrap_or_else(|| match party {
                Party::Admin => String::from("Admin proposed a new date"),
                Party::User => String::from("Client proposed a new date"),
            });
            HistoryEntry::proposal(id, party, slot, message)
        }
        Command::Refuse => {
            new_state.status = AppointmentStatus::Cancelled;
            match party {
                Party::Admin => {
                    new_state.last_proposal_by = Party::Admin;
                    HistoryEntry::new(id, party, String::from("Admin refused the appointment"))
                }
                Party::User => {
                    HistoryEntry::new(id, party, String::from("Client refused the proposal"))
                }
            }
        }
        Command::Cancel => {
            new_state.status = AppointmentStatus::Cancelled;
            match party {
                Party::User => HistoryEntry::new(
                    id,
                    party,
                    String::from("Client cancelled the appointment"),
                ),
                Party::Admin => {
                    new_state.last_proposal_by = Party::Admin;
                    let which: &str = if state.status == AppointmentStatus::Confirmed {
                        "confirmed"
                    } else {
                        "in-progress"
                    };
                    HistoryEntry::new(
                        id,
                        party,
                        format!("Admin cancelled the {which} appointment"),
                    )
                }
            }
        }
    };

    Ok(TransitionResult {
        new_state,
        history_entry,
        action,
    })
}

fn next_count(state: &Negotiation) -> Result<u32, CoreError> {
    state
        .negotiation_count
        .checked_add(1)
        .ok_or(CoreError::NegotiationCountOverflow {
            appointment_id: state.appointment_id,
        })
}

/// Validates a booking and produces the appointment to insert.
///
/// The new appointment starts `pending` with the client as last proposer, a
/// zero count and no history.
///
/// # Arguments
///
/// * `booking` - The client's request
/// * `actor` - The client booking; their id becomes the owner
///
/// # Errors
///
/// Returns an error if a contact field or the message fails validation.
pub fn apply_booking(booking: Booking, actor: &Actor) -> Result<NewAppointment, CoreError> {
    validate_contact(&booking.contact)?;
    let note: Option<String> = normalize_message(booking.message.as_deref())?;

    Ok(NewAppointment {
        user_id: actor.id.clone(),
        dress_id: booking.dress_id,
        contact: booking.contact,
        preferred_date: booking.preferred_date,
        preferred_time: booking.preferred_time,
        status: AppointmentStatus::Pending,
        last_proposal_by: Party::User,
        negotiation_count: 0,
        message: booking.appointment_type.booking_message(note.as_deref()),
    })
}
