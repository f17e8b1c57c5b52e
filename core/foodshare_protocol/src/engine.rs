//! # Lifecycle engine
//!
//! The sole authority for changing a donation's status and dependent fields.
//!
//! [`transition`] is a pure function: it never touches storage and never
//! mutates its input. The store runs it inside its critical section and
//! commits the returned record only after the durable write succeeds, which
//! makes the whole read-validate-write sequence an atomic compare-and-swap
//! over the single record.
//!
//! Checks run in a fixed order:
//!
//! 1. **Structural legality** — is `(current, target)` in the transition
//!    table at all? Failing here is [`Error::InvalidTransition`]: nobody
//!    could perform this change right now.
//! 2. **Authorization** — does this caller satisfy the ownership rule for
//!    the transition? Failing here is [`Error::Unauthorized`].

use chrono::{DateTime, Utc};

use crate::errors::{Error, Result};
use crate::types::{Caller, Donation, DonationStatus, Role, Volunteer};

/// A requested status change, as a closed command set.
///
/// `Claim` carries the volunteer to bind, so an identity-less claim cannot
/// be constructed. The other commands act on the already-bound volunteer or
/// the owning restaurant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionRequest {
    /// `Available -> Claimed`, by any volunteer.
    Claim(Volunteer),
    /// `Claimed -> PickedUp`, by the assigned volunteer.
    Pickup,
    /// `PickedUp -> Delivered`, by the assigned volunteer.
    Deliver,
    /// `Available -> Cancelled`, by the owning restaurant.
    Cancel,
}

impl TransitionRequest {
    /// The status this request drives the donation into.
    pub fn target(&self) -> DonationStatus {
        match self {
            Self::Claim(_) => DonationStatus::Claimed,
            Self::Pickup => DonationStatus::PickedUp,
            Self::Deliver => DonationStatus::Delivered,
            Self::Cancel => DonationStatus::Cancelled,
        }
    }
}

/// `true` iff `(from, to)` is an edge of the lifecycle state machine.
pub fn is_legal_transition(from: DonationStatus, to: DonationStatus) -> bool {
    matches!(
        (from, to),
        (DonationStatus::Available, DonationStatus::Claimed)
            | (DonationStatus::Claimed, DonationStatus::PickedUp)
            | (DonationStatus::PickedUp, DonationStatus::Delivered)
            | (DonationStatus::Available, DonationStatus::Cancelled)
    )
}

/// Validate and apply a single transition, returning the updated record.
///
/// On success the returned donation carries the full set of field updates
/// for the transition (status, volunteer binding, timestamp); the input is
/// untouched, so a failed durable write observes no partial state.
pub fn transition(
    donation: &Donation,
    request: &TransitionRequest,
    caller: &Caller,
    now: DateTime<Utc>,
) -> Result<Donation> {
    let target = request.target();
    if !is_legal_transition(donation.status, target) {
        return Err(Error::InvalidTransition {
            from: donation.status,
            to: target,
        });
    }

    authorize(donation, request, caller)?;

    let mut updated = donation.clone();
    updated.status = target;
    match request {
        TransitionRequest::Claim(volunteer) => {
            updated.volunteer = Some(volunteer.clone());
        }
        TransitionRequest::Pickup => {
            updated.pickup_time = Some(now);
        }
        TransitionRequest::Deliver => {
            updated.delivery_time = Some(now);
        }
        // Cancel is only reachable from Available, where no volunteer or
        // timestamp exists; nothing beyond the status changes.
        TransitionRequest::Cancel => {}
    }
    Ok(updated)
}

/// Ownership rules, evaluated against the current record before mutation.
fn authorize(donation: &Donation, request: &TransitionRequest, caller: &Caller) -> Result<()> {
    match request {
        TransitionRequest::Claim(_) => {
            if caller.role != Role::Volunteer {
                return Err(Error::Unauthorized(
                    "only volunteers can claim donations".into(),
                ));
            }
        }
        TransitionRequest::Pickup | TransitionRequest::Deliver => {
            if caller.role != Role::Volunteer || !is_assigned_volunteer(donation, caller) {
                return Err(Error::Unauthorized(
                    "only the assigned volunteer can update this donation".into(),
                ));
            }
        }
        TransitionRequest::Cancel => {
            if caller.role != Role::Restaurant || donation.restaurant_id != caller.id {
                return Err(Error::Unauthorized(
                    "only the owning restaurant can cancel this donation".into(),
                ));
            }
        }
    }
    Ok(())
}

fn is_assigned_volunteer(donation: &Donation, caller: &Caller) -> bool {
    donation
        .volunteer
        .as_ref()
        .is_some_and(|v| v.id == caller.id)
}
