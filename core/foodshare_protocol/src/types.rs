//! # Types
//!
//! Shared data structures used across all modules of the FoodShare protocol.
//!
//! ## Design decisions
//!
//! ### Draft / Donation split
//!
//! A donation is created from two separate inputs:
//!
//! - [`DonationDraft`] — everything the donor supplies through the intake
//!   form; validated before acceptance.
//! - The store stamps `id`, `createdAt`, forces `status = Available` and
//!   `volunteer = None`; callers can never supply those.
//!
//! ### Status as a Finite-State Machine
//!
//! [`DonationStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Available ──► Claimed ──► PickedUp ──► Delivered
//!     └──► Cancelled
//! ```
//!
//! Backward transitions and transitions out of terminal states (`Delivered`,
//! `Cancelled`) are rejected by [`crate::engine::transition`].
//!
//! ### Wire layout
//!
//! Serialized field and variant names are camelCase (`restaurantId`,
//! `pickedUp`, …) so a collection blob written by earlier FoodShare builds
//! round-trips unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Lifecycle status of a donation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DonationStatus {
    /// Listed and waiting for a volunteer to claim it.
    Available,
    /// Reserved by a volunteer; awaiting pickup.
    Claimed,
    /// In the volunteer's hands, en route.
    PickedUp,
    /// Dropped off; terminal.
    Delivered,
    /// Withdrawn by the donor before any claim; terminal.
    Cancelled,
}

impl DonationStatus {
    /// Return a short identifier string matching the serialized variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
            Self::PickedUp => "pickedUp",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// `true` for statuses with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of the donated food.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Prepared,
    Produce,
    Canned,
    Bakery,
    Dairy,
    Meat,
    Other,
}

/// The capability class under which an operation is invoked.
///
/// A closed union: every authorization rule in the engine matches on this,
/// never on free-form strings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Restaurant,
    Volunteer,
}

/// The authenticated caller, as supplied by the identity collaborator.
///
/// The protocol never issues or verifies credentials; it trusts this value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Caller {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// The volunteer bound to a donation at claim time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
}

/// A single unit of surplus food offered for volunteer pickup and delivery.
///
/// The restaurant fields are a snapshot of the donor at creation time and are
/// never re-synced; `pickupTime` and `deliveryTime` are written exactly once,
/// on the transitions into `PickedUp` and `Delivered` respectively.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub restaurant_address: String,
    pub food_name: String,
    pub food_type: FoodType,
    /// Free text, e.g. "5 kg".
    pub quantity: String,
    pub servings: u32,
    pub description: String,
    pub expiration_time: DateTime<Utc>,
    /// Opaque tags; no closed vocabulary is enforced here.
    pub dietary_info: Vec<String>,
    pub contains_allergens: Vec<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<DateTime<Utc>>,
    /// `None` exactly while `Available` (and for `Cancelled`, which is only
    /// reachable from `Available`). Serialized as an explicit `null`.
    pub volunteer: Option<Volunteer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Creation payload supplied by the donor.
///
/// `restaurant_address` comes from the donor's profile via the collaborator
/// that builds the draft; the remaining identity snapshot (`restaurantId`,
/// `restaurantName`) is taken from the authenticated caller at creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDraft {
    pub restaurant_address: String,
    pub food_name: String,
    pub food_type: FoodType,
    pub quantity: String,
    pub servings: u32,
    pub description: String,
    pub expiration_time: DateTime<Utc>,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    #[serde(default)]
    pub contains_allergens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DonationDraft {
    /// Validate the intake rules against `now`.
    ///
    /// Mirrors the donor-facing form: required text fields must be non-blank,
    /// at least one serving, expiration strictly in the future.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<()> {
        if self.food_name.trim().is_empty() {
            return Err(Error::Validation("Food name is required".into()));
        }
        if self.quantity.trim().is_empty() {
            return Err(Error::Validation("Quantity is required".into()));
        }
        if self.servings < 1 {
            return Err(Error::Validation("Must have at least 1 serving".into()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation("Description is required".into()));
        }
        if self.expiration_time <= now {
            return Err(Error::Validation(
                "Expiration time must be in the future".into(),
            ));
        }
        Ok(())
    }

    /// Materialize the draft into a fresh `Available` donation.
    ///
    /// Does not validate; call [`DonationDraft::validate`] first.
    pub fn into_donation(self, id: String, owner: &Caller, now: DateTime<Utc>) -> Donation {
        Donation {
            id,
            restaurant_id: owner.id.clone(),
            restaurant_name: owner.name.clone(),
            restaurant_address: self.restaurant_address,
            food_name: self.food_name,
            food_type: self.food_type,
            quantity: self.quantity,
            servings: self.servings,
            description: self.description,
            expiration_time: self.expiration_time,
            dietary_info: self.dietary_info,
            contains_allergens: self.contains_allergens,
            status: DonationStatus::Available,
            created_at: now,
            pickup_instructions: self.pickup_instructions,
            pickup_time: None,
            delivery_time: None,
            volunteer: None,
            image: self.image,
        }
    }
}
