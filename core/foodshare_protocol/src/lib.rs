//! # FoodShare Protocol
//!
//! This is the pure domain crate of the **FoodShare** food-redistribution
//! platform. It covers the full donation lifecycle:
//!
//! | Phase      | Entry Point(s)                                     |
//! |------------|----------------------------------------------------|
//! | Intake     | [`DonationDraft::validate`], [`DonationDraft::into_donation`] |
//! | Claiming   | [`engine::transition`] with [`TransitionRequest::Claim`]      |
//! | Fulfilment | [`TransitionRequest::Pickup`], [`TransitionRequest::Deliver`] |
//! | Withdrawal | [`TransitionRequest::Cancel`]                      |
//! | Queries    | [`query::by_restaurant`], [`query::by_volunteer`], [`query::available`] |
//!
//! ## Architecture
//!
//! Authorization is fully centralized in [`engine`]; no calling code checks
//! roles. Storage and notification delivery live in the companion
//! `donation_store` crate — this crate holds **only** pure rules over
//! [`Donation`] values: no I/O, no clocks (callers pass `now`), no global
//! state.

pub mod engine;
pub mod errors;
pub mod notice;
pub mod query;
pub mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_lifecycle;

pub use engine::{transition, TransitionRequest};
pub use errors::{Error, Result};
pub use notice::{Notice, NoticeKind};
pub use types::{Caller, Donation, DonationDraft, DonationStatus, FoodType, Role, Volunteer};
