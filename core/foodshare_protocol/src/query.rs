//! # Query layer
//!
//! Pure, read-only derivations over a donation collection. Every function is
//! a stable filter: relative order of the underlying collection is preserved
//! and nothing is re-sorted. Display ordering is a presentation concern.

use crate::types::{Caller, Donation, DonationStatus, FoodType, Role};

/// Donations owned by the calling restaurant.
///
/// Empty unless the caller holds the restaurant role.
pub fn by_restaurant<'a>(donations: &'a [Donation], caller: &Caller) -> Vec<&'a Donation> {
    if caller.role != Role::Restaurant {
        return Vec::new();
    }
    donations
        .iter()
        .filter(|d| d.restaurant_id == caller.id)
        .collect()
}

/// Donations claimed by the calling volunteer (in any post-claim status).
///
/// Empty unless the caller holds the volunteer role.
pub fn by_volunteer<'a>(donations: &'a [Donation], caller: &Caller) -> Vec<&'a Donation> {
    if caller.role != Role::Volunteer {
        return Vec::new();
    }
    donations
        .iter()
        .filter(|d| d.volunteer.as_ref().is_some_and(|v| v.id == caller.id))
        .collect()
}

/// Donations currently open for claiming.
pub fn available(donations: &[Donation]) -> Vec<&Donation> {
    donations
        .iter()
        .filter(|d| d.status == DonationStatus::Available)
        .collect()
}

/// A composable, order-preserving predicate over any donation view.
///
/// All unset criteria match everything, so `DonationFilter::default()` is a
/// pass-through. Text search is a case-insensitive substring match on the
/// food name and description.
#[derive(Clone, Debug, Default)]
pub struct DonationFilter {
    pub text: Option<String>,
    pub food_type: Option<FoodType>,
    pub status: Option<DonationStatus>,
}

impl DonationFilter {
    pub fn matches(&self, donation: &Donation) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = donation.food_name.to_lowercase().contains(&needle)
                || donation.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(food_type) = self.food_type {
            if donation.food_type != food_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if donation.status != status {
                return false;
            }
        }
        true
    }

    /// Apply the filter on top of a base view, preserving its order.
    pub fn apply<'a>(&self, donations: impl IntoIterator<Item = &'a Donation>) -> Vec<&'a Donation> {
        donations.into_iter().filter(|d| self.matches(d)).collect()
    }
}
