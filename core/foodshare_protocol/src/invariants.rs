#![allow(dead_code)]

use crate::types::{Donation, DonationStatus};

/// INV-1: `Available` and a bound volunteer are mutually exclusive, and the
/// lifecycle timestamps only appear alongside a volunteer. A donation is
/// `Available` iff `volunteer`, `pickup_time` and `delivery_time` are all
/// unset; `Cancelled` (reachable only from `Available`) keeps all three
/// unset too.
pub fn assert_volunteer_consistency(donation: &Donation) {
    match donation.status {
        DonationStatus::Available | DonationStatus::Cancelled => {
            assert!(
                donation.volunteer.is_none(),
                "INV-1 violated: donation {} is {} but has a volunteer",
                donation.id,
                donation.status
            );
            assert!(
                donation.pickup_time.is_none() && donation.delivery_time.is_none(),
                "INV-1 violated: donation {} is {} but has lifecycle timestamps",
                donation.id,
                donation.status
            );
        }
        DonationStatus::Claimed | DonationStatus::PickedUp | DonationStatus::Delivered => {
            assert!(
                donation.volunteer.is_some(),
                "INV-1 violated: donation {} is {} but has no volunteer",
                donation.id,
                donation.status
            );
        }
    }
}

/// INV-2: `pickup_time` exists exactly from `PickedUp` onwards, and
/// `delivery_time` exactly at `Delivered`.
pub fn assert_timestamp_presence(donation: &Donation) {
    let picked = matches!(
        donation.status,
        DonationStatus::PickedUp | DonationStatus::Delivered
    );
    assert_eq!(
        donation.pickup_time.is_some(),
        picked,
        "INV-2 violated: donation {} is {} with pickup_time {:?}",
        donation.id,
        donation.status,
        donation.pickup_time
    );
    assert_eq!(
        donation.delivery_time.is_some(),
        donation.status == DonationStatus::Delivered,
        "INV-2 violated: donation {} is {} with delivery_time {:?}",
        donation.id,
        donation.status,
        donation.delivery_time
    );
}

/// INV-3: whenever set, timestamps are monotonic:
/// `created_at <= pickup_time <= delivery_time`.
pub fn assert_timestamps_monotonic(donation: &Donation) {
    if let Some(pickup) = donation.pickup_time {
        assert!(
            donation.created_at <= pickup,
            "INV-3 violated: donation {} picked up before creation",
            donation.id
        );
        if let Some(delivery) = donation.delivery_time {
            assert!(
                pickup <= delivery,
                "INV-3 violated: donation {} delivered before pickup",
                donation.id
            );
        }
    } else {
        assert!(
            donation.delivery_time.is_none(),
            "INV-3 violated: donation {} has delivery_time without pickup_time",
            donation.id
        );
    }
}

/// INV-4: at least one serving.
pub fn assert_servings_positive(donation: &Donation) {
    assert!(
        donation.servings >= 1,
        "INV-4 violated: donation {} has {} servings",
        donation.id,
        donation.servings
    );
}

/// INV-5: expiration lies strictly after creation.
pub fn assert_expiration_after_creation(donation: &Donation) {
    assert!(
        donation.expiration_time > donation.created_at,
        "INV-5 violated: donation {} expires at or before creation",
        donation.id
    );
}

/// INV-6: fields immutable after creation (identity snapshot, descriptive
/// payload, creation timestamp) remain unchanged, and write-once timestamps
/// are never cleared or rewritten.
pub fn assert_immutable_fields(original: &Donation, current: &Donation) {
    assert_eq!(original.id, current.id, "INV-6 violated: id changed");
    assert_eq!(
        original.restaurant_id, current.restaurant_id,
        "INV-6 violated: restaurant_id changed"
    );
    assert_eq!(
        original.restaurant_name, current.restaurant_name,
        "INV-6 violated: restaurant_name changed"
    );
    assert_eq!(
        original.restaurant_address, current.restaurant_address,
        "INV-6 violated: restaurant_address changed"
    );
    assert_eq!(
        original.food_name, current.food_name,
        "INV-6 violated: food_name changed"
    );
    assert_eq!(
        original.created_at, current.created_at,
        "INV-6 violated: created_at changed"
    );
    if let Some(pickup) = original.pickup_time {
        assert_eq!(
            current.pickup_time,
            Some(pickup),
            "INV-6 violated: pickup_time rewritten"
        );
    }
    if let Some(delivery) = original.delivery_time {
        assert_eq!(
            current.delivery_time,
            Some(delivery),
            "INV-6 violated: delivery_time rewritten"
        );
    }
}

/// Run all stateless donation invariants.
pub fn assert_all_donation_invariants(donation: &Donation) {
    assert_volunteer_consistency(donation);
    assert_timestamp_presence(donation);
    assert_timestamps_monotonic(donation);
    assert_servings_positive(donation);
    assert_expiration_after_creation(donation);
}
