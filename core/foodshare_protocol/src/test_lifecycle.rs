use chrono::{Duration, Utc};

use crate::engine::{is_legal_transition, transition, TransitionRequest};
use crate::errors::Error;
use crate::invariants::{assert_all_donation_invariants, assert_immutable_fields};
use crate::types::{Caller, Donation, DonationDraft, DonationStatus, FoodType, Role, Volunteer};

fn restaurant() -> Caller {
    Caller {
        id: "rest_1".into(),
        name: "Local Harvest".into(),
        role: Role::Restaurant,
    }
}

fn volunteer_caller(id: &str) -> Caller {
    Caller {
        id: id.into(),
        name: format!("Volunteer {id}"),
        role: Role::Volunteer,
    }
}

fn volunteer(id: &str) -> Volunteer {
    Volunteer {
        id: id.into(),
        name: format!("Volunteer {id}"),
    }
}

fn draft() -> DonationDraft {
    DonationDraft {
        restaurant_address: "123 Main St, Springfield, IL".into(),
        food_name: "Pasta Primavera".into(),
        food_type: FoodType::Prepared,
        quantity: "5 kg".into(),
        servings: 5,
        description: "Leftover food from today's service.".into(),
        expiration_time: Utc::now() + Duration::hours(24),
        dietary_info: vec!["vegetarian".into()],
        contains_allergens: vec!["wheat".into()],
        pickup_instructions: Some("Please use the back entrance.".into()),
        image: None,
    }
}

fn new_donation() -> Donation {
    let d = draft();
    d.validate(Utc::now()).expect("draft must be valid");
    d.into_donation("donation_1".into(), &restaurant(), Utc::now())
}

/// Place a donation into an arbitrary lifecycle position by walking the
/// legal transitions with the right actors.
fn donation_in(status: DonationStatus) -> Donation {
    let d = new_donation();
    let vol = volunteer_caller("vol_1");
    let now = Utc::now();
    match status {
        DonationStatus::Available => d,
        DonationStatus::Claimed => {
            transition(&d, &TransitionRequest::Claim(volunteer("vol_1")), &vol, now).unwrap()
        }
        DonationStatus::PickedUp => {
            let claimed =
                transition(&d, &TransitionRequest::Claim(volunteer("vol_1")), &vol, now).unwrap();
            transition(&claimed, &TransitionRequest::Pickup, &vol, now).unwrap()
        }
        DonationStatus::Delivered => {
            let claimed =
                transition(&d, &TransitionRequest::Claim(volunteer("vol_1")), &vol, now).unwrap();
            let picked = transition(&claimed, &TransitionRequest::Pickup, &vol, now).unwrap();
            transition(&picked, &TransitionRequest::Deliver, &vol, now).unwrap()
        }
        DonationStatus::Cancelled => {
            transition(&d, &TransitionRequest::Cancel, &restaurant(), now).unwrap()
        }
    }
}

// ─────────────────────────────────────────────────────────
// Scenario walkthroughs
// ─────────────────────────────────────────────────────────

#[test]
fn test_created_donation_is_available_with_no_volunteer() {
    let donation = new_donation();
    assert_eq!(donation.status, DonationStatus::Available);
    assert_eq!(donation.volunteer, None);
    assert_eq!(donation.servings, 5);
    assert_eq!(donation.pickup_time, None);
    assert_eq!(donation.delivery_time, None);
    assert_all_donation_invariants(&donation);
}

#[test]
fn test_claim_binds_volunteer() {
    let donation = new_donation();
    let claimed = transition(
        &donation,
        &TransitionRequest::Claim(volunteer("vol_1")),
        &volunteer_caller("vol_1"),
        Utc::now(),
    )
    .unwrap();

    assert_eq!(claimed.status, DonationStatus::Claimed);
    assert_eq!(claimed.volunteer, Some(volunteer("vol_1")));
    assert_eq!(claimed.pickup_time, None);
    assert_all_donation_invariants(&claimed);
    assert_immutable_fields(&donation, &claimed);
}

#[test]
fn test_pickup_stamps_pickup_time() {
    let claimed = donation_in(DonationStatus::Claimed);
    let picked = transition(
        &claimed,
        &TransitionRequest::Pickup,
        &volunteer_caller("vol_1"),
        Utc::now(),
    )
    .unwrap();

    assert_eq!(picked.status, DonationStatus::PickedUp);
    assert!(picked.pickup_time.is_some());
    assert_eq!(picked.delivery_time, None);
    assert_all_donation_invariants(&picked);
    assert_immutable_fields(&claimed, &picked);
}

#[test]
fn test_deliver_stamps_delivery_time() {
    let picked = donation_in(DonationStatus::PickedUp);
    let delivered = transition(
        &picked,
        &TransitionRequest::Deliver,
        &volunteer_caller("vol_1"),
        Utc::now(),
    )
    .unwrap();

    assert_eq!(delivered.status, DonationStatus::Delivered);
    assert!(delivered.delivery_time.is_some());
    assert!(delivered.created_at <= delivered.pickup_time.unwrap());
    assert!(delivered.pickup_time.unwrap() <= delivered.delivery_time.unwrap());
    assert_all_donation_invariants(&delivered);
    assert_immutable_fields(&picked, &delivered);
}

#[test]
fn test_cancel_keeps_volunteer_unset() {
    let donation = new_donation();
    let cancelled =
        transition(&donation, &TransitionRequest::Cancel, &restaurant(), Utc::now()).unwrap();

    assert_eq!(cancelled.status, DonationStatus::Cancelled);
    assert_eq!(cancelled.volunteer, None);
    assert_eq!(cancelled.pickup_time, None);
    assert_all_donation_invariants(&cancelled);
}

#[test]
fn test_cancel_after_delivery_is_invalid() {
    let delivered = donation_in(DonationStatus::Delivered);
    let err = transition(
        &delivered,
        &TransitionRequest::Cancel,
        &restaurant(),
        Utc::now(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidTransition {
            from: DonationStatus::Delivered,
            to: DonationStatus::Cancelled,
        }
    );
}

// ─────────────────────────────────────────────────────────
// State-machine closure
// ─────────────────────────────────────────────────────────

const ALL_STATUSES: [DonationStatus; 5] = [
    DonationStatus::Available,
    DonationStatus::Claimed,
    DonationStatus::PickedUp,
    DonationStatus::Delivered,
    DonationStatus::Cancelled,
];

/// Every `(status, request)` pair outside the explicit transition table must
/// fail with `InvalidTransition`, even for the best-positioned caller.
#[test]
fn test_transition_table_is_closed() {
    for from in ALL_STATUSES {
        let donation = donation_in(from);
        let requests = [
            TransitionRequest::Claim(volunteer("vol_1")),
            TransitionRequest::Pickup,
            TransitionRequest::Deliver,
            TransitionRequest::Cancel,
        ];
        for request in requests {
            let to = request.target();
            if is_legal_transition(from, to) {
                continue;
            }
            // Pick whichever caller would be entitled if the edge existed.
            let caller = match request {
                TransitionRequest::Cancel => restaurant(),
                _ => volunteer_caller("vol_1"),
            };
            let err = transition(&donation, &request, &caller, Utc::now()).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidTransition { from, to },
                "expected closure for {from} -> {to}"
            );
        }
    }
}

#[test]
fn test_terminal_states_never_change() {
    for status in [DonationStatus::Delivered, DonationStatus::Cancelled] {
        assert!(status.is_terminal());
        let donation = donation_in(status);
        for to in ALL_STATUSES {
            assert!(
                !is_legal_transition(status, to),
                "terminal {status} must have no edge to {to}"
            );
        }
        // The record itself is untouched by a rejected attempt.
        let before = donation.clone();
        let _ = transition(
            &donation,
            &TransitionRequest::Pickup,
            &volunteer_caller("vol_1"),
            Utc::now(),
        );
        assert_eq!(donation, before);
    }
}

#[test]
fn test_no_request_can_reenter_available() {
    // Available is only ever the creation status; no command targets it.
    let requests = [
        TransitionRequest::Claim(volunteer("vol_1")),
        TransitionRequest::Pickup,
        TransitionRequest::Deliver,
        TransitionRequest::Cancel,
    ];
    for request in requests {
        assert_ne!(request.target(), DonationStatus::Available);
    }
}

#[test]
fn test_skipping_a_state_is_invalid() {
    let donation = new_donation();
    let err = transition(
        &donation,
        &TransitionRequest::Pickup,
        &volunteer_caller("vol_1"),
        Utc::now(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidTransition {
            from: DonationStatus::Available,
            to: DonationStatus::PickedUp,
        }
    );
}

#[test]
fn test_invariants_hold_across_the_full_lifecycle() {
    for status in ALL_STATUSES {
        assert_all_donation_invariants(&donation_in(status));
    }
}
