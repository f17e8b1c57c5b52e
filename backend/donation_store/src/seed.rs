//! Bootstrap dataset for first runs without a persisted collection.
//!
//! Deterministic: entries cycle through fixed pools instead of sampling, so
//! repeated fresh starts produce the same collection. Every generated record
//! satisfies the lifecycle invariants (volunteer presence, timestamp
//! ordering, terminal-state consistency).

use chrono::{DateTime, Duration, Utc};

use foodshare_protocol::{Donation, DonationStatus, FoodType, Volunteer};

const RESTAURANT_NAMES: [&str; 5] = [
    "Olive Garden",
    "Panera Bread",
    "Whole Foods Market",
    "Fresh Market",
    "Local Harvest",
];

const ADDRESSES: [&str; 5] = [
    "123 Main St, Springfield, IL",
    "456 Oak Ave, Riverside, CA",
    "789 Pine Blvd, Lakeside, NY",
    "321 Maple Dr, Mountain View, CO",
    "654 Elm St, Oceanside, FL",
];

const FOOD_NAMES: [&str; 8] = [
    "Pasta Primavera",
    "Fresh Salad Mix",
    "Bread Loaves",
    "Vegetable Curry",
    "Rice Pilaf",
    "Sandwich Platters",
    "Fruit Trays",
    "Prepared Soups",
];

const FOOD_TYPES: [FoodType; 7] = [
    FoodType::Prepared,
    FoodType::Produce,
    FoodType::Canned,
    FoodType::Bakery,
    FoodType::Dairy,
    FoodType::Meat,
    FoodType::Other,
];

const DIETARY_OPTIONS: [&str; 8] = [
    "vegetarian",
    "vegan",
    "halal",
    "kosher",
    "gluten-free",
    "dairy-free",
    "nut-free",
    "organic",
];

const ALLERGENS: [&str; 9] = [
    "peanuts",
    "tree nuts",
    "milk",
    "eggs",
    "fish",
    "shellfish",
    "soy",
    "wheat",
    "sesame",
];

const STATUSES: [DonationStatus; 5] = [
    DonationStatus::Available,
    DonationStatus::Claimed,
    DonationStatus::PickedUp,
    DonationStatus::Delivered,
    DonationStatus::Cancelled,
];

fn tags(pool: &[&str], index: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|k| pool[(index + k) % pool.len()].to_string())
        .collect()
}

/// Generate `count` plausible donations around the `now` reference point.
pub fn generate(count: usize, now: DateTime<Utc>) -> Vec<Donation> {
    (0..count)
        .map(|i| {
            let status = STATUSES[i % STATUSES.len()];
            let created_at = now - Duration::hours((i as i64 % 48) + 1);

            let volunteer = match status {
                DonationStatus::Claimed
                | DonationStatus::PickedUp
                | DonationStatus::Delivered => Some(Volunteer {
                    id: format!("vol_{}", i % 3 + 1),
                    name: format!("Volunteer {}", i % 3 + 1),
                }),
                DonationStatus::Available | DonationStatus::Cancelled => None,
            };
            let pickup_time = matches!(
                status,
                DonationStatus::PickedUp | DonationStatus::Delivered
            )
            .then(|| created_at + Duration::hours(1));
            let delivery_time = (status == DonationStatus::Delivered)
                .then(|| created_at + Duration::hours(3));

            Donation {
                id: format!("donation_{}", i + 1),
                restaurant_id: format!("rest_{}", i % 5 + 1),
                restaurant_name: RESTAURANT_NAMES[i % RESTAURANT_NAMES.len()].to_string(),
                restaurant_address: ADDRESSES[i % ADDRESSES.len()].to_string(),
                food_name: FOOD_NAMES[i % FOOD_NAMES.len()].to_string(),
                food_type: FOOD_TYPES[i % FOOD_TYPES.len()],
                quantity: format!("{} {}", i % 10 + 1, if i % 2 == 0 { "kg" } else { "lbs" }),
                servings: (i as u32 % 20) + 5,
                description: "Leftover food from today's service. Must be picked up within 24 hours.".to_string(),
                expiration_time: now + Duration::days((i as i64 % 3) + 1),
                dietary_info: tags(&DIETARY_OPTIONS, i, i % 3),
                contains_allergens: tags(&ALLERGENS, i, i % 3),
                status,
                created_at,
                pickup_instructions: Some(
                    "Please use the back entrance and call when you arrive.".to_string(),
                ),
                pickup_time,
                delivery_time,
                volunteer,
                image: Some(format!(
                    "https://source.unsplash.com/random/300x200/?food&sig={i}"
                )),
            }
        })
        .collect()
}
