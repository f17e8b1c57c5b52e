//! # FoodShare Donation Store
//!
//! The stateful shell around the `foodshare_protocol` rules: holds the
//! canonical donation collection behind a lock, writes it through a durable
//! blob collaborator on every successful mutation, dispatches notices to an
//! injected notification sink, and seeds a bootstrap dataset on first run.
//!
//! The store is an explicitly owned object — construct it once with
//! [`DonationStore::open_with_config`] (or inject a [`persist::BlobStore`]
//! directly) and pass it by reference; there is no ambient global state.

pub mod config;
pub mod errors;
pub mod notify;
pub mod persist;
pub mod seed;
pub mod session;
pub mod store;


pub use config::Config;
pub use errors::{Result, StoreError};
pub use notify::{NotificationSink, RecordingSink, TracingSink};
pub use persist::{BlobStore, JsonFileStore, MemoryBlobStore};
pub use store::{DonationStore, DONATIONS_KEY};
