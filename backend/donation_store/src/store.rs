//! # Donation store
//!
//! Owns the canonical donation collection and is its only mutation path.
//!
//! Every mutating operation runs as a critical section over the collection:
//! read the current record, validate the change through the lifecycle
//! engine, write the durable blob, and only then commit to memory. Two
//! concurrent claims on one available donation therefore resolve to exactly
//! one winner; the loser observes the post-claim status and fails with
//! `InvalidTransition`.
//!
//! The durable write happens **before** the in-memory commit. If persistence
//! fails, the collection in memory is unchanged and memory and storage stay
//! consistent.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use foodshare_protocol::{
    engine, query, Caller, Donation, DonationDraft, Error, Notice, Role, TransitionRequest,
};

use crate::config::Config;
use crate::errors::{Result, StoreError};
use crate::notify::NotificationSink;
use crate::persist::{BlobStore, JsonFileStore};
use crate::seed;

/// Blob key for the serialized donation collection.
pub const DONATIONS_KEY: &str = "donations";

pub struct DonationStore {
    donations: Mutex<Vec<Donation>>,
    blobs: Box<dyn BlobStore>,
    sink: Arc<dyn NotificationSink>,
}

impl DonationStore {
    /// Open the store, loading a previously persisted collection if present.
    pub fn open(blobs: Box<dyn BlobStore>, sink: Arc<dyn NotificationSink>) -> Result<Self> {
        let donations = match blobs.get(DONATIONS_KEY)? {
            Some(bytes) => {
                let donations: Vec<Donation> = serde_json::from_slice(&bytes)?;
                info!(count = donations.len(), "Loaded persisted donation collection");
                donations
            }
            None => Vec::new(),
        };
        Ok(DonationStore {
            donations: Mutex::new(donations),
            blobs,
            sink,
        })
    }

    /// Open the store and seed a bootstrap dataset when nothing is persisted.
    pub fn open_seeded(
        blobs: Box<dyn BlobStore>,
        sink: Arc<dyn NotificationSink>,
        seed_count: usize,
    ) -> Result<Self> {
        let store = Self::open(blobs, sink)?;
        {
            let mut guard = store.donations.lock().unwrap();
            if guard.is_empty() && seed_count > 0 {
                let seeded = seed::generate(seed_count, Utc::now());
                store.persist(&seeded)?;
                info!(count = seeded.len(), "Seeded bootstrap donation collection");
                *guard = seeded;
            }
        }
        Ok(store)
    }

    /// Open a file-backed store according to the environment configuration.
    pub fn open_with_config(config: &Config, sink: Arc<dyn NotificationSink>) -> Result<Self> {
        let blobs = Box::new(JsonFileStore::open(&config.data_dir)?);
        if config.seed_on_empty {
            Self::open_seeded(blobs, sink, config.seed_count)
        } else {
            Self::open(blobs, sink)
        }
    }

    /// Borrow the underlying blob store (session persistence shares it).
    pub fn blobs(&self) -> &dyn BlobStore {
        self.blobs.as_ref()
    }

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────

    /// Validate and append a new donation owned by `owner`.
    ///
    /// The store stamps the id and creation time and forces the record into
    /// `Available` with no volunteer; callers cannot influence those fields.
    pub fn create(&self, draft: DonationDraft, owner: &Caller) -> Result<Donation> {
        if owner.role != Role::Restaurant {
            return Err(Error::Unauthorized("only restaurants can create donations".into()).into());
        }
        let now = Utc::now();
        draft.validate(now)?;

        let donation = draft.into_donation(Uuid::new_v4().to_string(), owner, now);

        let mut guard = self.donations.lock().unwrap();
        let mut candidate = guard.clone();
        candidate.push(donation.clone());
        self.persist(&candidate)?;
        *guard = candidate;
        drop(guard);

        self.sink.notify(Notice::donation_added());
        Ok(donation)
    }

    /// Apply a lifecycle transition to the donation with `id`.
    ///
    /// Delegates all validation and authorization to the engine, persists
    /// the updated collection, and emits a status notice. Engine errors are
    /// re-raised unchanged; every failure also reaches the sink.
    pub fn apply_transition(
        &self,
        id: &str,
        request: TransitionRequest,
        caller: &Caller,
    ) -> Result<Donation> {
        let mut guard = self.donations.lock().unwrap();

        let outcome = guard
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
            .and_then(|index| {
                engine::transition(&guard[index], &request, caller, Utc::now())
                    .map(|updated| (index, updated))
            });

        let (index, updated) = match outcome {
            Ok(ok) => ok,
            Err(err) => {
                self.sink.notify(Notice::failure(&err));
                return Err(err.into());
            }
        };

        let mut candidate = guard.clone();
        candidate[index] = updated.clone();
        if let Err(err) = self.persist(&candidate) {
            self.sink.notify(Notice {
                message: err.to_string(),
                kind: foodshare_protocol::NoticeKind::Error,
            });
            return Err(err);
        }
        *guard = candidate;
        drop(guard);

        self.sink.notify(Notice::status_changed(updated.status));
        Ok(updated)
    }

    // ─────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────

    /// Fetch a single donation by id.
    pub fn get_by_id(&self, id: &str) -> Result<Donation> {
        let guard = self.donations.lock().unwrap();
        guard
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()).into())
    }

    /// Copy of the full collection, in insertion order.
    pub fn snapshot(&self) -> Vec<Donation> {
        self.donations.lock().unwrap().clone()
    }

    /// Donations owned by the calling restaurant.
    pub fn by_restaurant(&self, caller: &Caller) -> Vec<Donation> {
        let guard = self.donations.lock().unwrap();
        query::by_restaurant(&guard, caller)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Donations claimed by the calling volunteer.
    pub fn by_volunteer(&self, caller: &Caller) -> Vec<Donation> {
        let guard = self.donations.lock().unwrap();
        query::by_volunteer(&guard, caller)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Donations currently open for claiming.
    pub fn available(&self) -> Vec<Donation> {
        let guard = self.donations.lock().unwrap();
        query::available(&guard).into_iter().cloned().collect()
    }

    /// Serialize and durably write a candidate collection.
    fn persist(&self, donations: &[Donation]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(donations)?;
        self.blobs.put(DONATIONS_KEY, &bytes)?;
        debug!(count = donations.len(), "Persisted donation collection");
        Ok(())
    }
}

impl std::fmt::Debug for DonationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DonationStore")
            .field("donations", &self.donations.lock().unwrap().len())
            .finish_non_exhaustive()
    }
}
