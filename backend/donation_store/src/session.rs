//! Persisted identity session.
//!
//! The identity collaborator authenticates; this module only keeps the
//! resulting [`Caller`] across process restarts, as a blob separate from
//! the donation collection.

use foodshare_protocol::Caller;

use crate::errors::Result;
use crate::persist::BlobStore;

/// Blob key for the current session.
pub const SESSION_KEY: &str = "session";

/// Persist the authenticated caller.
pub fn save(blobs: &dyn BlobStore, caller: &Caller) -> Result<()> {
    let bytes = serde_json::to_vec(caller)?;
    blobs.put(SESSION_KEY, &bytes)?;
    Ok(())
}

/// Load the previously persisted caller, if any.
pub fn load(blobs: &dyn BlobStore) -> Result<Option<Caller>> {
    match blobs.get(SESSION_KEY)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Forget the session (logout).
pub fn clear(blobs: &dyn BlobStore) -> Result<()> {
    blobs.delete(SESSION_KEY)?;
    Ok(())
}
