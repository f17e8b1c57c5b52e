//! Human-readable notices emitted after mutations.
//!
//! The protocol produces the message; the sink that receives it owns
//! presentation and lifetime.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::DonationStatus;

/// Severity of a notice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A message destined for the notification sink.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// Notice for a successfully created donation.
    pub fn donation_added() -> Self {
        Notice {
            message: "Donation added successfully!".into(),
            kind: NoticeKind::Success,
        }
    }

    /// Notice for a successful transition into `status`.
    pub fn status_changed(status: DonationStatus) -> Self {
        Notice {
            message: status_message(status).into(),
            kind: NoticeKind::Success,
        }
    }

    /// Notice for a failed operation.
    pub fn failure(err: &Error) -> Self {
        let message = match err {
            Error::InvalidTransition { to, .. } if *to == DonationStatus::Claimed => {
                // The race-loser case reads better than the raw edge pair.
                "Donation is no longer available".into()
            }
            other => other.to_string(),
        };
        Notice {
            message,
            kind: NoticeKind::Error,
        }
    }
}

/// The status-change message catalogue, keyed by the new status.
pub fn status_message(status: DonationStatus) -> &'static str {
    match status {
        DonationStatus::Available => "Donation is now available",
        DonationStatus::Claimed => "Donation has been claimed",
        DonationStatus::PickedUp => "Food has been picked up",
        DonationStatus::Delivered => "Food has been delivered successfully",
        DonationStatus::Cancelled => "Donation has been cancelled",
    }
}
