//! Domain types shared by the app state, the store clients, and the UI

pub mod filter;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category selector sentinel meaning "no category filter"
pub const CATEGORY_ALL: &str = "all";

/// Default category tags offered by the category selector.
/// A config file can replace this list; matching stays exact either way.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Technology",
    "Marketing",
    "Design",
    "Finance",
    "Operations",
];

/// An internship opportunity as stored in the `postings` collection.
///
/// Owned by the document store; this view only reads it. Every field
/// defaults so a sparse or malformed document degrades to empty values
/// instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternshipPosting {
    /// Store-assigned identifier, merged into the document on fetch
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Display string, e.g. "$2,400/mo"
    #[serde(default)]
    pub salary: String,
    /// Display string, e.g. "12 weeks"
    #[serde(default)]
    pub duration: String,
    /// Work-mode label, e.g. "Remote" / "Hybrid" / "On-site"
    #[serde(default)]
    pub work_mode: String,
    #[serde(default)]
    pub description: String,
    /// "active" or "inactive"; the store query already filters on it
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Category tag, one of the enumerated category set
    #[serde(default)]
    pub category: String,
}

/// A record linking the current user to a posting with a review status.
/// Read-only here; only used for the applications view and the
/// pending-count badge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub applicant_id: String,
    /// Reference to the posting this application targets
    #[serde(default)]
    pub posting_id: String,
    #[serde(default)]
    pub posting_title: String,
    #[serde(default)]
    pub company: String,
    /// Free-form review status; the badge counts `"pending"` exactly
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Application status value counted by the applications badge.
/// Comparison is exact and case-sensitive.
pub const STATUS_PENDING: &str = "pending";

/// Signed-in user, passed explicitly to constructors instead of being
/// read from any ambient context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
}

impl Identity {
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}
