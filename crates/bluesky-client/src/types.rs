//! Core domain types for the Bluesky client.

use serde::{Deserialize, Serialize};

/// Sentinel for a timestamp that failed to parse.
///
/// Datetime fields are Unix seconds; a value of `-1` means the server
/// sent something the ISO-8601 prefix parser could not read.
pub const INVALID_TIMESTAMP: i64 = -1;

/// Session information from authentication.
///
/// Owned exclusively by the client that created it. The refresh token is
/// captured from the login response but never used; there is no
/// token-refresh automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub did: String,
    pub handle: String,
    pub access_jwt: String,
    #[serde(default)]
    pub refresh_jwt: Option<String>,
}

/// The author of a post, as seen by the logged-in viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Stable account identifier (`did:plc:...`).
    pub did: String,
    /// Human-readable account name (e.g. `name.bsky.social`).
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Account creation time as Unix seconds, or [`INVALID_TIMESTAMP`].
    pub created_at: i64,
    pub blocked_by_viewer: bool,
    pub muted_by_viewer: bool,
}

/// A post snapshot returned from a feed.
///
/// Snapshots are built per call from the decoded response and carry no
/// cross-call identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub uri: String,
    /// Content hash of the record.
    pub cid: String,
    pub author: Author,
    /// Post text; may be empty.
    pub text: String,
    /// Record creation time as Unix seconds, or [`INVALID_TIMESTAMP`].
    pub created_at: i64,
    /// Time the post was indexed, as Unix seconds, or [`INVALID_TIMESTAMP`].
    pub indexed_at: i64,
    pub like_count: u64,
    pub quote_count: u64,
    pub reply_count: u64,
    pub repost_count: u64,
}
