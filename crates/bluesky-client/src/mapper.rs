//! Defensive mapping from XRPC response documents to domain records.
//!
//! Field access never fails: an absent or wrong-typed field degrades to a
//! benign default (`""`, `0`, `false`, or the invalid-timestamp sentinel).
//! Only a wholly unparsable document, or a login response missing a
//! required field, is reported as an error.

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::types::{Author, INVALID_TIMESTAMP, Post, Session};

/// Parse a `com.atproto.server.createSession` response.
///
/// `accessJwt`, `did`, and `handle` are required; `refreshJwt` is
/// captured when present.
pub fn parse_session(body: &str) -> Result<Session, ClientError> {
    let session: Session = serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "session response did not parse");
        ClientError::ResponseParse
    })?;

    Ok(session)
}

/// Parse a feed-shaped response (`{feed: [{post: {...}}]}`) into posts.
///
/// A missing or empty array yields an empty vec; individual elements are
/// mapped defensively and never rejected.
pub fn parse_post_list(body: &str, array_field: &str) -> Result<Vec<Post>, ClientError> {
    let doc: Value = serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "feed response did not parse");
        ClientError::ResponseParse
    })?;

    let entries = match doc.get(array_field).and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Ok(Vec::new()),
    };

    Ok(entries.iter().map(map_feed_entry).collect())
}

/// Parse an `app.bsky.notification.getUnreadCount` response.
///
/// A parsed document with a missing or wrong-typed `count` yields 0.
pub fn parse_unread_count(body: &str) -> Result<i64, ClientError> {
    let doc: Value = serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "unread-count response did not parse");
        ClientError::ResponseParse
    })?;

    Ok(doc.get("count").and_then(Value::as_i64).unwrap_or(0))
}

fn map_feed_entry(entry: &Value) -> Post {
    let post = field(entry, "post");
    let record = field(post, "record");
    let author = field(post, "author");
    let viewer = field(author, "viewer");

    Post {
        uri: str_or_empty(post, "uri"),
        cid: str_or_empty(post, "cid"),
        author: Author {
            did: str_or_empty(author, "did"),
            handle: str_or_empty(author, "handle"),
            display_name: str_opt(author, "displayName"),
            avatar_url: str_opt(author, "avatar"),
            created_at: datetime_or_invalid(author, "createdAt"),
            blocked_by_viewer: bool_or_false(viewer, "blockedBy"),
            muted_by_viewer: bool_or_false(viewer, "muted"),
        },
        text: str_or_empty(record, "text"),
        created_at: datetime_or_invalid(record, "createdAt"),
        indexed_at: datetime_or_invalid(post, "indexedAt"),
        like_count: uint_or_zero(post, "likeCount"),
        quote_count: uint_or_zero(post, "quoteCount"),
        reply_count: uint_or_zero(post, "replyCount"),
        repost_count: uint_or_zero(post, "repostCount"),
    }
}

/// Safe object-field lookup; absent fields read as `Null`.
fn field<'a>(v: &'a Value, key: &str) -> &'a Value {
    v.get(key).unwrap_or(&Value::Null)
}

fn str_or_empty(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn str_opt(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(String::from)
}

fn uint_or_zero(v: &Value, key: &str) -> u64 {
    v.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn bool_or_false(v: &Value, key: &str) -> bool {
    v.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn datetime_or_invalid(v: &Value, key: &str) -> i64 {
    match v.get(key).and_then(Value::as_str) {
        Some(s) => parse_datetime(s),
        None => INVALID_TIMESTAMP,
    }
}

/// Parse the `YYYY-MM-DDTHH:MM:SS` prefix of an ISO-8601 datetime into
/// Unix seconds.
///
/// Fractional seconds and the zone suffix are discarded; the value is
/// read as UTC regardless of the suffix, a lossy behavior carried over
/// from the original datetime handling. Returns [`INVALID_TIMESTAMP`]
/// when the prefix is absent or malformed.
pub fn parse_datetime(s: &str) -> i64 {
    let Some(prefix) = s.get(..19) else {
        return INVALID_TIMESTAMP;
    };

    NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(INVALID_TIMESTAMP)
}
