//! Bluesky XRPC client.
//!
//! This crate provides a small client for the Bluesky HTTP/JSON API:
//! authentication, posting, feed retrieval, and notification counts.
//!
//! ## Features
//!
//! - **Client**: session handling and the public operations (login,
//!   create_post, feed and author-feed pages, unread count)
//! - **Transport**: a narrow [`HttpTransport`] seam with a reqwest-backed
//!   implementation, swappable for test doubles
//! - **Mapper**: defensive JSON-to-domain conversion that degrades missing
//!   or malformed fields to defaults instead of failing the call
//! - **Text**: sanitizing helpers for post content

mod client;
mod error;
mod json;
mod mapper;
mod text;
mod transport;
mod types;
mod url;

pub use client::BlueskyClient;
pub use error::ClientError;
pub use json::json_object;
pub use mapper::parse_datetime;
pub use text::{filter_text, split_into_words};
pub use transport::{
    ClientConfig, HttpResponse, HttpTransport, Method, ReqwestTransport, TransportError,
};
pub use types::{Author, INVALID_TIMESTAMP, Post, Session};
pub use url::{build_query, url_decode, url_encode};
