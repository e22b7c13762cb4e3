//! Error types for the Bluesky client.

use thiserror::Error;

/// Errors that can occur when talking to the Bluesky XRPC API.
///
/// Every public operation reports failures through this closed enum;
/// nothing panics across the crate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The operation requires an authenticated session.
    #[error("not logged in")]
    NotLoggedIn,

    /// The response body was not a parsable JSON document, or a login
    /// response was missing a required field.
    #[error("response could not be parsed")]
    ResponseParse,

    /// Transport failure, non-200 status, or an empty response body.
    #[error("request failed")]
    ResponseFail,

    /// The caller passed an invalid argument (e.g. empty post text).
    #[error("bad input")]
    BadInput,
}
