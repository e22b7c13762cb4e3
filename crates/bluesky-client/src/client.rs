//! Bluesky XRPC client facade.

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::json::json_object;
use crate::mapper;
use crate::transport::{ClientConfig, HttpTransport, Method, ReqwestTransport};
use crate::types::{Post, Session};
use crate::url::build_query;

/// User-Agent header sent with every request.
const USER_AGENT: &str = "BlueskyClient/1.0";

/// Lexicon NSID for feed post records.
const POST_COLLECTION: &str = "app.bsky.feed.post";

/// Client for the Bluesky XRPC API.
///
/// Owns its transport handle and session state exclusively; an instance
/// moves between owners but is not meant for concurrent mutation. The
/// session transitions one way, from unauthenticated to authenticated;
/// there is no logout.
///
/// Every operation performs at most one HTTP round trip and never retries.
pub struct BlueskyClient {
    transport: Box<dyn HttpTransport>,
    service_url: String,
    session: Option<Session>,
}

impl BlueskyClient {
    /// Create a client for the default service (`bsky.social`).
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from transport configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let service_url = config.service_url();
        Self {
            transport: Box::new(ReqwestTransport::new(&config)),
            service_url,
            session: None,
        }
    }

    /// Create a client over an injected transport.
    ///
    /// `service_url` is the base URL including scheme, without a trailing
    /// slash (e.g. `https://bsky.social`).
    pub fn with_transport(
        transport: Box<dyn HttpTransport>,
        service_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            service_url: service_url.into(),
            session: None,
        }
    }

    /// Whether a login has succeeded on this instance.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Handle of the logged-in account, if any.
    pub fn handle(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.handle.as_str())
    }

    /// DID of the logged-in account, if any.
    pub fn did(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.did.as_str())
    }

    /// Base URL of the configured service.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Authenticate with identifier and password.
    ///
    /// On success the session (access token, DID, handle, refresh token)
    /// is stored and subsequent requests carry a bearer token. Any
    /// transport failure, unparsable response, or response missing a
    /// required field leaves the client unauthenticated.
    pub async fn login(
        &mut self,
        identifier: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let body = json_object([("identifier", identifier), ("password", password)]);

        let response = self
            .make_request(
                Method::Post,
                "xrpc/com.atproto.server.createSession",
                &[],
                Some(body),
            )
            .await?;

        let session = mapper::parse_session(&response)?;
        debug!(did = %session.did, handle = %session.handle, "authenticated");

        self.session = Some(session);
        Ok(())
    }

    /// Publish a post with the given text.
    ///
    /// Requires a session and non-empty text; both preconditions are
    /// checked before any request is sent. Not idempotent: calling twice
    /// creates two posts.
    pub async fn create_post(&self, text: &str) -> Result<(), ClientError> {
        let Some(session) = &self.session else {
            return Err(ClientError::NotLoggedIn);
        };
        if text.is_empty() {
            return Err(ClientError::BadInput);
        }

        let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let body = serde_json::json!({
            "collection": POST_COLLECTION,
            "repo": session.did,
            "record": {
                "text": text,
                "createdAt": created_at,
            },
        })
        .to_string();

        self.make_request(
            Method::Post,
            "xrpc/com.atproto.repo.createRecord",
            &[],
            Some(body),
        )
        .await?;

        Ok(())
    }

    /// Fetch one page of posts from a feed generator.
    ///
    /// An empty feed is `Ok` with an empty vec.
    pub async fn get_feed_posts(
        &self,
        feed_uri: &str,
        limit: u32,
    ) -> Result<Vec<Post>, ClientError> {
        if !self.is_logged_in() {
            return Err(ClientError::NotLoggedIn);
        }

        let params = [
            ("feed", feed_uri.to_string()),
            ("limit", limit.to_string()),
        ];
        let response = self
            .make_request(Method::Get, "xrpc/app.bsky.feed.getFeed", &params, None)
            .await?;

        mapper::parse_post_list(&response, "feed")
    }

    /// Fetch one page of an author's posts, excluding replies.
    pub async fn get_author_posts(
        &self,
        actor: &str,
        limit: u32,
    ) -> Result<Vec<Post>, ClientError> {
        if !self.is_logged_in() {
            return Err(ClientError::NotLoggedIn);
        }

        let params = [
            ("actor", actor.to_string()),
            ("limit", limit.to_string()),
            ("filter", "posts_no_replies".to_string()),
        ];
        let response = self
            .make_request(
                Method::Get,
                "xrpc/app.bsky.feed.getAuthorFeed",
                &params,
                None,
            )
            .await?;

        mapper::parse_post_list(&response, "feed")
    }

    /// Number of unread notifications.
    ///
    /// Returns -1 both when not logged in and when the request or parse
    /// fails; the two cases are not distinguishable from the return
    /// value. A response without a `count` field reads as 0.
    pub async fn get_unread_count(&self) -> i64 {
        if !self.is_logged_in() {
            return -1;
        }

        let response = match self
            .make_request(
                Method::Get,
                "xrpc/app.bsky.notification.getUnreadCount",
                &[],
                None,
            )
            .await
        {
            Ok(response) => response,
            Err(_) => return -1,
        };

        mapper::parse_unread_count(&response).unwrap_or(-1)
    }

    /// Execute one round trip against an XRPC endpoint.
    ///
    /// Success is exactly status 200 with a non-empty body; anything else
    /// is `ResponseFail`.
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
        body: Option<String>,
    ) -> Result<String, ClientError> {
        let mut url = format!("{}/{}", self.service_url, endpoint);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&build_query(params));
        }

        let mut headers: Vec<(&'static str, String)> = vec![
            ("User-Agent", USER_AGENT.to_string()),
            ("Content-Type", "application/json".to_string()),
        ];
        if let Some(session) = &self.session {
            headers.push(("Authorization", format!("Bearer {}", session.access_jwt)));
        }

        let response = self
            .transport
            .execute(method, &url, &headers, body)
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "transport failure");
                ClientError::ResponseFail
            })?;

        if response.status != 200 {
            warn!(endpoint, status = response.status, "request failed");
            return Err(ClientError::ResponseFail);
        }
        if response.body.is_empty() {
            warn!(endpoint, "empty response body");
            return Err(ClientError::ResponseFail);
        }

        Ok(response.body)
    }
}

impl Default for BlueskyClient {
    fn default() -> Self {
        Self::new()
    }
}
