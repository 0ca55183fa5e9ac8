//! HTTP client for Reddit's application-only OAuth API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use persona::{Comment, ContentSource, Post, SourceError};

use crate::listing::{CommentData, Listing, SubmissionData};

const DEFAULT_AUTH_URL: &str = "https://www.reddit.com";
const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

/// Number of newest entries requested per listing.
const PAGE_LIMIT: u32 = 10;

/// Static credentials for the script-type Reddit app, read from process
/// configuration and passed through uninterpreted: bad or missing values
/// surface as authentication errors at call time, not at construction.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

/// Client for the two user-activity listings.
///
/// Stateless across requests: each [`ContentSource::user_content`] call
/// fetches a fresh app-only token and then the submissions and comments
/// listings, strictly in that order.
#[derive(Clone)]
pub struct RedditClient {
    creds: Credentials,
    http: Client,
    auth_url: String,
    api_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl RedditClient {
    /// Create a client against the public Reddit endpoints.
    pub fn new(creds: Credentials) -> Self {
        Self::with_endpoints(creds, DEFAULT_AUTH_URL, DEFAULT_API_URL)
    }

    /// Create a client against explicit endpoints (used by tests).
    pub fn with_endpoints(
        creds: Credentials,
        auth_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            creds,
            http: Client::new(),
            auth_url: auth_url.into().trim_end_matches('/').to_string(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn access_token(&self) -> Result<String, SourceError> {
        let url = format!("{}/api/v1/access_token", self.auth_url);
        debug!(%url, "requesting app-only token");
        let resp = self
            .http
            .post(url)
            .basic_auth(&self.creds.client_id, Some(&self.creds.client_secret))
            .header(reqwest::header::USER_AGENT, &self.creds.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Api(format!(
                "token request failed ({status}): {body}"
            )));
        }
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;
        Ok(token.access_token)
    }

    async fn listing<T: serde::de::DeserializeOwned>(
        &self,
        token: &str,
        username: &str,
        kind: &str,
    ) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/user/{}/{}", self.api_url, username, kind);
        info!(%url, "fetching listing");
        let limit = PAGE_LIMIT.to_string();
        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, &self.creds.user_agent)
            .query(&[("sort", "new"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Api(format!(
                "listing request failed ({status}): {body}"
            )));
        }
        let listing: Listing<T> = resp
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;
        Ok(listing.into_items())
    }
}

#[async_trait]
impl ContentSource for RedditClient {
    async fn user_content(
        &self,
        username: &str,
    ) -> Result<(Vec<Post>, Vec<Comment>), SourceError> {
        let token = self.access_token().await?;

        let posts = self
            .listing::<SubmissionData>(&token, username, "submitted")
            .await?
            .into_iter()
            .map(|s| Post {
                title: s.title,
                body: s.selftext,
            })
            .collect();

        let comments = self
            .listing::<CommentData>(&token, username, "comments")
            .await?
            .into_iter()
            .map(|c| Comment { body: c.body })
            .collect();

        Ok((posts, comments))
    }
}
