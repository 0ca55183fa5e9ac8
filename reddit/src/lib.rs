//! Reddit API client used as the pipeline's content source.
//!
//! Implements [`persona::ContentSource`] over Reddit's application-only
//! OAuth flow: a client-credentials token request against `www.reddit.com`,
//! then the two listing endpoints on `oauth.reddit.com` for a user's newest
//! submissions and comments.

pub mod client;
pub mod listing;

pub use client::{Credentials, RedditClient};
