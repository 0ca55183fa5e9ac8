//! Serde view of Reddit's listing envelope.
//!
//! Listings arrive as `{"data": {"children": [{"data": {...}}, ...]}}`; only
//! the fields the prompt needs are kept.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<Child<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Child<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionData {
    pub title: String,
    /// Empty for link posts; Reddit omits it on some listings.
    #[serde(default)]
    pub selftext: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentData {
    #[serde(default)]
    pub body: String,
}

impl<T> Listing<T> {
    /// Unwrap the envelope into the inner records, keeping provider order.
    pub fn into_items(self) -> Vec<T> {
        self.data.children.into_iter().map(|c| c.data).collect()
    }
}
