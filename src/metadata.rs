//! Defines [`Metadata`], the title, date, and tags describing a single post.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The decoded front matter of a post. Any field missing from the JSON object
/// takes its zero value, and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    /// The title of the post.
    #[serde(default, rename = "Title", alias = "title")]
    pub title: String,

    /// The publication date of the post.
    #[serde(default, rename = "Date", alias = "date")]
    pub date: Timestamp,

    /// The tags associated with the post, in the order they were written.
    #[serde(default, rename = "Tags", alias = "tags")]
    pub tags: Vec<String>,
}
