//! # Page Summary
//!
//! Decode the REST summary JSON shape and render it as a text block.
//!
//! ## Design Principles
//!
//! 1. **Lenient Fields**: Missing or `null` fields decode to empty strings;
//!    there is no separate "not found" state.
//! 2. **Strict Shape**: A body that is not JSON, or whose fields have the
//!    wrong type, is a decode error.
//! 3. **Transient Value**: A `Summary` lives only long enough to be formatted.

use std::fmt;

use serde::Deserialize;

use crate::error::{LookupError, LookupResult};

/// The four fields shown to the client for a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub description: String,
    pub extract: String,
    /// Canonical desktop page URL (`content_urls.desktop.page`).
    pub page_url: String,
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    title: Option<String>,
    description: Option<String>,
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: Option<String>,
}

impl Summary {
    /// Decodes a summary from a raw JSON response body.
    pub fn from_json(body: &[u8]) -> LookupResult<Self> {
        let payload: SummaryPayload = serde_json::from_slice(body).map_err(LookupError::Decode)?;

        let page_url = payload
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page)
            .unwrap_or_default();

        Ok(Summary {
            title: payload.title.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            extract: payload.extract.unwrap_or_default(),
            page_url,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}\n\n{}\n\nRead more: {}",
            self.title, self.description, self.extract, self.page_url
        )
    }
}
