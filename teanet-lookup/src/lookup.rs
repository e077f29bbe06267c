//! # Lookup Interface
//!
//! ## Design Principles
//!
//! 1. **Strategy Pattern**: The server talks to a trait so the HTTP client
//!    can be swapped for an in-process stub without touching the session.
//! 2. **Async Boundary**: Lookups are the only network call a session makes;
//!    the future must be `Send` so it can run inside a spawned task.
//! 3. **Single Shot**: One call, one request. No retry, no cache.

use async_trait::async_trait;

use teanet_common::{LookupResult, Summary};

/// Strategy pattern: resolves a free-text subject into a page summary.
#[async_trait]
pub trait SummaryLookup: Send + Sync {
    /// Looks up `subject` (already space-joined from the command tokens).
    async fn summary(&self, subject: &str) -> LookupResult<Summary>;
}
