// teanet-lookup - Page summary lookups for Teanet
//
// This crate defines the lookup strategy trait and its Wikipedia client

pub mod lookup;
pub mod wikipedia;

pub use lookup::SummaryLookup;
pub use wikipedia::{DEFAULT_BASE_URL, TEANET_USER_AGENT, WikipediaClient};
