//! Incremental search aggregation.
//!
//! A search session is an immutable identifier list plus the records
//! hydrated so far. Sessions are seeded by [`SearchInitiator`], grown one
//! window at a time by [`AggregationController::advance`], and advanced
//! from scroll position by [`ScrollTrigger`].

mod controller;
mod fetcher;
mod filter;
mod initiator;
mod scroll;

pub use controller::{AdvanceOutcome, AggregationController, ResultSet, SessionTicket};
pub use fetcher::DetailFetcher;
pub use filter::filter_displayable;
pub use initiator::{SearchInitiator, SearchSummary};
pub use scroll::{DEFAULT_SCROLL_THRESHOLD, ScrollMetrics, ScrollTrigger};
