//! Curated front-page selection.

use metcat_model::{DetailRecord, ObjectId};
use tracing::info;

use crate::search::{DetailFetcher, filter_displayable};

pub const HIGHLIGHT_IDS: [ObjectId; 12] = [
    ObjectId::new(436535),
    ObjectId::new(459088),
    ObjectId::new(437133),
    ObjectId::new(438814),
    ObjectId::new(436965),
    ObjectId::new(435809),
    ObjectId::new(11417),
    ObjectId::new(544730),
    ObjectId::new(435882),
    ObjectId::new(436282),
    ObjectId::new(436973),
    ObjectId::new(437980),
];

/// Hydrate the highlight list in parallel, keeping list order.
///
/// Objects that fail to load or have no image are left out.
pub async fn load_highlights(fetcher: &DetailFetcher) -> Vec<DetailRecord> {
    let records = filter_displayable(fetcher.fetch_window(&HIGHLIGHT_IDS).await);
    info!(
        loaded = records.len(),
        requested = HIGHLIGHT_IDS.len(),
        "highlights loaded"
    );
    records
}
