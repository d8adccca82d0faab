use metcat_model::{DetailRecord, ObjectId};
use tracing::debug;

use crate::api::CatalogApi;
use crate::error::{DetailError, FavoritesError};
use crate::favorites::FavoritesStore;

/// One object opened on its own, with its favorite state.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDetail {
    pub record: DetailRecord,
    pub favorite: bool,
}

impl ObjectDetail {
    /// Unlike window hydration, a failure here reaches the caller, and so
    /// does an unreadable favorites store.
    pub async fn load(
        api: &dyn CatalogApi,
        favorites: &dyn FavoritesStore,
        id: ObjectId,
    ) -> Result<Self, DetailError> {
        debug!(object_id = %id, "loading object detail");
        let record = api.object(id).await?;
        let favorite = favorites.is_favorite(id)?;
        Ok(Self { record, favorite })
    }

    pub fn id(&self) -> ObjectId {
        self.record.object_id
    }

    pub fn toggle_favorite(
        &mut self,
        favorites: &dyn FavoritesStore,
    ) -> Result<bool, FavoritesError> {
        self.favorite = favorites.toggle(self.id())?;
        Ok(self.favorite)
    }
}
