//! Wiring from configuration to the catalog client, controller and
//! favorites store, plus one handler per subcommand.

use std::sync::Arc;

use anyhow::Context;
use metcat_config::Config;
use metcat_core::highlights::load_highlights;
use metcat_core::{
    AdvanceOutcome, AggregationController, ApiClient, CatalogApi,
    DetailFetcher, FavoritesStore, JsonFavorites, ObjectDetail, ScrollMetrics,
    ScrollTrigger, SearchInitiator, SearchSummary,
};
use metcat_model::{ObjectId, SearchQuery};
use tracing::{debug, info, warn};

use crate::render;

/// Terminal rows standing in for the visible viewport.
const VIEWPORT_HEIGHT: f32 = 800.0;
/// Height of one rendered card in the same units.
const CARD_HEIGHT: f32 = 120.0;

#[derive(Debug)]
pub struct App {
    api: Arc<dyn CatalogApi>,
    controller: Arc<AggregationController>,
    initiator: SearchInitiator,
    trigger: ScrollTrigger,
    favorites: JsonFavorites,
}

impl App {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ApiClient::new(config.api.base_url.clone(), config.api.timeout)
            .context("failed to create catalog client")?;
        let api: Arc<dyn CatalogApi> = Arc::new(client);

        let controller = Arc::new(AggregationController::new(
            DetailFetcher::new(api.clone()),
            config.paging.page_size,
        ));
        let initiator = SearchInitiator::new(api.clone(), controller.clone());
        let trigger = ScrollTrigger::new(config.paging.scroll_threshold);
        debug!(
            base_url = %config.api.base_url,
            page_size = controller.page_size(),
            scroll_threshold = trigger.threshold(),
            "catalog session wired"
        );

        Ok(Self {
            api,
            controller,
            initiator,
            trigger,
            favorites: JsonFavorites::new(config.favorites_path()),
        })
    }

    pub async fn simple_search(&self, text: &str, pages: usize) -> anyhow::Result<()> {
        match self.initiator.simple(text).await {
            Some(summary) => self.show_results(summary, pages).await,
            None => {
                println!("Enter search terms to search the collection.");
                Ok(())
            }
        }
    }

    pub async fn advanced_search(
        &self,
        query: &SearchQuery,
        pages: usize,
    ) -> anyhow::Result<()> {
        let summary = self.initiator.run(query).await;
        self.show_results(summary, pages).await
    }

    /// Scroll to the bottom `pages` times, then print what accumulated.
    async fn show_results(
        &self,
        summary: SearchSummary,
        pages: usize,
    ) -> anyhow::Result<()> {
        debug!(?summary, pages, "search seeded");
        for _ in 0..pages {
            let shown = self.controller.snapshot().results.len();
            let metrics =
                ScrollMetrics::at_bottom(VIEWPORT_HEIGHT, shown as f32 * CARD_HEIGHT);
            match self.trigger.on_scroll(&self.controller, metrics).await {
                Some(AdvanceOutcome::Advanced { .. }) => {}
                outcome => {
                    debug!(?outcome, "no further pages");
                    break;
                }
            }
        }

        print!("{}", render::result_page(&self.controller.snapshot()));
        Ok(())
    }

    pub async fn object(&self, id: ObjectId) -> anyhow::Result<()> {
        let detail = ObjectDetail::load(self.api.as_ref(), &self.favorites, id)
            .await
            .with_context(|| format!("could not load object {id}"))?;
        print!("{}", render::detail(&detail));
        Ok(())
    }

    pub fn toggle_favorite(&self, id: ObjectId) -> anyhow::Result<()> {
        let now = self
            .favorites
            .toggle(id)
            .with_context(|| format!("could not update favorites for {id}"))?;
        info!(object_id = %id, favorite = now, path = %self.favorites.path().display(), "favorites updated");
        if now {
            println!("Added {id} to favorites");
        } else {
            println!("Removed {id} from favorites");
        }
        Ok(())
    }

    pub async fn list_favorites(&self) -> anyhow::Result<()> {
        let ids = self
            .favorites
            .list()
            .context("could not read favorites")?;
        if ids.is_empty() {
            println!("No favorites yet.");
            return Ok(());
        }

        let fetcher = self.controller.fetcher();
        let records = fetcher.fetch_window(&ids).await;
        for (id, record) in ids.iter().zip(records) {
            match record {
                Some(record) => print!("{}", render::card(&record)),
                None => println!("{id:>8}  (unavailable)"),
            }
        }
        Ok(())
    }

    pub async fn departments(&self) -> anyhow::Result<()> {
        let departments = match self.api.departments().await {
            Ok(departments) => departments,
            Err(err) => {
                warn!(error = %err, "failed to load departments");
                Vec::new()
            }
        };
        for department in &departments {
            println!("{}", render::department_line(department));
        }
        Ok(())
    }

    pub async fn highlights(&self) -> anyhow::Result<()> {
        let records = load_highlights(self.controller.fetcher()).await;
        print!("{}", render::cards(&records));
        Ok(())
    }
}
