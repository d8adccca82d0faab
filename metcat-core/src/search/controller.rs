use std::sync::Arc;

use metcat_model::{DetailRecord, IdentifierList, ObjectId};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::fetcher::DetailFetcher;
use super::filter::filter_displayable;

/// Owned copy of the progressive result state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Length of the session's identifier list.
    pub total: usize,
    /// Identifiers attempted so far, including ones that were filtered out.
    pub displayed: usize,
    /// Displayable records in identifier-list order.
    pub results: Vec<DetailRecord>,
}

impl ResultSet {
    pub fn is_exhausted(&self) -> bool {
        self.displayed >= self.total
    }
}

/// Handle naming one search session.
///
/// Merges and seeds carrying a ticket from a superseded session are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionTicket(u64);

/// What a call to [`AggregationController::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// One window was fetched and merged.
    Advanced { attempted: usize, appended: usize },
    /// Another advance is in flight; nothing changed.
    Busy,
    /// Every identifier has been attempted; nothing changed.
    Exhausted,
    /// A search is still seeding; nothing changed.
    Loading,
    /// A new search replaced this session while the window was in flight,
    /// or the runtime shut the window task down; the batch was discarded.
    Stale,
}

impl AdvanceOutcome {
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

#[derive(Debug)]
struct Session {
    generation: u64,
    ids: IdentifierList,
    displayed: usize,
    results: Vec<DetailRecord>,
    advancing: bool,
    loading: bool,
}

impl Session {
    fn empty(generation: u64) -> Self {
        Self {
            generation,
            ids: IdentifierList::from(Vec::new()),
            displayed: 0,
            results: Vec::new(),
            advancing: false,
            loading: false,
        }
    }

    fn ticket(&self) -> SessionTicket {
        SessionTicket(self.generation)
    }
}

/// Session state shared between the controller and its window tasks.
#[derive(Debug)]
struct Shared {
    session: Mutex<Session>,
    advancing_tx: watch::Sender<bool>,
}

impl Shared {
    /// Apply a finished window and clear `advancing` under one lock.
    fn merge(
        &self,
        ticket: SessionTicket,
        attempted: usize,
        records: Vec<DetailRecord>,
    ) -> AdvanceOutcome {
        let mut session = self.session.lock();
        if session.generation != ticket.0 {
            debug!(
                stale = ticket.0,
                current = session.generation,
                "discarding window from superseded session"
            );
            return AdvanceOutcome::Stale;
        }

        let appended = records.len();
        session.results.extend(records);
        session.displayed = (session.displayed + attempted).min(session.ids.len());
        session.advancing = false;
        self.advancing_tx.send_replace(false);
        debug!(
            displayed = session.displayed,
            total = session.ids.len(),
            appended,
            "window merged"
        );
        AdvanceOutcome::Advanced {
            attempted,
            appended,
        }
    }

    fn finish(&self, ticket: SessionTicket) {
        let mut session = self.session.lock();
        if session.generation == ticket.0 && session.advancing {
            session.advancing = false;
            self.advancing_tx.send_replace(false);
        }
    }
}

/// Sole owner of the search result state.
///
/// All mutation goes through [`seed`](Self::seed),
/// [`seed_session`](Self::seed_session) and [`advance`](Self::advance).
/// At most one advance runs at a time; the `advancing` flag is published
/// on a watch channel so callers can wait for it to clear.
///
/// Each window runs on its own task. A caller that stops waiting on
/// [`advance`](Self::advance) does not cancel the window: it is still
/// fetched, merged and the flag cleared.
#[derive(Debug)]
pub struct AggregationController {
    fetcher: DetailFetcher,
    page_size: usize,
    shared: Arc<Shared>,
}

impl AggregationController {
    /// `page_size` is clamped to at least one identifier per window.
    pub fn new(fetcher: DetailFetcher, page_size: usize) -> Self {
        let (advancing_tx, _) = watch::channel(false);
        Self {
            fetcher,
            page_size: page_size.max(1),
            shared: Arc::new(Shared {
                session: Mutex::new(Session::empty(0)),
                advancing_tx,
            }),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn fetcher(&self) -> &DetailFetcher {
        &self.fetcher
    }

    /// Discard the current session and mark a new one as loading.
    ///
    /// Until the returned ticket is seeded, [`advance`](Self::advance)
    /// reports [`AdvanceOutcome::Loading`]. Any advance still in flight
    /// for the old session will come back [`AdvanceOutcome::Stale`].
    pub fn begin_session(&self) -> SessionTicket {
        let mut session = self.shared.session.lock();
        let generation = session.generation + 1;
        *session = Session::empty(generation);
        session.loading = true;
        self.shared.advancing_tx.send_replace(false);
        debug!(generation, "search session started");
        session.ticket()
    }

    /// Install the identifier list and first page for `ticket`.
    ///
    /// `first_page` must already be filtered and correspond to the first
    /// `page_size` identifiers. Returns `false` and changes nothing when
    /// a newer session has started since `ticket` was issued.
    pub fn seed_session(
        &self,
        ticket: SessionTicket,
        ids: IdentifierList,
        first_page: Vec<DetailRecord>,
    ) -> bool {
        let mut session = self.shared.session.lock();
        if session.generation != ticket.0 {
            debug!(
                stale = ticket.0,
                current = session.generation,
                "ignoring seed for superseded session"
            );
            return false;
        }

        let total = ids.len();
        session.displayed = self.page_size.min(total);
        session.ids = ids;
        session.results = first_page;
        session.advancing = false;
        session.loading = false;
        self.shared.advancing_tx.send_replace(false);

        info!(
            generation = session.generation,
            total,
            displayed = session.displayed,
            shown = session.results.len(),
            "search session seeded"
        );
        true
    }

    /// Replace all state with a freshly seeded session.
    pub fn seed(
        &self,
        ids: IdentifierList,
        first_page: Vec<DetailRecord>,
    ) -> SessionTicket {
        let ticket = self.begin_session();
        self.seed_session(ticket, ids, first_page);
        ticket
    }

    /// Fetch, filter and merge the next window of identifiers.
    ///
    /// No-ops (without touching state) while another advance is in
    /// flight, while a search is seeding, or once every identifier has
    /// been attempted.
    ///
    /// The window runs on a spawned task, so dropping this future only
    /// stops waiting for the outcome. Must be called within a Tokio
    /// runtime.
    pub async fn advance(&self) -> AdvanceOutcome {
        let (ticket, window) = {
            let mut session = self.shared.session.lock();
            if session.loading {
                return AdvanceOutcome::Loading;
            }
            if session.advancing {
                return AdvanceOutcome::Busy;
            }
            let total = session.ids.len();
            if session.displayed >= total {
                return AdvanceOutcome::Exhausted;
            }

            let start = session.displayed;
            let end = (start + self.page_size).min(total);
            let window: Vec<ObjectId> = session.ids[start..end].to_vec();
            session.advancing = true;
            self.shared.advancing_tx.send_replace(true);
            (session.ticket(), window)
        };

        debug!(
            generation = ticket.0,
            window = window.len(),
            "advancing search results"
        );
        let shared = Arc::clone(&self.shared);
        let fetcher = self.fetcher.clone();
        let task = tokio::spawn(async move {
            let _guard = AdvancingGuard {
                shared: Arc::clone(&shared),
                ticket,
            };
            let batch = fetcher.fetch_window(&window).await;
            let records = filter_displayable(batch);
            shared.merge(ticket, window.len(), records)
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => {
                warn!(generation = ticket.0, error = %err, "advance task cancelled before merging");
                AdvanceOutcome::Stale
            }
        }
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> ResultSet {
        let session = self.shared.session.lock();
        ResultSet {
            total: session.ids.len(),
            displayed: session.displayed,
            results: session.results.clone(),
        }
    }

    pub fn is_advancing(&self) -> bool {
        self.shared.session.lock().advancing
    }

    pub fn is_loading(&self) -> bool {
        self.shared.session.lock().loading
    }

    pub fn is_exhausted(&self) -> bool {
        let session = self.shared.session.lock();
        session.displayed >= session.ids.len()
    }

    /// Receiver tracking the `advancing` flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shared.advancing_tx.subscribe()
    }
}

/// Clears `advancing` for its session if the window task unwinds before
/// merging.
struct AdvancingGuard {
    shared: Arc<Shared>,
    ticket: SessionTicket,
}

impl Drop for AdvancingGuard {
    fn drop(&mut self) {
        self.shared.finish(self.ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CatalogApi;
    use crate::error::{CatalogError, CatalogResult};
    use async_trait::async_trait;
    use metcat_model::{Department, SearchQuery, SearchResponse};
    use reqwest::StatusCode;

    /// Every object has an image except ids divisible by five.
    #[derive(Debug)]
    struct Catalog;

    #[async_trait]
    impl CatalogApi for Catalog {
        async fn search(&self, _: &SearchQuery) -> CatalogResult<SearchResponse> {
            Err(CatalogError::status("/search", StatusCode::NOT_IMPLEMENTED))
        }

        async fn object(&self, id: ObjectId) -> CatalogResult<DetailRecord> {
            let mut record = DetailRecord::new(id);
            if id.get() % 5 != 0 {
                record.primary_image = Some(format!("https://img.test/{id}.jpg"));
            }
            Ok(record)
        }

        async fn departments(&self) -> CatalogResult<Vec<Department>> {
            Ok(Vec::new())
        }
    }

    #[derive(Debug)]
    struct Exploding;

    #[async_trait]
    impl CatalogApi for Exploding {
        async fn search(&self, _: &SearchQuery) -> CatalogResult<SearchResponse> {
            Err(CatalogError::status("/search", StatusCode::NOT_IMPLEMENTED))
        }

        async fn object(&self, id: ObjectId) -> CatalogResult<DetailRecord> {
            panic!("object {id} blew up");
        }

        async fn departments(&self) -> CatalogResult<Vec<Department>> {
            Ok(Vec::new())
        }
    }

    fn controller(page_size: usize) -> AggregationController {
        AggregationController::new(DetailFetcher::new(Arc::new(Catalog)), page_size)
    }

    fn ids(range: std::ops::Range<u32>) -> IdentifierList {
        range.map(ObjectId).collect::<Vec<_>>().into()
    }

    #[tokio::test]
    async fn unseeded_controller_is_exhausted() {
        let controller = controller(20);
        assert_eq!(controller.advance().await, AdvanceOutcome::Exhausted);
        assert_eq!(controller.snapshot(), ResultSet::default());
    }

    #[tokio::test]
    async fn loading_session_refuses_to_advance() {
        let controller = controller(2);
        controller.seed(ids(1..10), Vec::new());
        let ticket = controller.begin_session();
        assert!(controller.is_loading());
        assert_eq!(controller.advance().await, AdvanceOutcome::Loading);

        assert!(controller.seed_session(ticket, ids(1..10), Vec::new()));
        assert!(!controller.is_loading());
        assert!(controller.advance().await.is_advanced());
    }

    #[tokio::test]
    async fn seed_for_superseded_ticket_is_ignored() {
        let controller = controller(2);
        let old = controller.begin_session();
        let current = controller.begin_session();
        assert!(!controller.seed_session(old, ids(1..4), Vec::new()));
        assert!(controller.is_loading());
        assert!(controller.seed_session(current, ids(1..3), Vec::new()));
        assert_eq!(controller.snapshot().total, 2);
    }

    #[tokio::test]
    async fn advance_counts_attempts_not_successes() {
        let controller = controller(5);
        controller.seed(ids(1..13), Vec::new());
        let outcome = controller.advance().await;
        // ids 6..=10, of which 10 has no image
        assert_eq!(
            outcome,
            AdvanceOutcome::Advanced {
                attempted: 5,
                appended: 4
            }
        );
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.displayed, 10);
        assert_eq!(snapshot.results.len(), 4);
    }

    #[tokio::test]
    async fn subscribers_see_flag_cleared_after_advance() {
        let controller = controller(3);
        controller.seed(ids(1..7), Vec::new());
        let rx = controller.subscribe();
        controller.advance().await;
        assert!(!*rx.borrow());
        assert!(!controller.is_advancing());
    }

    #[tokio::test]
    async fn panicking_window_still_clears_the_flag() {
        let controller = Arc::new(AggregationController::new(
            DetailFetcher::new(Arc::new(Exploding)),
            2,
        ));
        controller.seed(ids(1..5), Vec::new());

        let caller = Arc::clone(&controller);
        let joined = tokio::spawn(async move { caller.advance().await }).await;
        assert!(joined.is_err_and(|err| err.is_panic()));
        assert!(!controller.is_advancing());
        assert!(!*controller.subscribe().borrow());
        assert_eq!(controller.snapshot().displayed, 2);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(controller(0).page_size(), 1);
    }
}
