use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::state::page::page_state::PageState;
use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::filter_set::{FilterField, FilterSet};
use crate::errors::ApiError;

/// The one backend call a page makes for a given filter set.
#[async_trait]
pub trait PageFetcher: Send + Sync + 'static {
    type Output: Clone + Send + Sync + 'static;

    async fn fetch(&self, filters: &FilterSet) -> Result<Self::Output, ApiError>;
}

/// Issued when a fetch starts; only the ticket of the latest generation may
/// write its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub filters: FilterSet,
}

struct PageInner<T> {
    filters: FilterSet,
    generation: u64,
    state: PageState<T>,
}

/// Filter state plus the `Loading | Error | Ready` machine of one page.
///
/// Clones share the same state, so a fetch running on another task still
/// lands on the page that issued it.
pub struct PageController<F: PageFetcher> {
    page: &'static str,
    fetcher: Arc<F>,
    inner: Arc<RwLock<PageInner<F::Output>>>,
}

impl<F: PageFetcher> Clone for PageController<F> {
    fn clone(&self) -> Self {
        Self {
            page: self.page,
            fetcher: Arc::clone(&self.fetcher),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: PageFetcher> PageController<F> {
    pub fn new(page: &'static str, fetcher: F, filters: FilterSet) -> Self {
        Self {
            page,
            fetcher: Arc::new(fetcher),
            inner: Arc::new(RwLock::new(PageInner {
                filters,
                generation: 0,
                state: PageState::Loading,
            })),
        }
    }

    pub fn page(&self) -> &'static str {
        self.page
    }

    pub async fn state(&self) -> PageState<F::Output> {
        self.inner.read().await.state.clone()
    }

    pub async fn filters(&self) -> FilterSet {
        self.inner.read().await.filters.clone()
    }

    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Enter `Loading` and fetch with the current filters, waiting for the result.
    pub async fn load(&self) -> PageState<F::Output> {
        let ticket = self.begin().await;
        self.run(ticket).await
    }

    /// Same filters, new generation.
    pub async fn retry(&self) -> PageState<F::Output> {
        debug!(page = self.page, "Manual retry");
        self.load().await
    }

    /// Change one filter. When the effective value changes, a fetch is
    /// spawned and its handle returned; otherwise nothing happens.
    pub async fn set_filter(
        &self,
        field: FilterField,
        value: Option<String>,
    ) -> Option<JoinHandle<()>> {
        debug!(page = self.page, field = field.as_key(), value = ?value, "Filter change");
        self.update_filters(move |filters| filters.set(field, value))
            .await
    }

    /// Both date bounds in one step, so a range change costs a single fetch.
    pub async fn set_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<JoinHandle<()>> {
        let start = start.map(FormatUtil::iso_date);
        let end = end.map(FormatUtil::iso_date);
        self.update_filters(move |filters| {
            let start_changed = filters.set(FilterField::StartDate, start);
            let end_changed = filters.set(FilterField::EndDate, end);
            start_changed || end_changed
        })
        .await
    }

    /// Apply `update` to the filters; it must report whether anything changed.
    pub async fn update_filters<U>(&self, update: U) -> Option<JoinHandle<()>>
    where
        U: FnOnce(&mut FilterSet) -> bool + Send,
    {
        let ticket = {
            let mut inner = self.inner.write().await;
            if !update(&mut inner.filters) {
                return None;
            }
            Self::issue(self.page, &mut inner)
        };

        let this = self.clone();
        Some(tokio::spawn(async move {
            this.run(ticket).await;
        }))
    }

    /// Start a new generation: state becomes `Loading` and older tickets go stale.
    pub async fn begin(&self) -> FetchTicket {
        let mut inner = self.inner.write().await;
        Self::issue(self.page, &mut inner)
    }

    /// Store `result` if `ticket` is still current. Returns whether it was applied.
    pub async fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<F::Output, ApiError>,
    ) -> bool {
        let mut inner = self.inner.write().await;

        if ticket.generation != inner.generation {
            debug!(
                page = self.page,
                stale = ticket.generation,
                current = inner.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        inner.state = match result {
            Ok(data) => PageState::Ready(data),
            Err(e) => PageState::Error(e.to_string()),
        };
        debug!(
            page = self.page,
            generation = ticket.generation,
            state = inner.state.label(),
            "Fetch applied"
        );
        true
    }

    fn issue(page: &'static str, inner: &mut PageInner<F::Output>) -> FetchTicket {
        inner.generation += 1;
        inner.state = PageState::Loading;
        debug!(page, generation = inner.generation, "Fetch issued");
        FetchTicket {
            generation: inner.generation,
            filters: inner.filters.clone(),
        }
    }

    async fn run(&self, ticket: FetchTicket) -> PageState<F::Output> {
        let result = self.fetcher.fetch(&ticket.filters).await;
        self.complete(ticket, result).await;
        self.state().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use std::sync::Mutex;
    use tokio::sync::{mpsc, oneshot};

    type Gate = oneshot::Sender<Result<String, ApiError>>;

    /// Each fetch reports its filters and waits until the test opens its gate.
    struct GatedFetcher {
        calls: mpsc::UnboundedSender<(FilterSet, Gate)>,
    }

    #[async_trait]
    impl PageFetcher for GatedFetcher {
        type Output = String;

        async fn fetch(&self, filters: &FilterSet) -> Result<String, ApiError> {
            let (tx, rx) = oneshot::channel();
            self.calls
                .send((filters.clone(), tx))
                .map_err(ApiError::unexpected)?;
            rx.await
                .unwrap_or_else(|_| Err(ApiError::unexpected("gate dropped")))
        }
    }

    /// Answers from a queue, immediately.
    struct QueuedFetcher {
        replies: Mutex<Vec<Result<String, ApiError>>>,
        seen: Mutex<Vec<FilterSet>>,
    }

    impl QueuedFetcher {
        fn new(replies: Vec<Result<String, ApiError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageFetcher for QueuedFetcher {
        type Output = String;

        async fn fetch(&self, filters: &FilterSet) -> Result<String, ApiError> {
            self.seen.lock().unwrap().push(filters.clone());
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn gated() -> (
        PageController<GatedFetcher>,
        mpsc::UnboundedReceiver<(FilterSet, Gate)>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ctrl = PageController::new("test", GatedFetcher { calls: tx }, FilterSet::default());
        (ctrl, rx)
    }

    #[tokio::test]
    async fn starts_loading_then_ready() {
        let ctrl = PageController::new(
            "test",
            QueuedFetcher::new(vec![Ok("data".into())]),
            FilterSet::default(),
        );
        assert!(ctrl.state().await.is_loading());

        let state = ctrl.load().await;
        assert_eq!(state, PageState::Ready("data".to_string()));
        assert_eq!(ctrl.generation().await, 1);
    }

    #[tokio::test]
    async fn failure_stores_user_facing_message_and_retry_recovers() {
        let ctrl = PageController::new(
            "test",
            QueuedFetcher::new(vec![
                Err(ApiError::Server {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "db down".into(),
                }),
                Ok("back".into()),
            ]),
            FilterSet::default(),
        );

        assert_eq!(ctrl.load().await, PageState::Error("db down".into()));
        assert_eq!(ctrl.retry().await, PageState::Ready("back".into()));

        let seen = ctrl.fetcher.seen.lock().unwrap().clone();
        assert_eq!(seen[0], seen[1]);
    }

    #[tokio::test]
    async fn unchanged_filter_does_not_refetch() {
        let (ctrl, _calls) = gated();
        assert!(ctrl.set_filter(FilterField::Level, None).await.is_none());
        assert!(ctrl
            .set_filter(FilterField::Level, Some(String::new()))
            .await
            .is_none());
        assert_eq!(ctrl.generation().await, 0);
    }

    #[tokio::test]
    async fn filter_change_refetches_with_new_filters() {
        let (ctrl, mut calls) = gated();

        let handle = ctrl
            .set_filter(FilterField::Level, Some("senior".into()))
            .await
            .unwrap();
        assert!(ctrl.state().await.is_loading());

        let (filters, gate) = calls.recv().await.unwrap();
        assert_eq!(filters.level.as_deref(), Some("senior"));
        gate.send(Ok("seniors".into())).unwrap();
        handle.await.unwrap();

        assert_eq!(ctrl.state().await, PageState::Ready("seniors".into()));
    }

    #[tokio::test]
    async fn date_range_change_is_one_fetch() {
        let (ctrl, mut calls) = gated();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1);
        let end = NaiveDate::from_ymd_opt(2024, 1, 31);

        let handle = ctrl.set_date_range(start, end).await.unwrap();
        let (filters, gate) = calls.recv().await.unwrap();
        assert_eq!(filters.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(filters.end_date.as_deref(), Some("2024-01-31"));
        gate.send(Ok("january".into())).unwrap();
        handle.await.unwrap();

        assert_eq!(ctrl.generation().await, 1);
        assert!(ctrl.set_date_range(start, end).await.is_none());
    }

    #[tokio::test]
    async fn late_response_of_older_request_is_discarded() {
        let (ctrl, mut calls) = gated();

        let first = ctrl
            .set_filter(FilterField::Priority, Some("Alta".into()))
            .await
            .unwrap();
        let (_, first_gate) = calls.recv().await.unwrap();

        let second = ctrl.set_filter(FilterField::Priority, None).await.unwrap();
        let (second_filters, second_gate) = calls.recv().await.unwrap();
        assert_eq!(second_filters.priority, None);

        second_gate.send(Ok("all priorities".into())).unwrap();
        second.await.unwrap();
        first_gate.send(Ok("only Alta".into())).unwrap();
        first.await.unwrap();

        assert_eq!(ctrl.state().await, PageState::Ready("all priorities".into()));
        assert_eq!(ctrl.generation().await, 2);
    }

    #[tokio::test]
    async fn stale_error_does_not_clobber_newer_data() {
        let ctrl = PageController::new(
            "test",
            QueuedFetcher::new(vec![]),
            FilterSet::default(),
        );
        let old = ctrl.begin().await;
        let new = ctrl.begin().await;

        assert!(ctrl.complete(new, Ok("fresh".into())).await);
        assert!(!ctrl.complete(old, Err(ApiError::network("timeout"))).await);
        assert_eq!(ctrl.state().await, PageState::Ready("fresh".into()));
    }
}
