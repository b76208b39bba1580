use tracing::warn;

use crate::{
    client::{FetchError, WeatherSource},
    history::{SearchEntry, SearchHistory},
    model::WeatherSnapshot,
    store::HistoryStore,
};

/// The one user-facing failure message. Every fetch failure, whatever its
/// cause, surfaces as this.
pub const FETCH_FAILED_MESSAGE: &str =
    "Hava durumu bilgisi alınamadı. Lütfen geçerli bir şehir adı girin.";

/// Everything the screen needs to render, owned by [`SearchController`].
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Last submitted query text, echoed back into the input field.
    pub input: String,
    pub loading: bool,
    /// None when no error is showing.
    pub error: Option<String>,
    /// Most recent successful lookup, if any.
    pub snapshot: Option<WeatherSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failed,
}

impl QueryState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.snapshot.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Owns the query state and the search history, and is the only place either
/// is mutated. Re-searching a remembered city goes through [`Self::submit`]
/// like any fresh query.
#[derive(Debug)]
pub struct SearchController {
    state: QueryState,
    history: SearchHistory,
    source: Box<dyn WeatherSource>,
    store: HistoryStore,
}

impl SearchController {
    /// History is read from the store once, here; an empty or unreadable
    /// slot just means starting with no history.
    pub fn new(source: Box<dyn WeatherSource>, store: HistoryStore) -> Self {
        let history = store.load();
        Self { state: QueryState::default(), history, source, store }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Run one search to completion and return the resulting state.
    ///
    /// Blank or whitespace-only input is ignored without touching state or
    /// the network. Otherwise the previous error is cleared, the lookup runs,
    /// and on success the resolved city is merged into the history, which is
    /// then persisted; a persistence failure is logged and otherwise ignored.
    pub async fn submit(&mut self, city: &str) -> &QueryState {
        let city = city.trim();
        if city.is_empty() {
            return &self.state;
        }

        self.begin(city);
        let result = self.source.current(city).await;
        self.resolve(result);

        &self.state
    }

    fn begin(&mut self, city: &str) {
        self.state.input = city.to_string();
        self.state.error = None;
        // The previous snapshot stays visible until this search resolves.
        self.state.loading = true;
    }

    fn resolve(&mut self, result: Result<WeatherSnapshot, FetchError>) {
        self.state.loading = false;

        match result {
            Ok(snapshot) => {
                self.history.record(SearchEntry::timestamped(snapshot.city.clone()));
                self.state.snapshot = Some(snapshot);

                if let Err(err) = self.store.save(&self.history) {
                    warn!(%err, "search history not persisted");
                }
            }
            Err(err) => {
                warn!(%err, "weather lookup failed");
                self.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.state.snapshot = None;
            }
        }
    }
}
