use chrono::Local;
use serde::{Deserialize, Serialize};

/// Most entries the history ever holds.
pub const HISTORY_LIMIT: usize = 5;

/// Timestamp format shown next to each remembered search, e.g. "07.08 14:32".
const TIME_FORMAT: &str = "%d.%m %H:%M";

/// One remembered successful search, keyed by the city name the weather
/// service resolved (not the raw user input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub city: String,
    pub time: String,
}

impl SearchEntry {
    pub fn new(city: impl Into<String>, time: impl Into<String>) -> Self {
        Self { city: city.into(), time: time.into() }
    }

    /// Entry stamped with the current local time.
    pub fn timestamped(city: impl Into<String>) -> Self {
        Self::new(city, Local::now().format(TIME_FORMAT).to_string())
    }
}

/// Ordered list of past searches, most recent first.
///
/// Invariants, upheld by [`SearchHistory::record`]: at most
/// [`HISTORY_LIMIT`] entries, and no two entries share a `city`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory(Vec<SearchEntry>);

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `entry` to the front, dropping any older entry for the same city
    /// and anything beyond the limit.
    pub fn record(&mut self, entry: SearchEntry) {
        self.0.retain(|e| e.city != entry.city);
        self.0.insert(0, entry);
        self.0.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchEntry> {
        self.0.iter()
    }
}

impl FromIterator<SearchEntry> for SearchHistory {
    /// Rebuilds a history from raw entries, re-applying the de-duplication
    /// and length invariants (oldest entries lose).
    fn from_iter<I: IntoIterator<Item = SearchEntry>>(iter: I) -> Self {
        let mut history = Self::new();
        let mut entries: Vec<_> = iter.into_iter().collect();
        entries.reverse();
        for entry in entries {
            history.record(entry);
        }
        history
    }
}
