//! Search bar state and brew filtering.

use crate::domain::Brew;

/// Hint shown while the query is empty.
pub const PLACEHOLDER: &str = "Search by bean type, brew method, or details...";

/// Input to the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text was replaced.
    Input(String),
    /// The clear button was pressed.
    Clear,
}

/// Current search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The clear button is only offered once something was typed.
    #[must_use]
    pub fn shows_clear(&self) -> bool {
        !self.query.is_empty()
    }

    /// Applies an event. Returns `true` if the query changed.
    pub fn handle(&mut self, event: SearchEvent) -> bool {
        let next = match event {
            SearchEvent::Input(text) => text,
            SearchEvent::Clear => String::new(),
        };
        if next == self.query {
            return false;
        }
        self.query = next;
        true
    }

    /// Whether `brew` matches the query.
    ///
    /// Case-insensitive substring match against bean type, brew method, and
    /// details. An empty query matches everything; missing details never match.
    #[must_use]
    pub fn matches(&self, brew: &Brew) -> bool {
        let needle = self.query.to_lowercase();
        brew.bean_type.to_lowercase().contains(&needle)
            || brew.brew_type.to_lowercase().contains(&needle)
            || brew
                .details
                .as_deref()
                .is_some_and(|details| details.to_lowercase().contains(&needle))
    }

    /// Returns the brews matching the query, preserving order.
    #[must_use]
    pub fn filter(&self, brews: &[Brew]) -> Vec<Brew> {
        let _span = tracing::debug_span!(
            "filter_brews",
            total_brews = brews.len(),
            query_len = self.query.len()
        )
        .entered();

        let filtered: Vec<Brew> = brews.iter().filter(|brew| self.matches(brew)).cloned().collect();

        tracing::debug!(filtered_count = filtered.len(), "search filter applied");
        filtered
    }
}
