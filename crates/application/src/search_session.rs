use estatedesk_domain::SearchResult;

use crate::{EntitySearchService, is_searchable_query};

/// Observable state of one search surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSessionState {
    query: String,
    is_open: bool,
    results: Vec<SearchResult>,
    highlighted: Option<usize>,
}

impl SearchSessionState {
    /// Returns the current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Returns whether the surface is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the results for the current query.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Returns the index of the keyboard-highlighted result.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Returns the derived state-machine status.
    #[must_use]
    pub fn status(&self) -> SearchSessionStatus {
        if !self.is_open {
            SearchSessionStatus::Closed
        } else if !is_searchable_query(self.query.as_str()) {
            SearchSessionStatus::OpenEmpty
        } else if self.results.is_empty() {
            SearchSessionStatus::OpenNoMatch
        } else {
            SearchSessionStatus::OpenResults
        }
    }
}

/// Search surface states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSessionStatus {
    /// Surface closed.
    Closed,
    /// Open with a query too short to search.
    OpenEmpty,
    /// Open with at least one result.
    OpenResults,
    /// Open with a searchable query and no matches.
    OpenNoMatch,
}

/// Search state owned by exactly one search surface.
///
/// Every mutation runs synchronously and overwrites the previous results.
pub struct SearchSession {
    service: EntitySearchService,
    state: SearchSessionState,
}

impl SearchSession {
    /// Creates a closed session with an empty query.
    #[must_use]
    pub fn new(service: EntitySearchService) -> Self {
        Self {
            service,
            state: SearchSessionState::default(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &SearchSessionState {
        &self.state
    }

    /// Returns the derived status.
    #[must_use]
    pub fn status(&self) -> SearchSessionStatus {
        self.state.status()
    }

    /// Replaces the query and recomputes results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.results = self.service.search(self.state.query.as_str());
        self.state.highlighted = None;
    }

    /// Opens or closes the surface.
    pub fn set_open(&mut self, is_open: bool) {
        self.state.is_open = is_open;
        if !is_open {
            self.state.highlighted = None;
        }
    }

    /// Clears the query and results.
    pub fn clear(&mut self) {
        self.state.query.clear();
        self.state.results.clear();
        self.state.highlighted = None;
    }

    /// Input gained focus.
    pub fn focus(&mut self) {
        self.set_open(true);
    }

    /// Keystroke changed the input text.
    pub fn input(&mut self, text: impl Into<String>) {
        self.set_query(text);
        self.set_open(true);
    }

    /// Escape key pressed.
    pub fn escape(&mut self) {
        self.dismiss();
    }

    /// Pointer pressed outside the surface.
    pub fn outside_click(&mut self) {
        self.dismiss();
    }

    /// Picks a result, closing the surface and clearing the query.
    ///
    /// Returns `None` and leaves the state untouched when the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<SearchResult> {
        let selected = self.state.results.get(index).cloned()?;
        self.dismiss();
        Some(selected)
    }

    /// Moves the highlight down, wrapping to the first result.
    pub fn highlight_next(&mut self) {
        let count = self.state.results.len();
        if count == 0 {
            return;
        }
        self.state.highlighted = Some(match self.state.highlighted {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    /// Moves the highlight up, wrapping to the last result.
    pub fn highlight_previous(&mut self) {
        let count = self.state.results.len();
        if count == 0 {
            return;
        }
        self.state.highlighted = Some(match self.state.highlighted {
            Some(0) | None => count - 1,
            Some(index) => index - 1,
        });
    }

    fn dismiss(&mut self) {
        self.set_open(false);
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use estatedesk_core::AppResult;
    use estatedesk_domain::{DealRecord, LeadRecord, PropertyRecord, UserRecord};

    use super::{SearchSession, SearchSessionStatus};
    use crate::{EntityCollectionRepository, EntitySearchService};

    struct LeadsOnly(Vec<LeadRecord>);

    impl EntityCollectionRepository for LeadsOnly {
        fn list_properties(&self) -> AppResult<Vec<PropertyRecord>> {
            Ok(Vec::new())
        }

        fn list_users(&self) -> AppResult<Vec<UserRecord>> {
            Ok(Vec::new())
        }

        fn list_leads(&self) -> AppResult<Vec<LeadRecord>> {
            Ok(self.0.clone())
        }

        fn list_deals(&self) -> AppResult<Vec<DealRecord>> {
            Ok(Vec::new())
        }
    }

    fn session() -> SearchSession {
        let leads = vec![
            LeadRecord::new("l-1", "João Silva", "joao.silva@example.com", None),
            LeadRecord::new("l-2", "Joana Dias", "joana@example.com", None),
        ]
        .into_iter()
        .collect::<AppResult<Vec<_>>>()
        .unwrap_or_else(|_| unreachable!());

        SearchSession::new(EntitySearchService::new(Arc::new(LeadsOnly(leads))))
    }

    #[test]
    fn starts_closed() {
        let session = session();
        assert_eq!(session.status(), SearchSessionStatus::Closed);
        assert_eq!(session.state().query(), "");
    }

    #[test]
    fn focus_opens_empty() {
        let mut session = session();
        session.focus();
        assert_eq!(session.status(), SearchSessionStatus::OpenEmpty);
    }

    #[test]
    fn keystrokes_walk_through_states() {
        let mut session = session();
        session.focus();

        session.input("jo");
        assert_eq!(session.status(), SearchSessionStatus::OpenEmpty);
        assert!(session.state().results().is_empty());

        session.input("joa");
        assert_eq!(session.status(), SearchSessionStatus::OpenResults);
        assert_eq!(session.state().results().len(), 2);

        session.input("joao");
        assert_eq!(session.state().results().len(), 1);

        session.input("joaquim");
        assert_eq!(session.status(), SearchSessionStatus::OpenNoMatch);

        session.input("jo");
        assert_eq!(session.status(), SearchSessionStatus::OpenEmpty);
        assert!(session.state().results().is_empty());
    }

    #[test]
    fn escape_and_outside_click_close_and_clear() {
        let mut session = session();
        session.input("joa");
        session.escape();
        assert_eq!(session.status(), SearchSessionStatus::Closed);
        assert_eq!(session.state().query(), "");
        assert!(session.state().results().is_empty());

        session.input("joa");
        session.outside_click();
        assert_eq!(session.status(), SearchSessionStatus::Closed);
        assert_eq!(session.state().query(), "");
    }

    #[test]
    fn select_returns_result_and_closes() {
        let mut session = session();
        session.input("joana");

        let selected = session.select(0);
        assert_eq!(selected.map(|result| result.id), Some("l-2".to_owned()));
        assert_eq!(session.status(), SearchSessionStatus::Closed);
        assert_eq!(session.state().query(), "");
    }

    #[test]
    fn out_of_range_select_keeps_state() {
        let mut session = session();
        session.input("joana");

        assert!(session.select(5).is_none());
        assert_eq!(session.status(), SearchSessionStatus::OpenResults);
        assert_eq!(session.state().query(), "joana");
    }

    #[test]
    fn highlight_wraps_and_resets_on_new_query() {
        let mut session = session();
        session.input("joa");

        session.highlight_previous();
        assert_eq!(session.state().highlighted(), Some(1));
        session.highlight_next();
        assert_eq!(session.state().highlighted(), Some(0));
        session.highlight_next();
        assert_eq!(session.state().highlighted(), Some(1));

        session.input("joan");
        assert_eq!(session.state().highlighted(), None);
    }

    #[test]
    fn highlight_is_noop_without_results() {
        let mut session = session();
        session.focus();
        session.highlight_next();
        assert_eq!(session.state().highlighted(), None);
    }
}
