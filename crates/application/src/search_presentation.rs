use estatedesk_domain::SearchResult;

use crate::{SearchSession, SearchSessionState, SearchSessionStatus};

/// Message shown when a searchable query has no matches.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// External navigation primitive.
pub trait Navigator {
    /// Moves the application to the given path.
    fn navigate_to(&mut self, path: &str);
}

/// Activates a result: navigates to its detail route, then closes the surface
/// and clears the query.
///
/// Out-of-range indices do nothing and return `None`.
pub fn activate_result(
    session: &mut SearchSession,
    navigator: &mut dyn Navigator,
    index: usize,
) -> Option<SearchResult> {
    let destination = session.state().results().get(index)?.destination();
    navigator.navigate_to(destination.as_str());
    session.select(index)
}

/// Activates the keyboard-highlighted result, if any.
pub fn activate_highlighted(
    session: &mut SearchSession,
    navigator: &mut dyn Navigator,
) -> Option<SearchResult> {
    let index = session.state().highlighted()?;
    activate_result(session, navigator, index)
}

/// Render-ready projection of a search surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanelView {
    /// Whether the dropdown is drawn at all.
    pub visible: bool,
    /// Result rows.
    pub entries: Vec<SearchPanelEntry>,
    /// Empty-state message, set only when a searchable query found nothing.
    pub empty_message: Option<&'static str>,
}

/// One result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanelEntry {
    /// 1-based rank.
    pub rank: usize,
    /// Entity type badge.
    pub entity_label: &'static str,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Interpolated detail route.
    pub destination: String,
    /// Whether the row carries the keyboard highlight.
    pub highlighted: bool,
}

impl SearchPanelView {
    /// Projects session state for rendering.
    #[must_use]
    pub fn from_state(state: &SearchSessionState) -> Self {
        let status = state.status();
        let entries = match status {
            SearchSessionStatus::OpenResults => state
                .results()
                .iter()
                .enumerate()
                .map(|(index, result)| SearchPanelEntry {
                    rank: result.rank,
                    entity_label: result.entity_type.label(),
                    title: result.title.clone(),
                    subtitle: result.subtitle.clone(),
                    destination: result.destination(),
                    highlighted: state.highlighted() == Some(index),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            visible: status != SearchSessionStatus::Closed,
            entries,
            empty_message: (status == SearchSessionStatus::OpenNoMatch)
                .then_some(NO_RESULTS_MESSAGE),
        }
    }
}
