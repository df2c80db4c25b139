use lexo_types::{PrimaryEntry, ResultEvent, SearchMode, SecondaryEntry, SimilarWordsResult};

use crate::input::SearchRequest;

/// Everything the view shows. Each event replaces its slice of state,
/// so after overlapping searches the latest event wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    initial_mode: SearchMode,

    pub mode: SearchMode,
    pub word: String,
    pub loading: bool,
    pub primary: Vec<PrimaryEntry>,
    pub secondary: Vec<SecondaryEntry>,
    /// Kept across searches, cards only show it for the same word
    pub similar: Option<SimilarWordsResult>,
    pub notice: Option<String>,
}

impl ViewState {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            initial_mode: mode,
            mode,
            ..Default::default()
        }
    }

    pub fn select_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Record what the user asked for, before any result arrives
    pub fn begin(&mut self, request: &SearchRequest) {
        self.mode = request.mode;
        self.word = request.word.clone();
        self.notice = None;
    }

    /// Returns true once a search has settled and the view should be redrawn
    pub fn apply(&mut self, event: ResultEvent) -> bool {
        match event {
            ResultEvent::Loading(loading) => {
                self.loading = loading;
                return !loading;
            }
            ResultEvent::Primary(entries) => self.primary = entries,
            ResultEvent::Secondary(entries) => self.secondary = entries,
            ResultEvent::Similar(result) => self.similar = Some(result),
            ResultEvent::Error(cause) => {
                tracing::error!("Search error: {cause}");
                self.notice = Some(cause);
            }
        }

        false
    }

    /// Drop everything, like reopening the view
    pub fn reload(&mut self) {
        *self = Self::new(self.initial_mode);
    }

    /// Related words to show under a card for `word`
    pub fn related_for(&self, word: &str) -> Option<&[String]> {
        self.similar
            .as_ref()
            .filter(|similar| similar.word == word && !similar.related.is_empty())
            .map(|similar| similar.related.as_slice())
    }

    /// Related-words panel for the current similar search, keyed by the
    /// word the search actually ran with rather than the typed one
    pub fn similar_panel(&self) -> Option<&SimilarWordsResult> {
        self.similar
            .as_ref()
            .filter(|similar| self.mode == SearchMode::Similar && !similar.related.is_empty())
    }

    /// Nothing would be drawn besides a notice
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.similar_panel().is_none()
    }
}
