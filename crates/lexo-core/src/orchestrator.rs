use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use lexo_source::{LookupError, PrimarySource, SecondarySource};
use lexo_types::{
    PrimaryEntry, RandomWord, ResultEvent, SearchMode, SecondaryEntry, SimilarWordsResult,
};

use crate::error::SearchError;
use crate::normalizer::{daily_entry, normalize_list_result};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::relay::EventRelay;
use crate::route::{ResponseShape, Route, route};

/// Secondary-service result before it is published
enum SecondaryOutcome {
    Entries(Vec<SecondaryEntry>),
    Related(Vec<String>),
}

impl SecondaryOutcome {
    fn empty(shape: ResponseShape) -> Self {
        match shape {
            ResponseShape::Related => SecondaryOutcome::Related(Vec::new()),
            _ => SecondaryOutcome::Entries(Vec::new()),
        }
    }
}

/// Runs searches against both dictionary services and publishes what
/// comes back on its relay.
///
/// Overlapping searches are neither cancelled nor serialized; subscribers
/// end up with whatever arrived last.
pub struct SearchOrchestrator {
    primary: Arc<dyn PrimarySource>,
    secondary: Arc<dyn SecondarySource>,
    relay: Arc<EventRelay>,
    preprocessor: DefaultPreprocessor,
}

impl SearchOrchestrator {
    pub fn new(
        primary: Arc<dyn PrimarySource>,
        secondary: Arc<dyn SecondarySource>,
        relay: Arc<EventRelay>,
    ) -> Self {
        for source in [primary.metadata(), secondary.metadata()] {
            tracing::info!("Using {} ({})", source.name, source.language);
        }

        Self {
            primary,
            secondary,
            relay,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn relay(&self) -> &Arc<EventRelay> {
        &self.relay
    }

    /// Run one search. Results only leave through the relay.
    ///
    /// `loading(true)` is always the first event and `loading(false)` the
    /// last, whatever fails in between. The word is ignored for modes that
    /// do not take one; callers reject blank words for the others.
    pub async fn execute(&self, word: &str, mode: SearchMode) {
        self.relay.set_loading(true);

        let outcome = AssertUnwindSafe(self.run(word, mode)).catch_unwind().await;
        if let Err(payload) = outcome {
            let err = SearchError::from_panic(payload);
            tracing::error!("Search for '{}' ({}) failed: {}", word, mode, err);
            self.relay.publish(ResultEvent::Error(err.to_string()));
        }

        self.relay.set_loading(false);
    }

    async fn run(&self, word: &str, mode: SearchMode) {
        let plan = route(mode);
        let word = if plan.takes_word {
            self.preprocessor.process(word)
        } else {
            String::new()
        };
        tracing::info!("Searching '{}' ({})", word, mode);

        let outcome = match self.lookup_secondary(&word, mode, plan).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let source = self.secondary.metadata();
                tracing::warn!("{} lookup for '{}' ({}) failed: {}", source.name, word, mode, e);
                SecondaryOutcome::empty(plan.shape)
            }
        };

        match outcome {
            SecondaryOutcome::Entries(entries) => {
                tracing::debug!("{} secondary entries", entries.len());
                self.relay.publish(ResultEvent::Secondary(entries));
            }
            SecondaryOutcome::Related(related) => {
                tracing::debug!("{} related words", related.len());
                self.relay.publish(ResultEvent::Similar(SimilarWordsResult {
                    word: word.clone(),
                    related,
                }));
                // Related words have their own panel, drop stale cards
                self.relay.publish(ResultEvent::Secondary(Vec::new()));
            }
        }

        let primary = if plan.consults_primary {
            self.lookup_primary(&word).await
        } else {
            Vec::new()
        };
        self.relay.publish(ResultEvent::Primary(primary));
    }

    async fn lookup_secondary(
        &self,
        word: &str,
        mode: SearchMode,
        plan: Route,
    ) -> Result<SecondaryOutcome, LookupError> {
        let raw = self.secondary.fetch(&plan.endpoint(word)).await?;

        let outcome = match plan.shape {
            ResponseShape::Entries => SecondaryOutcome::Entries(serde_json::from_value(raw)?),
            ResponseShape::Listing => {
                SecondaryOutcome::Entries(normalize_list_result(mode, serde_json::from_value(raw)?))
            }
            ResponseShape::Related => SecondaryOutcome::Related(serde_json::from_value(raw)?),
            ResponseShape::Indirect => {
                let pick: RandomWord = serde_json::from_value(raw)?;
                tracing::debug!("Random pick: {}", pick.word);

                let exact = route(SearchMode::Exact).endpoint(&pick.word);
                let raw = self.secondary.fetch(&exact).await?;
                SecondaryOutcome::Entries(serde_json::from_value(raw)?)
            }
            ResponseShape::Daily => {
                SecondaryOutcome::Entries(vec![daily_entry(serde_json::from_value(raw)?)])
            }
        };

        Ok(outcome)
    }

    /// Never fails: the English results just come back empty
    async fn lookup_primary(&self, word: &str) -> Vec<PrimaryEntry> {
        match self.primary.entries(word).await {
            Ok(entries) => {
                tracing::debug!("{} primary entries", entries.len());
                entries
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("No English entry for '{}'", word);
                Vec::new()
            }
            Err(e) => {
                let source = self.primary.metadata();
                tracing::warn!("{} lookup for '{}' failed: {}", source.name, word, e);
                Vec::new()
            }
        }
    }
}
