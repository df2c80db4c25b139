use lexo_source::Endpoint;
use lexo_types::SearchMode;

/// What the secondary service answers on a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Native entry list, forwarded as-is
    Entries,
    /// `{word, sense, preview}` items needing normalization
    Listing,
    /// Plain list of related words
    Related,
    /// A single word that must be looked up again on the exact route
    Indirect,
    /// One record with id and markup
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub takes_word: bool,
    pub shape: ResponseShape,
    /// Whether the English service is consulted as well
    pub consults_primary: bool,
}

impl Route {
    const fn new(
        path: &'static str,
        takes_word: bool,
        shape: ResponseShape,
        consults_primary: bool,
    ) -> Self {
        Self {
            path,
            takes_word,
            shape,
            consults_primary,
        }
    }

    /// `word` must already be normalized
    pub fn endpoint(&self, word: &str) -> Endpoint {
        if self.takes_word {
            Endpoint::with_word(self.path, word)
        } else {
            Endpoint::fixed(self.path)
        }
    }
}

/// The one place a search mode turns into a request
pub const fn route(mode: SearchMode) -> Route {
    use ResponseShape::*;

    match mode {
        SearchMode::Exact => Route::new("word", true, Entries, true),
        SearchMode::Prefix => Route::new("prefix", true, Listing, false),
        SearchMode::Suffix => Route::new("suffix", true, Listing, false),
        SearchMode::Contains => Route::new("infix", true, Listing, false),
        SearchMode::Similar => Route::new("near", true, Related, false),
        SearchMode::Random => Route::new("random", false, Indirect, false),
        SearchMode::WordOfTheDay => Route::new("wotd", false, Daily, false),
    }
}
