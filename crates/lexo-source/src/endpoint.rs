use std::fmt;

use reqwest::Url;

use crate::LookupError;

/// Path below a service base URL, kept as raw segments so words
/// with spaces or accents are percent-encoded only once, on resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Fixed path such as `random` or `wotd`
    pub fn fixed(path: &str) -> Self {
        Self::new([path])
    }

    /// `{path}/{word}`
    pub fn with_word(path: &str, word: &str) -> Self {
        Self::new([path, word])
    }

    pub fn resolve(&self, base: &Url) -> Result<Url, LookupError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(&self.segments);

        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

pub(crate) fn parse_base(base_url: &str) -> Result<Url, LookupError> {
    Url::parse(base_url).map_err(|e| LookupError::InvalidUrl(format!("{base_url}: {e}")))
}
