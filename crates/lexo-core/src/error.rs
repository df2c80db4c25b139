use std::any::Any;

/// Failures that escape the per-branch handling of a search
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search aborted: {0}")]
    Aborted(String),
}

impl SearchError {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let cause = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown failure".to_string()
        };

        SearchError::Aborted(cause)
    }
}
