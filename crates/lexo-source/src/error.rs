use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Word not found")]
    NotFound,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }

    pub(crate) fn check_status(status: StatusCode) -> Result<(), LookupError> {
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }

        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        Ok(())
    }
}
