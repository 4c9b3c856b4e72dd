use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PixelateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PixelateError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
