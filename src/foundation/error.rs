/// Convenience result type used across Marquee.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MarqueeError {
    /// Invalid user-provided configuration or registry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or querying external assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while constructing or initializing a page.
    #[error("page error: {0}")]
    Page(String),

    /// Wrapped lower-level error from collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarqueeError {
    /// Build a [`MarqueeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarqueeError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`MarqueeError::Page`] value.
    pub fn page(msg: impl Into<String>) -> Self {
        Self::Page(msg.into())
    }
}
