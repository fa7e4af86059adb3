/// Convenience result type used across scrollwipe.
pub type WipeResult<T> = Result<T, WipeError>;

/// Setup-time error taxonomy.
///
/// Every variant is raised before the first scroll subscription is made. Once a
/// scene is wired there is no runtime error path.
#[derive(thiserror::Error, Debug)]
pub enum WipeError {
    /// A required external engine (scroll observer, smooth scroller) is not present.
    #[error("dependency missing: {0}")]
    DependencyMissing(String),

    /// The scroll-wrap container selector matched nothing.
    #[error("container not found: '{0}'")]
    ContainerNotFound(String),

    /// Trigger and panel lists differ in length.
    #[error("count mismatch: {triggers} triggers vs {panels} panels")]
    CountMismatch {
        /// Number of trigger elements found.
        triggers: usize,
        /// Number of panel elements found.
        panels: usize,
    },

    /// Both trigger and panel lists are empty.
    #[error("empty input: no triggers and no panels")]
    EmptyInput,

    /// Invalid configuration or malformed input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped host-side error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WipeError {
    /// Build a [`WipeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WipeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`WipeError::DependencyMissing`] value.
    pub fn dependency_missing(name: impl Into<String>) -> Self {
        Self::DependencyMissing(name.into())
    }

    /// Build a [`WipeError::ContainerNotFound`] value.
    pub fn container_not_found(selector: impl Into<String>) -> Self {
        Self::ContainerNotFound(selector.into())
    }

    /// `false` only for [`WipeError::EmptyInput`], which setup treats as a no-op.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::EmptyInput)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
