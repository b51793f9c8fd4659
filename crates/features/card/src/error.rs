use std::borrow::Cow;

/// Errors raised while building a raw card configuration.
///
/// Parsing itself never fails; these only surface at the edges where text or files
/// are turned into a [`crate::RawConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed JSON payload with optional context.
    #[error("Malformed configuration JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// File or environment source failure with optional context.
    #[error("Configuration source error{}: {source}", format_context(.context))]
    Source { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Configuration root must be an object{}: found {found}", format_context(.context))]
    NotAnObject { found: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Adds `.context(...)` to results of the sources wrapped by [`ConfigError`].
pub trait ConfigErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error, converted into [`ConfigError`], with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl From<serde_json::Error> for ConfigError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source, context: None }
    }
}

impl<T> ConfigErrorExt<T> for std::result::Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConfigError::Json { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Source { source, context: None }
    }
}

impl<T> ConfigErrorExt<T> for std::result::Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConfigError::Source { source, context: Some(context.into()) })
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
