use std::borrow::Cow;

/// Errors raised while loading the settings document.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to results carrying a [`SettingsError`] or its source.
pub trait SettingsErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error, converted into [`SettingsError`], with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError>;
}

impl<T> SettingsErrorExt<T> for Result<T, SettingsError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                SettingsError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> SettingsErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError> {
        self.map_err(|source| SettingsError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for SettingsError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
