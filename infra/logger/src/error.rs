use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., unwritable directory).
    #[error("Rolling file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global tracing subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Invalid settings supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to results carrying a [`LoggerError`].
pub trait LoggerErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError>;
}

impl<T> LoggerErrorExt<T> for Result<T, LoggerError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                LoggerError::Appender { context: c, .. }
                | LoggerError::Subscriber { context: c, .. }
                | LoggerError::Internal { context: c, .. }
                | LoggerError::InvalidConfiguration { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl<T> LoggerErrorExt<T> for Result<T, tracing_appender::rolling::InitError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError> {
        self.map_err(|source| LoggerError::Appender { source, context: Some(context.into()) })
    }
}

impl<T> LoggerErrorExt<T> for Result<T, tracing_subscriber::util::TryInitError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError> {
        self.map_err(|source| LoggerError::Subscriber { source, context: Some(context.into()) })
    }
}

impl From<tracing_appender::rolling::InitError> for LoggerError {
    #[inline]
    fn from(source: tracing_appender::rolling::InitError) -> Self {
        Self::Appender { source, context: None }
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    #[inline]
    fn from(source: tracing_subscriber::util::TryInitError) -> Self {
        Self::Subscriber { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
