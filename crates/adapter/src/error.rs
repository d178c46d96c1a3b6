use std::borrow::Cow;

/// Error types raised while configuring the module or registering channels.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// No detection rule found evidence for any known solver kind.
    #[error("Could not determine the solver type{}: {message}", format_context(.context))]
    SolverKindIndeterminate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The channel name matches no registered handler family.
    #[error("Unknown data type{}: cannot add {name}", format_context(.context))]
    UnknownChannel { name: String, context: Option<Cow<'static, str>> },

    /// A channel was registered before a successful `configure`.
    #[error("Module is not configured{}: {message}", format_context(.context))]
    NotConfigured { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AdapterError {
    pub(crate) fn unknown_channel(name: &str) -> Self {
        Self::UnknownChannel { name: name.to_owned(), context: None }
    }
}

/// Adds `.context(...)` to results carrying an [`AdapterError`].
pub trait AdapterErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, AdapterError>;
}

impl<T> AdapterErrorExt<T> for Result<T, AdapterError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                AdapterError::SolverKindIndeterminate { context: c, .. }
                | AdapterError::UnknownChannel { context: c, .. }
                | AdapterError::NotConfigured { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_rendered() {
        let res: Result<(), AdapterError> = Err(AdapterError::unknown_channel("Pressure"));
        let err = res.context("VV writers").unwrap_err();
        assert_eq!(err.to_string(), "Unknown data type (VV writers): cannot add Pressure");
    }

    #[test]
    fn test_context_replaces_previous() {
        let res: Result<(), AdapterError> =
            Err(AdapterError::NotConfigured { message: "cannot add reader".into(), context: None });
        let err = res.context("first").context("second").unwrap_err();
        assert_eq!(err.to_string(), "Module is not configured (second): cannot add reader");
    }
}
