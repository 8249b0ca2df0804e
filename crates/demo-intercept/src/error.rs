//! Error types for the interception layer
//!
//! Nothing here is retried or swallowed: framework failures reach the caller
//! exactly as the framework reported them.

use std::error::Error as StdError;

/// Boxed framework error
pub type FrameworkError = Box<dyn StdError + Send + Sync + 'static>;

/// Widget interaction errors
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// Error raised by the widget framework or by a real submission
    #[error("widget framework error: {0}")]
    Framework(#[source] FrameworkError),

    /// The decorated widget no longer exists
    #[error("widget detached before submit")]
    Detached,
}

impl WidgetError {
    /// Wrap a framework error
    #[inline]
    pub fn framework(error: impl Into<FrameworkError>) -> Self {
        Self::Framework(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_error_keeps_message() {
        let err = WidgetError::framework("server returned 503");
        assert!(err.to_string().contains("server returned 503"));
        assert!(err.source().is_some());
    }

    #[test]
    fn detached_display() {
        assert_eq!(WidgetError::Detached.to_string(), "widget detached before submit");
    }
}
