//! Error conversion helpers for transport failures
//!
//! Provides extension traits for cleaner error handling with URL context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add URL context to a transport error.
    ///
    /// # Example
    /// ```ignore
    /// self.http.get(url).with_url_context("Failed to get", url)?;
    /// ```
    fn with_url_context(self, action: &str, url: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_url_context(self, action: &str, url: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{} {}: {}", action, url, e),
            source: Box::new(e),
        })
    }
}
