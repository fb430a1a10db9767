//! Mock revalidator
//!
//! Records every invalidated path in memory so tests can assert that
//! mutations revalidate the views they are supposed to.

use std::sync::{Arc, Mutex};

use crate::{RevalidateError, Revalidator};

/// Recording revalidator for tests and development.
#[derive(Clone, Default)]
pub struct MockRevalidator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockRevalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths revalidated so far, in call order.
    pub fn recorded_paths(&self) -> Vec<String> {
        self.paths.lock().expect("paths lock poisoned").clone()
    }

    /// Whether a given path has been revalidated at least once.
    pub fn was_revalidated(&self, path: &str) -> bool {
        self.paths
            .lock()
            .expect("paths lock poisoned")
            .iter()
            .any(|p| p == path)
    }

    pub fn clear(&self) {
        self.paths.lock().expect("paths lock poisoned").clear();
    }
}

#[async_trait::async_trait]
impl Revalidator for MockRevalidator {
    async fn revalidate(&self, path: &str) -> Result<(), RevalidateError> {
        tracing::debug!(path, "Mock revalidator: recording path");
        self.paths
            .lock()
            .map_err(|e| RevalidateError::Request(format!("paths lock poisoned: {e}")))?
            .push(path.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_paths_in_order() {
        let mock = MockRevalidator::new();
        mock.revalidate("/events").await.unwrap();
        mock.revalidate("/admin/events").await.unwrap();

        assert_eq!(mock.recorded_paths(), vec!["/events", "/admin/events"]);
        assert!(mock.was_revalidated("/events"));
        assert!(!mock.was_revalidated("/resources"));

        mock.clear();
        assert!(mock.recorded_paths().is_empty());
    }
}
