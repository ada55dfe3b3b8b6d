//! Catalog Feed State
//!
//! Tri-state lifecycle for the one-shot catalog fetch. A single enum is the
//! only source of truth for what the feed renders, so the loading indicator
//! and the card grid can never show together.

use crate::models::ProductSummary;

/// Lifecycle of a catalog fetch for one mount.
///
/// Starts at `Loading`, moves to exactly one of `Loaded` or `Failed`, and
/// stays there until the component is remounted.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<ProductSummary>),
    Failed(String),
}

impl FeedState {
    /// Terminal state for a completed fetch.
    pub fn from_result(result: Result<Vec<ProductSummary>, String>) -> Self {
        match result {
            Ok(cards) => FeedState::Loaded(cards),
            Err(message) => FeedState::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Error message for display, if the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(title: &str) -> ProductSummary {
        ProductSummary {
            title: title.to_string(),
            category: "Apparel".to_string(),
            price: 499.0,
            image: "aGVsbG8=".to_string(),
        }
    }

    #[test]
    fn test_successful_fetch_loads_cards() {
        let state = FeedState::from_result(Ok(vec![make_card("Classic Tee"), make_card("Mug")]));

        assert_eq!(
            state,
            FeedState::Loaded(vec![make_card("Classic Tee"), make_card("Mug")])
        );
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_failed_fetch_records_message() {
        let state = FeedState::from_result(Err("catalog request failed: HTTP 500".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("catalog request failed: HTTP 500"));
        // Never the grid on failure
        assert!(!matches!(state, FeedState::Loaded(_)));
    }

    #[test]
    fn test_empty_catalog_is_still_loaded() {
        let state = FeedState::from_result(Ok(Vec::new()));

        assert_eq!(state, FeedState::Loaded(Vec::new()));
        assert_eq!(state.error_message(), None);
    }
}
