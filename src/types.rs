//! Common types used throughout the Vibify client
//!
//! The small value types used by several endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Audio-feature targets keyed by feature name (e.g. `"energy" => 0.8`)
pub type TargetValues = BTreeMap<String, f64>;

// ============================================================================
// Pagination
// ============================================================================

/// Default number of items requested by list endpoints
pub const DEFAULT_LIMIT: u32 = 25;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Maximum number of items to return
    pub limit: u32,
    /// Number of items to skip
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Create a page with the given limit and offset
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// First page with the given limit
    pub fn first(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }

    /// The page following this one
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        let page = Page::default();
        assert_eq!(page.limit, 25);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_page_next() {
        let page = Page::first(10).next().next();
        assert_eq!(page, Page::new(10, 20));
    }

    #[test]
    fn test_page_next_saturates() {
        let page = Page::new(10, u32::MAX - 5).next();
        assert_eq!(page.offset, u32::MAX);
    }
}
