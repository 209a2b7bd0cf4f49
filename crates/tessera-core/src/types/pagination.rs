//! Page window passed to authorized search capabilities.

use serde::{Deserialize, Serialize};

/// An `(offset, limit)` window over an ordered result list.
///
/// Suggestion searches always start at offset zero; the limit is the
/// budget share the caller was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageWindow {
    /// Number of leading items to skip.
    pub offset: usize,
    /// Maximum number of items to return.
    pub limit: usize,
}

impl PageWindow {
    /// Create a new page window.
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// A window over the first `limit` items.
    pub fn first(limit: usize) -> Self {
        Self::new(0, limit)
    }

    /// Whether the window can never yield an item.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }

    /// Apply the window to an ordered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_window() {
        let window = PageWindow::first(3);
        assert_eq!(window.apply(1..10), vec![1, 2, 3]);
    }

    #[test]
    fn test_offset_past_end() {
        let window = PageWindow::new(5, 3);
        assert!(window.apply(vec!['a', 'b']).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let window = PageWindow::first(0);
        assert!(window.is_empty());
        assert!(window.apply(0..100).is_empty());
    }
}
