//! Dashboard previews: show the first N items, then a "show more" link

use serde::Serialize;

/// The visible head of a list plus how much was cut off
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview<'a, T> {
    pub visible: &'a [T],
    pub hidden: usize,
}

impl<T> Preview<'_, T> {
    /// Whether a "show more" link should be rendered
    pub fn has_more(&self) -> bool {
        self.hidden > 0
    }
}

/// Truncate `items` to at most `limit` entries
pub fn preview<T>(items: &[T], limit: usize) -> Preview<'_, T> {
    let shown = items.len().min(limit);
    Preview {
        visible: &items[..shown],
        hidden: items.len() - shown,
    }
}

#[cfg(test)]
mod preview_tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        let items = [1, 2, 3, 4, 5, 6];
        let p = preview(&items, 4);
        assert_eq!(p.visible, &[1, 2, 3, 4]);
        assert_eq!(p.hidden, 2);
        assert!(p.has_more());
    }

    #[test]
    fn test_preview_exact_fit_has_no_more() {
        let items = [1, 2, 3, 4];
        let p = preview(&items, 4);
        assert_eq!(p.visible.len(), 4);
        assert!(!p.has_more());
    }

    #[test]
    fn test_preview_empty() {
        let items: [u8; 0] = [];
        let p = preview(&items, 6);
        assert!(p.visible.is_empty());
        assert!(!p.has_more());
    }
}
