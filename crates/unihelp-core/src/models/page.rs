use serde::{Deserialize, Serialize};

/// Server-driven pagination envelope
///
/// The backend owns pagination; the client only re-sorts whatever page it is
/// given and never invents pages of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Whether a further page exists after this one
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next() {
        let page: Page<u32> = Page {
            content: vec![1, 2, 3],
            page: 0,
            size: 5,
            total_elements: 8,
            total_pages: 2,
        };
        assert!(page.has_next());

        let last: Page<u32> = Page {
            content: vec![4],
            page: 1,
            size: 5,
            total_elements: 8,
            total_pages: 2,
        };
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_page_has_no_next() {
        let page: Page<u32> = Page {
            content: vec![],
            page: 0,
            size: 5,
            total_elements: 0,
            total_pages: 0,
        };
        assert!(page.is_empty());
        assert!(!page.has_next());
    }
}
