use crate::models::ElementRecord;

/// One bounded slice of the element set plus its position within the whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub records: Vec<ElementRecord>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub current_range_start: usize,
    pub current_range_end: usize,
}

impl Page {
    /// Builds the metadata for `records`, which must be the slice of the
    /// full set that starts at page `page_number`.
    pub fn new(records: Vec<ElementRecord>, page_number: usize, page_size: usize, total_count: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size).max(1);
        let (current_range_start, current_range_end) = if records.is_empty() {
            (0, 0)
        } else {
            let start = (page_number.max(1) - 1) * page_size + 1;
            (start, start + records.len() - 1)
        };
        Self {
            records,
            page_number: page_number.max(1),
            page_size,
            total_pages,
            total_count,
            current_range_start,
            current_range_end,
        }
    }

    /// A page with no records and no total, as returned for an empty set.
    pub fn empty(page_size: usize) -> Self {
        Self::new(Vec::new(), 1, page_size, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page_number <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page_number >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> ElementRecord {
        ElementRecord {
            id,
            template_id: 1,
            name: format!("e{}", id),
            kind: "text".into(),
            priority: 0,
            description: String::new(),
            categories: vec![],
            defaults: vec![],
            allowed_values: vec![],
        }
    }

    #[test]
    fn test_empty_page_has_zero_range() {
        let page = Page::empty(20);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
        assert_eq!((page.current_range_start, page.current_range_end), (0, 0));
        assert!(page.is_first() && page.is_last());
    }

    #[test]
    fn test_middle_page_range() {
        let page = Page::new((11..=20).map(record).collect(), 2, 10, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_range_start, 11);
        assert_eq!(page.current_range_end, 20);
        assert!(!page.is_first());
        assert!(!page.is_last());
    }

    #[test]
    fn test_short_last_page_range() {
        let page = Page::new((21..=25).map(record).collect(), 3, 10, 25);
        assert_eq!(page.current_range_start, 21);
        assert_eq!(page.current_range_end, 25);
        assert!(page.is_last());
    }
}
