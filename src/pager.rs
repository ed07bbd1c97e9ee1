pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice out one page. Page 0 is read as page 1, pages past the end are
/// empty, and a zero page size falls back to the default.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = if per_page == 0 { DEFAULT_PAGE_SIZE } else { per_page };
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_page() {
        let items: Vec<u32> = (1..=45).collect();
        let first = paginate(&items, 1, 12);
        assert_eq!(first.items, &items[0..12]);
        assert_eq!(first.total_pages, 4);
        assert_eq!(first.total_items, 45);

        let last = paginate(&items, 4, 12);
        assert_eq!(last.items, &[37, 38, 39, 40, 41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 3, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, usize::MAX, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.total_pages, 1);

        let page = paginate(&items, 2, usize::MAX);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_first() {
        let items = vec!["a", "b", "c"];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, &["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 12);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
