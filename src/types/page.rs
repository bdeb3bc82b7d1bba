/// Resolved position within a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl Page {
    /// Clamp the requested page into `1..=total_pages`; an empty listing still has one page.
    pub fn resolve(requested: Option<u32>, size: u32, total_items: i64) -> Self {
        let size = size.max(1);
        let items = u64::try_from(total_items).unwrap_or(0);
        let total_pages = u32::try_from(items.div_ceil(u64::from(size)))
            .unwrap_or(u32::MAX)
            .max(1);
        let number = requested.unwrap_or(1).clamp(1, total_pages);
        Self {
            number,
            size,
            total_items,
            total_pages,
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.number - 1) * i64::from(self.size)
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn empty_listing_has_one_page() {
        let p = Page::resolve(None, 10, 0);
        assert_eq!((p.number, p.total_pages, p.offset()), (1, 1, 0));
        assert!(!p.has_prev() && !p.has_next());
    }

    #[test]
    fn partial_last_page_counts() {
        let p = Page::resolve(Some(3), 10, 21);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.offset(), 20);
        assert!(p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        assert_eq!(Page::resolve(Some(0), 10, 5).number, 1);
        assert_eq!(Page::resolve(Some(99), 10, 25).number, 3);
    }
}
