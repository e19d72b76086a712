//! # Pagination presenter
//!
//! A pure function from `(total, page, page_size)` to the page-button layout.
//! Pages are 1-based. There is always at least one page, even for an empty
//! collection, so the bar never renders "page 1 of 0".

/// Layout of the pagination bar for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    /// Every page number, `1..=total_pages`. No ellipsis compression.
    pub page_numbers: Vec<usize>,
    pub can_prev: bool,
    pub can_next: bool,
}

impl PageLayout {
    /// "Total 12 records • 2/3"
    pub fn summary(&self) -> String {
        format!(
            "Total {} records \u{2022} {}/{}",
            self.total, self.page, self.total_pages
        )
    }
}

/// `max(1, ceil(total / page_size))`. A page size of 0 counts as 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Compute the layout. An out-of-range `page` is clamped first.
pub fn present(total: usize, page: usize, page_size: usize) -> PageLayout {
    let total_pages = total_pages(total, page_size);
    let page = clamp_page(page, total_pages);
    PageLayout {
        total,
        page,
        total_pages,
        page_numbers: (1..=total_pages).collect(),
        can_prev: page > 1,
        can_next: page < total_pages,
    }
}

/// Index range of the visible slice within the filtered set.
pub fn slice_bounds(total: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_records_five_per_page() {
        let layout = present(12, 1, 5);
        assert_eq!(layout.total_pages, 3);
        assert_eq!(layout.page_numbers, vec![1, 2, 3]);
        assert!(!layout.can_prev);
        assert!(layout.can_next);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let layout = present(0, 1, 5);
        assert_eq!(layout.total_pages, 1);
        assert_eq!(layout.page_numbers, vec![1]);
        assert!(!layout.can_prev);
        assert!(!layout.can_next);
        assert_eq!(slice_bounds(0, 1, 5), 0..0);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        assert_eq!(present(12, 5, 5).page, 3);
        assert_eq!(present(12, 0, 5).page, 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn test_last_page_flags() {
        let layout = present(12, 3, 5);
        assert!(layout.can_prev);
        assert!(!layout.can_next);
        assert_eq!(slice_bounds(12, 3, 5), 10..12);
    }

    #[test]
    fn test_slice_bounds_cover_every_page() {
        for total in 0..20 {
            for page_size in 1..7 {
                let pages = total_pages(total, page_size);
                let covered: usize = (1..=pages)
                    .map(|p| slice_bounds(total, p, page_size).len())
                    .sum();
                assert_eq!(covered, total, "total={total} page_size={page_size}");
            }
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(present(12, 2, 5).summary(), "Total 12 records \u{2022} 2/3");
    }
}
