use std::ops::Range;

pub const PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Persisted sizes outside the offered set fall back to the default.
pub fn normalize_page_size(size: usize) -> usize {
    if PAGE_SIZES.contains(&size) {
        size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice bounds of 1-based `page` within `len` items. Pages past the end are empty.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// "Mostrando X a Y de N"
pub fn caption(page: usize, page_size: usize, filtered: usize) -> String {
    let range = page_range(page, page_size, filtered);
    let first = if range.is_empty() { 0 } else { range.start + 1 };
    format!("Mostrando {} a {} de {}", first, range.end, filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_three_members_in_pages_of_ten() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(page_range(3, 10, 23), 20..23);
        assert_eq!(page_range(3, 10, 23).len(), 3);
        assert_eq!(caption(3, 10, 23), "Mostrando 21 a 23 de 23");
    }

    #[test]
    fn test_bounds() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 5), 5);
        assert!(page_range(4, 10, 23).is_empty());
        assert_eq!(caption(1, 10, 0), "Mostrando 0 a 0 de 0");
        assert_eq!(caption(1, 10, 7), "Mostrando 1 a 7 de 7");
    }

    #[test]
    fn test_normalize_page_size() {
        assert_eq!(normalize_page_size(50), 50);
        assert_eq!(normalize_page_size(7), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(0), DEFAULT_PAGE_SIZE);
    }
}
