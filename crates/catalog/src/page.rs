//! Fixed-size pagination over derived listings.
//!
//! Pages are 1-based to match what visitors see on pagination controls.

/// Products shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One page of a larger list, with enough context to render controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number this view was cut for.
    pub number: usize,
    /// Total pages at this page size; zero when the list is empty.
    pub pages: usize,
    /// Length of the whole list before slicing.
    pub total: usize,
}

/// Total pages needed for `len` items. An empty list has zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The 1-based `page` of `items`. Page zero and pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Cut `page` out of `items` and report the surrounding totals.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    Page {
        items: page_slice(items, page, page_size),
        number: page,
        pages: page_count(items.len(), page_size),
        total: items.len(),
    }
}
