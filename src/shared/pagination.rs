//! Fixed-size page windows over ordered result lists.

/// Questions per page when the configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A requested page of a listing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: i64, per_page: usize) -> Self {
        Self { page, per_page }
    }

    pub fn first(per_page: usize) -> Self {
        Self::new(1, per_page)
    }

    /// `[start, end)` of this page, or `None` for pages below 1.
    fn bounds(&self) -> Option<(usize, usize)> {
        if self.page < 1 || self.per_page == 0 {
            return None;
        }
        let start = usize::try_from(self.page - 1)
            .ok()?
            .checked_mul(self.per_page)?;
        Some((start, start.saturating_add(self.per_page)))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Slice the requested page out of `items`.
///
/// A page past the end, or a page number below 1, yields an empty window.
/// Never fails.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Vec<T> {
    match request.bounds() {
        Some((start, end)) if start < items.len() => {
            items.into_iter().skip(start).take(end - start).collect()
        }
        _ => Vec::new(),
    }
}
