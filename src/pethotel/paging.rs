//! Fixed-size windows over a result list.

/// Rows shown per page unless configured otherwise.
pub const PAGE_SIZE: usize = 10;

/// One window of a list plus whether there is anything either side of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub start: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// 1-based page number for display.
    pub fn number(&self, page_size: usize) -> usize {
        self.start / page_size.max(1) + 1
    }
}

/// `items[start .. start + page_size]`, clamped to the list.
pub fn page<T: Clone>(items: &[T], start: usize, page_size: usize) -> Page<T> {
    let from = start.min(items.len());
    let to = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[from..to].to_vec(),
        start,
        has_prev: start > 0,
        has_next: start.saturating_add(page_size) < items.len(),
    }
}

/// Tracks the window start for a list being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    start: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            start: 0,
            page_size: page_size.max(1),
        }
    }

    /// Positions the pager on a 1-based page number.
    pub fn at_page(page_size: usize, number: usize) -> Self {
        let mut pager = Self::new(page_size);
        pager.start = number.saturating_sub(1).saturating_mul(pager.page_size);
        pager
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves one page forward or back. Returns false, leaving the position
    /// unchanged, when the new start would fall before 0 or at/after `len`.
    pub fn step(&mut self, forward: bool, len: usize) -> bool {
        let next = if forward {
            self.start.checked_add(self.page_size)
        } else {
            self.start.checked_sub(self.page_size)
        };
        match next {
            Some(start) if start < len => {
                self.start = start;
                true
            }
            _ => false,
        }
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.step(true, len)
    }

    pub fn prev(&mut self, len: usize) -> bool {
        self.step(false, len)
    }

    pub fn view<T: Clone>(&self, items: &[T]) -> Page<T> {
        page(items, self.start, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_short_list() {
        let items: Vec<u32> = (0..4).collect();
        let p = page(&items, 0, PAGE_SIZE);
        assert_eq!(p.items, items);
        assert!(!p.has_prev);
        assert!(!p.has_next);
    }

    #[test]
    fn exact_multiple_has_no_next() {
        let items: Vec<u32> = (0..20).collect();
        let p = page(&items, 10, PAGE_SIZE);
        assert_eq!(p.items, (10..20).collect::<Vec<_>>());
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert_eq!(p.number(PAGE_SIZE), 2);
    }

    #[test]
    fn start_past_end_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        let p = page(&items, 30, PAGE_SIZE);
        assert!(p.items.is_empty());
        assert!(p.has_prev);
        assert!(!p.has_next);
    }

    #[test]
    fn pages_concatenate_to_the_whole_list() {
        for len in [0usize, 1, 9, 10, 11, 25, 30] {
            let items: Vec<usize> = (0..len).collect();
            let mut pager = Pager::default();
            let mut seen = pager.view(&items).items;
            while pager.next(items.len()) {
                seen.extend(pager.view(&items).items);
            }
            assert_eq!(seen, items, "len {}", len);
        }
    }

    #[test]
    fn stepping_out_of_range_is_a_noop() {
        let mut pager = Pager::default();
        assert!(!pager.prev(25));
        assert_eq!(pager.start(), 0);

        assert!(pager.next(25));
        assert!(pager.next(25));
        assert_eq!(pager.start(), 20);
        assert!(!pager.next(25));
        assert_eq!(pager.start(), 20);

        assert!(pager.prev(25));
        assert_eq!(pager.start(), 10);
    }

    #[test]
    fn next_on_empty_list_stays_put() {
        let mut pager = Pager::default();
        assert!(!pager.next(0));
        assert_eq!(pager.start(), 0);
    }

    #[test]
    fn at_page_counts_from_one() {
        assert_eq!(Pager::at_page(10, 1).start(), 0);
        assert_eq!(Pager::at_page(10, 3).start(), 20);
        assert_eq!(Pager::at_page(10, 0).start(), 0);
    }

    #[test]
    fn huge_page_numbers_give_an_empty_page() {
        let pager = Pager::at_page(10, usize::MAX);
        let p = pager.view(&[1, 2, 3]);
        assert!(p.items.is_empty());
        assert!(p.has_prev);
        assert!(!p.has_next);

        let p = Pager::at_page(usize::MAX, 2).view(&[1, 2, 3]);
        assert!(p.items.is_empty());
    }

    #[test]
    fn stepping_forward_near_the_limit_is_refused() {
        let mut pager = Pager::at_page(usize::MAX, 2);
        let start = pager.start();
        assert!(!pager.next(usize::MAX));
        assert_eq!(pager.start(), start);
    }
}
