use std::fmt;
use std::slice::Iter;

use super::{Paginator, PaginatorResult};

/// One page of records produced by [`Paginator::page`].
///
/// A `Page` only exists for a validated number, so
/// `1 <= number <= paginator.page_count()` always holds.
pub struct Page<'a, T> {
    items: &'a [T],
    number: usize,
    paginator: &'a Paginator<'a, T>,
}

impl<'a, T> Page<'a, T> {
    pub(super) fn new(items: &'a [T], number: usize, paginator: &'a Paginator<'a, T>) -> Self {
        Self {
            items,
            number,
            paginator,
        }
    }

    /// Returns the 1-based page number.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the records on this page.
    #[inline]
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Iterates over the records on this page.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        self.items.iter()
    }

    /// Returns the number of records on this page.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether this page holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the paginator this page was taken from.
    #[inline]
    pub fn paginator(&self) -> &'a Paginator<'a, T> {
        self.paginator
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.number < self.paginator.page_count()
    }

    #[inline]
    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    /// Returns the number of the following page.
    ///
    /// # Errors
    ///
    /// Returns [`PageOutOfRange`] on the last page.
    ///
    /// [`PageOutOfRange`]: super::PaginatorError::PageOutOfRange
    pub fn next_page_number(&self) -> PaginatorResult<usize> {
        self.paginator
            .validate_number(page_number(self.number).saturating_add(1))
    }

    /// Returns the number of the preceding page.
    ///
    /// # Errors
    ///
    /// Returns [`PageUnderflow`] on the first page.
    ///
    /// [`PageUnderflow`]: super::PaginatorError::PageUnderflow
    pub fn previous_page_number(&self) -> PaginatorResult<usize> {
        self.paginator
            .validate_number(page_number(self.number) - 1)
    }

    /// Returns the 1-based position of this page's first record in the
    /// whole collection, or 0 when the collection is empty.
    pub fn start_index(&self) -> usize {
        if self.paginator.total_count() == 0 {
            return 0;
        }

        self.paginator.page_size() * (self.number - 1) + 1
    }

    /// Returns the 1-based position of this page's last record in the
    /// whole collection.
    pub fn end_index(&self) -> usize {
        if self.number == self.paginator.page_count() {
            return self.paginator.total_count();
        }

        self.number * self.paginator.page_size()
    }
}

/// Page numbers never exceed the slice length, which always fits in `i64`.
#[inline]
fn page_number(number: usize) -> i64 {
    i64::try_from(number).unwrap_or(i64::MAX)
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> IntoIterator for &Page<'a, T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("page_count", &self.paginator.page_count())
            .field("items", &self.items)
            .finish()
    }
}

impl<T> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.number, self.paginator.page_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaginatorError;

    fn records(count: u32) -> Vec<u32> {
        (1..=count).collect()
    }

    #[test]
    fn twenty_five_records_in_pages_of_ten() {
        let items = records(25);
        let paginator = Paginator::new(&items, 10).unwrap();
        assert_eq!(paginator.page_count(), 3);

        let first = paginator.page(1).unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(first.start_index(), 1);
        assert_eq!(first.end_index(), 10);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let middle = paginator.page(2).unwrap();
        assert_eq!(middle.items(), &items[10..20]);
        assert_eq!(middle.start_index(), 11);
        assert_eq!(middle.end_index(), 20);
        assert!(middle.has_other_pages());

        let last = paginator.page(3).unwrap();
        assert_eq!(last.len(), 5);
        assert_eq!(last.start_index(), 21);
        assert_eq!(last.end_index(), 25);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn single_full_page_has_no_neighbours() {
        let items = records(10);
        let paginator = Paginator::new(&items, 10).unwrap();
        assert_eq!(paginator.page_count(), 1);

        let page = paginator.page(1).unwrap();
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert!(!page.has_other_pages());
        assert_eq!(page.end_index(), 10);
    }

    #[test]
    fn navigation_is_consistent() {
        let items = records(42);
        let paginator = Paginator::new(&items, 5).unwrap();
        let last = paginator.page_count();

        for page in paginator.pages() {
            let number = page.number();
            if number < last {
                assert_eq!(page.next_page_number(), Ok(number + 1));
            }
            if number > 1 {
                assert_eq!(page.previous_page_number(), Ok(number - 1));
            }
        }
    }

    #[test]
    fn navigation_past_edges_fails() {
        let items = records(6);
        let paginator = Paginator::new(&items, 3).unwrap();

        let first = paginator.page(1).unwrap();
        assert_eq!(
            first.previous_page_number(),
            Err(PaginatorError::PageUnderflow { number: 0 })
        );

        let last = paginator.page(2).unwrap();
        assert_eq!(
            last.next_page_number(),
            Err(PaginatorError::PageOutOfRange {
                number: 3,
                page_count: 2
            })
        );
    }

    #[test]
    fn page_iterates_its_slice() {
        let items = records(7);
        let paginator = Paginator::new(&items, 4).unwrap();
        let page = paginator.page(2).unwrap();

        let collected: Vec<u32> = (&page).into_iter().copied().collect();
        assert_eq!(collected, vec![5, 6, 7]);
        assert_eq!(page.iter().sum::<u32>(), 18);
        assert!(!page.is_empty());
    }

    #[test]
    fn display_and_debug() {
        let items = records(3);
        let paginator = Paginator::new(&items, 2).unwrap();
        let page = paginator.page(2).unwrap();

        assert_eq!(page.to_string(), "Page 2 of 2");
        assert_eq!(
            format!("{page:?}"),
            "Page { number: 2, page_count: 2, items: [3] }"
        );
    }
}
