use std::fmt;
use std::ops::RangeInclusive;

use super::{Page, PaginatorError, PaginatorResult};
use crate::TRACING_TARGET_PAGINATOR;

/// Splits a borrowed slice of records into fixed-size, 1-indexed pages.
///
/// `total_count` and `page_count` are computed once in [`Paginator::new`].
/// The slice is borrowed for the paginator's whole lifetime, so it cannot
/// change underneath the cached counts.
///
/// ```
/// use polis_core::{Paginator, PaginatorError};
///
/// let rows = ["a", "b", "c"];
/// let paginator = Paginator::new(&rows, 2)?;
///
/// assert_eq!(paginator.total_count(), 3);
/// assert_eq!(paginator.page_count(), 2);
/// assert_eq!(paginator.page(2)?.items(), &["c"]);
/// assert_eq!(
///     paginator.page(3).unwrap_err(),
///     PaginatorError::PageOutOfRange { number: 3, page_count: 2 },
/// );
/// # Ok::<(), PaginatorError>(())
/// ```
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
    total_count: usize,
    page_count: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Creates a paginator over `items` with `page_size` records per page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginatorError::InvalidPageSize`] if `page_size` is zero.
    pub fn new(items: &'a [T], page_size: usize) -> PaginatorResult<Self> {
        if page_size == 0 {
            return Err(PaginatorError::InvalidPageSize);
        }

        let total_count = items.len();
        let page_count = total_count.div_ceil(page_size);

        tracing::trace!(
            target: TRACING_TARGET_PAGINATOR,
            total_count,
            page_size,
            page_count,
            "Created paginator"
        );

        Ok(Self {
            items,
            page_size,
            total_count,
            page_count,
        })
    }

    /// Returns the number of records per page.
    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of records across all pages.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of pages, which is zero for an empty slice.
    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the valid page numbers, `1..=page_count`.
    #[inline]
    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }

    /// Checks that `number` names an existing page and returns it.
    ///
    /// # Errors
    ///
    /// - [`PaginatorError::PageUnderflow`] if `number` is below 1.
    /// - [`PaginatorError::PageOutOfRange`] if `number` is past the last page.
    pub fn validate_number(&self, number: i64) -> PaginatorResult<usize> {
        if number < 1 {
            return Err(PaginatorError::PageUnderflow { number });
        }

        match usize::try_from(number) {
            Ok(valid) if valid <= self.page_count => Ok(valid),
            _ => Err(PaginatorError::PageOutOfRange {
                number,
                page_count: self.page_count,
            }),
        }
    }

    /// Returns the page with the given 1-based `number`.
    ///
    /// The last page may hold fewer than [`page_size`] records.
    ///
    /// # Errors
    ///
    /// Fails the same way as [`validate_number`].
    ///
    /// [`page_size`]: Paginator::page_size
    /// [`validate_number`]: Paginator::validate_number
    pub fn page(&self, number: i64) -> PaginatorResult<Page<'_, T>> {
        let number = self.validate_number(number).inspect_err(|error| {
            tracing::debug!(
                target: TRACING_TARGET_PAGINATOR,
                %error,
                page_count = self.page_count,
                "Rejected page request"
            );
        })?;

        Ok(self.page_at(number))
    }

    /// Iterates over every page in order.
    pub fn pages(&self) -> impl Iterator<Item = Page<'_, T>> + '_ {
        self.page_range().map(|number| self.page_at(number))
    }

    /// Builds the page for an already validated `number`.
    fn page_at(&self, number: usize) -> Page<'_, T> {
        let bottom = (number - 1) * self.page_size;
        let top = bottom.saturating_add(self.page_size).min(self.total_count);
        Page::new(&self.items[bottom..top], number, self)
    }
}

impl<T> Clone for Paginator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Paginator<'_, T> {}

impl<T> fmt::Debug for Paginator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("page_size", &self.page_size)
            .field("total_count", &self.total_count)
            .field("page_count", &self.page_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: u32) -> Vec<u32> {
        (1..=count).collect()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let items = records(5);
        let result = Paginator::new(&items, 0);
        assert_eq!(result.unwrap_err(), PaginatorError::InvalidPageSize);
    }

    #[test]
    fn counts_for_partial_last_page() {
        let items = records(25);
        let paginator = Paginator::new(&items, 10).unwrap();
        assert_eq!(paginator.total_count(), 25);
        assert_eq!(paginator.page_count(), 3);
        assert_eq!(paginator.page_range(), 1..=3);
    }

    #[test]
    fn counts_are_stable_across_calls() {
        let items = records(7);
        let paginator = Paginator::new(&items, 3).unwrap();
        for _ in 0..3 {
            assert_eq!(paginator.total_count(), 7);
            assert_eq!(paginator.page_count(), 3);
        }
    }

    #[test]
    fn empty_slice_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let paginator = Paginator::new(&items, 10).unwrap();
        assert_eq!(paginator.page_count(), 0);
        assert_eq!(paginator.pages().count(), 0);
        assert_eq!(
            paginator.page(1).unwrap_err(),
            PaginatorError::PageOutOfRange {
                number: 1,
                page_count: 0
            }
        );
    }

    #[test]
    fn page_below_one_underflows() {
        let items = records(5);
        let paginator = Paginator::new(&items, 2).unwrap();
        for number in [0, -1, i64::MIN] {
            assert_eq!(
                paginator.page(number).unwrap_err(),
                PaginatorError::PageUnderflow { number }
            );
        }
    }

    #[test]
    fn page_past_last_is_out_of_range() {
        let items = records(5);
        let paginator = Paginator::new(&items, 2).unwrap();
        assert!(paginator.page(3).is_ok());
        assert_eq!(
            paginator.page(4).unwrap_err(),
            PaginatorError::PageOutOfRange {
                number: 4,
                page_count: 3
            }
        );
        assert!(paginator.page(i64::MAX).is_err());
    }

    #[test]
    fn validate_number_returns_number_unchanged() {
        let items = records(30);
        let paginator = Paginator::new(&items, 10).unwrap();
        assert_eq!(paginator.validate_number(1), Ok(1));
        assert_eq!(paginator.validate_number(3), Ok(3));
    }

    #[test]
    fn pages_cover_every_record_once() {
        for total in [1_u32, 9, 10, 11, 99, 100] {
            for page_size in [1_usize, 3, 10, 250] {
                let items = records(total);
                let paginator = Paginator::new(&items, page_size).unwrap();

                let flattened: Vec<u32> = paginator
                    .pages()
                    .flat_map(|page| page.items().to_vec())
                    .collect();
                assert_eq!(flattened, items);

                let last = paginator.page_count();
                for page in paginator.pages() {
                    if page.number() < last {
                        assert_eq!(page.len(), page_size);
                    } else {
                        let expected = paginator.total_count() - page_size * (last - 1);
                        assert_eq!(page.len(), expected);
                        assert!((1..=page_size).contains(&page.len()));
                    }
                }
            }
        }
    }

    #[test]
    fn paginator_is_copy_and_debug_without_bounds() {
        struct Opaque;
        let items = [Opaque, Opaque, Opaque];
        let paginator = Paginator::new(&items, 2).unwrap();
        let copy = paginator;
        assert_eq!(copy.page_count(), paginator.page_count());
        assert_eq!(
            format!("{paginator:?}"),
            "Paginator { page_size: 2, total_count: 3, page_count: 2, .. }"
        );
    }
}
