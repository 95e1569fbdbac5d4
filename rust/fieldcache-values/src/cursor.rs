//! Pull-style cursors over the values of a single document.
//!
//! Two families exist:
//! - [`NumericIter`], the cursor handed out by numeric sources and ordinal
//!   providers. Its items are plain `Copy` values, so it also implements
//!   [`Iterator`].
//! - [`TextCursor`] implementors, handed out by string projections. Their items
//!   borrow from the cursor's own formatting buffer, so they are lending cursors
//!   rather than iterators.
//!
//! Both are single-pass and cannot be restarted. Advancing an exhausted cursor
//! through `next_value` is a caller bug and panics.

use std::slice;

/// A lending cursor over the textual values of one document.
pub trait TextCursor {
    /// Returns `true` if another value is available.
    fn has_next(&self) -> bool;

    /// Returns the next value.
    ///
    /// The returned text is valid until the next call on this cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted (`has_next()` is `false`).
    fn next_value(&mut self) -> &str;

    /// Returns the next value, or `None` once the cursor is exhausted.
    fn try_next(&mut self) -> Option<&str> {
        if self.has_next() {
            Some(self.next_value())
        } else {
            None
        }
    }

    /// Counts the remaining values, consuming the cursor.
    fn count_remaining(&mut self) -> usize {
        let mut count = 0;
        while self.has_next() {
            self.next_value();
            count += 1;
        }
        count
    }
}

/// The cursor of a document without values.
///
/// Carries no state, so one instance can be freely shared; [`EMPTY_ITER`] is
/// the canonical one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyIter;

/// Shared immutable empty cursor.
pub const EMPTY_ITER: EmptyIter = EmptyIter;

impl TextCursor for EmptyIter {
    #[inline]
    fn has_next(&self) -> bool {
        false
    }

    #[cold]
    fn next_value(&mut self) -> &str {
        panic!("next_value() called on an empty cursor")
    }
}

/// Cursor over the raw values of one document.
#[derive(Debug, Clone)]
pub enum NumericIter<'a, T> {
    /// The document has no values.
    Empty,
    /// The document has exactly one value.
    Single { value: T, done: bool },
    /// The document has several values, yielded in source order.
    Multi(slice::Iter<'a, T>),
}

impl<'a, T: Copy> NumericIter<'a, T> {
    #[inline]
    pub fn empty() -> Self {
        NumericIter::Empty
    }

    #[inline]
    pub fn single(value: T) -> Self {
        NumericIter::Single { value, done: false }
    }

    /// Picks the cheapest cursor shape for the given document values.
    #[inline]
    pub fn from_slice(values: &'a [T]) -> Self {
        match values {
            [] => NumericIter::Empty,
            [value] => NumericIter::single(*value),
            _ => NumericIter::Multi(values.iter()),
        }
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        match self {
            NumericIter::Empty => false,
            NumericIter::Single { done, .. } => !*done,
            NumericIter::Multi(iter) => iter.len() != 0,
        }
    }

    /// Returns the next value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    #[inline]
    pub fn next_value(&mut self) -> T {
        match self {
            NumericIter::Empty => exhausted(),
            NumericIter::Single { value, done } => {
                if *done {
                    exhausted();
                }
                *done = true;
                *value
            }
            NumericIter::Multi(iter) => match iter.next() {
                Some(value) => *value,
                None => exhausted(),
            },
        }
    }

    /// Number of values not yet yielded.
    #[inline]
    pub fn remaining(&self) -> usize {
        match self {
            NumericIter::Empty => 0,
            NumericIter::Single { done, .. } => usize::from(!*done),
            NumericIter::Multi(iter) => iter.len(),
        }
    }
}

impl<T: Copy> Iterator for NumericIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.has_next() {
            Some(self.next_value())
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for NumericIter<'_, T> {}

#[cold]
#[inline(never)]
fn exhausted() -> ! {
    panic!("next_value() called on an exhausted cursor")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_iter() {
        let mut iter = EMPTY_ITER;
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), None);
        assert_eq!(iter.count_remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "empty cursor")]
    fn test_empty_iter_next_panics() {
        let mut iter = EmptyIter;
        iter.next_value();
    }

    #[test]
    fn test_from_slice_shapes() {
        assert!(matches!(NumericIter::<i32>::from_slice(&[]), NumericIter::Empty));
        assert!(matches!(
            NumericIter::from_slice(&[4]),
            NumericIter::Single { value: 4, done: false }
        ));
        assert!(matches!(NumericIter::from_slice(&[1, 2]), NumericIter::Multi(_)));
    }

    #[test]
    fn test_single() {
        let mut iter = NumericIter::single(7i64);
        assert!(iter.has_next());
        assert_eq!(iter.remaining(), 1);
        assert_eq!(iter.next_value(), 7);
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_multi_preserves_order() {
        let values = [3, 1, 3, 2];
        let iter = NumericIter::from_slice(&values);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![3, 1, 3, 2]);
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_single_next_after_end_panics() {
        let mut iter = NumericIter::single(1i8);
        iter.next_value();
        iter.next_value();
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_multi_next_after_end_panics() {
        let values = [1i16, 2];
        let mut iter = NumericIter::from_slice(&values);
        iter.next_value();
        iter.next_value();
        iter.next_value();
    }
}
