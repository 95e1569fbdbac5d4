//! Reusable text storage and the borrowed views handed out over it.

use std::ops::Range;

/// Reusable, overwritten-in-place storage for the textual values of one
/// document.
///
/// All values are concatenated into a single `String`; `ends[i]` is the byte
/// offset one past the end of value `i`. Resetting clears the contents but
/// keeps the allocations, so a projection reaches a steady state where reading
/// a document allocates nothing.
#[derive(Debug, Default)]
pub struct TextScratch {
    text: String,
    ends: Vec<usize>,
}

impl TextScratch {
    /// Creates an empty scratch without allocating.
    pub const fn new() -> TextScratch {
        TextScratch {
            text: String::new(),
            ends: Vec::new(),
        }
    }

    /// Creates a scratch with room for `values` values totalling `text_bytes`
    /// bytes.
    pub fn with_capacity(values: usize, text_bytes: usize) -> TextScratch {
        TextScratch {
            text: String::with_capacity(text_bytes),
            ends: Vec::with_capacity(values),
        }
    }

    /// Discards the current contents and makes room for `count` values.
    pub fn reset(&mut self, count: usize) {
        self.text.clear();
        self.ends.clear();
        if self.ends.capacity() < count {
            log::trace!(
                "growing text scratch from {} to {} values",
                self.ends.capacity(),
                count
            );
            self.ends.reserve(count);
        }
    }

    /// Appends one value.
    #[inline]
    pub fn push(&mut self, value: &str) {
        if self.text.capacity() - self.text.len() < value.len() {
            log::trace!("growing text scratch past {} bytes", self.text.capacity());
        }
        self.text.push_str(value);
        self.ends.push(self.text.len());
    }

    /// Number of values currently stored.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.ends.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Number of values the scratch holds without reallocating.
    #[inline]
    pub fn values_capacity(&self) -> usize {
        self.ends.capacity()
    }

    /// Number of text bytes the scratch holds without reallocating.
    #[inline]
    pub fn text_capacity(&self) -> usize {
        self.text.capacity()
    }

    /// Returns a view over all values currently stored.
    #[inline]
    pub fn as_array_ref(&self) -> StringArrayRef<'_> {
        StringArrayRef {
            text: &self.text,
            ends: &self.ends,
            start: 0,
            end: self.ends.len(),
        }
    }
}

/// A borrowed window `[start, end)` over a run of textual values.
///
/// The view borrows the storage of whoever handed it out (typically a
/// projection's [`TextScratch`]) and is therefore only usable until the next
/// call on that owner. Use [`StringArrayRef::to_vec`] to retain the values.
#[derive(Clone, Copy)]
pub struct StringArrayRef<'a> {
    text: &'a str,
    ends: &'a [usize],
    start: usize,
    end: usize,
}

impl<'a> StringArrayRef<'a> {
    /// The view of a document without values.
    pub const EMPTY: StringArrayRef<'static> = StringArrayRef {
        text: "",
        ends: &[],
        start: 0,
        end: 0,
    };

    /// Narrows this view to the values in `range`, relative to the view.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> StringArrayRef<'a> {
        assert!(range.start <= range.end && range.end <= self.len());
        StringArrayRef {
            text: self.text,
            ends: self.ends,
            start: self.start + range.start,
            end: self.start + range.end,
        }
    }

    /// Start of the window within the backing storage.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End (exclusive) of the window within the backing storage.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        if index < self.len() {
            Some(self.at(self.start + index))
        } else {
            None
        }
    }

    #[inline]
    pub fn first(&self) -> Option<&'a str> {
        self.get(0)
    }

    pub fn iter(&self) -> StringArrayIter<'a> {
        StringArrayIter {
            array: *self,
            pos: self.start,
        }
    }

    /// Copies the values out of the borrowed storage.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    #[inline]
    fn at(&self, absolute: usize) -> &'a str {
        let begin = if absolute == 0 {
            0
        } else {
            self.ends[absolute - 1]
        };
        &self.text[begin..self.ends[absolute]]
    }
}

impl std::fmt::Debug for StringArrayRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for StringArrayRef<'_> {
    fn eq(&self, other: &[S]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for StringArrayRef<'_> {
    fn eq(&self, other: &[S; N]) -> bool {
        *self == other[..]
    }
}

impl<'a> IntoIterator for StringArrayRef<'a> {
    type Item = &'a str;
    type IntoIter = StringArrayIter<'a>;

    fn into_iter(self) -> StringArrayIter<'a> {
        self.iter()
    }
}

/// Iterator over the values of a [`StringArrayRef`].
#[derive(Clone)]
pub struct StringArrayIter<'a> {
    array: StringArrayRef<'a>,
    pos: usize,
}

impl<'a> Iterator for StringArrayIter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        if self.pos < self.array.end {
            let value = self.array.at(self.pos);
            self.pos += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StringArrayIter<'_> {}
