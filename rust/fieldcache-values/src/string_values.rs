//! The uniform textual view of a field's per-document values.

use crate::cursor::{EMPTY_ITER, EmptyIter, TextCursor};
use crate::doc_value::{DocId, DocValue};
use crate::scratch::StringArrayRef;

/// Textual values of one field within one segment.
///
/// There are four ways to read a document, and all of them observe the same
/// values in the same order (the order of the underlying source):
/// - [`value`](Self::value): the first value, or `None`,
/// - [`values`](Self::values): all values as a borrowed view,
/// - [`iter`](Self::iter): a pull cursor,
/// - [`for_each_value_in_doc`](Self::for_each_value_in_doc): push traversal.
///
/// Results borrow the instance's scratch storage and remain valid only until
/// the next call on the same instance. An instance is not reentrant; concurrent
/// consumers each need their own.
pub trait StringValues {
    /// Cursor returned by [`iter`](Self::iter).
    type Iter<'a>: TextCursor
    where
        Self: 'a;

    /// Returns `true` if any document of this field may carry more than one
    /// value.
    fn is_multi_valued(&self) -> bool;

    /// Returns `true` if the document has at least one value.
    fn has_value(&self, doc: DocId) -> bool;

    /// Returns the first value of the document in source order, or `None` if
    /// the document has no values.
    fn value(&mut self, doc: DocId) -> Option<&str>;

    /// Returns all values of the document, or an empty view.
    fn values(&mut self, doc: DocId) -> StringArrayRef<'_>;

    /// Returns a single-pass cursor over the document's values.
    fn iter(&mut self, doc: DocId) -> Self::Iter<'_>;

    /// Pushes each value of the document to `handler` in order, or exactly one
    /// [`DocValue::Missing`] if the document has no values.
    fn for_each_value_in_doc(
        &mut self,
        doc: DocId,
        handler: &mut dyn FnMut(DocId, DocValue<&str>),
    );
}

/// A field without any values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStringValues;

impl StringValues for EmptyStringValues {
    type Iter<'a> = EmptyIter;

    #[inline]
    fn is_multi_valued(&self) -> bool {
        false
    }

    #[inline]
    fn has_value(&self, _doc: DocId) -> bool {
        false
    }

    #[inline]
    fn value(&mut self, _doc: DocId) -> Option<&str> {
        None
    }

    #[inline]
    fn values(&mut self, _doc: DocId) -> StringArrayRef<'_> {
        StringArrayRef::EMPTY
    }

    #[inline]
    fn iter(&mut self, _doc: DocId) -> EmptyIter {
        EMPTY_ITER
    }

    #[inline]
    fn for_each_value_in_doc(
        &mut self,
        doc: DocId,
        handler: &mut dyn FnMut(DocId, DocValue<&str>),
    ) {
        handler(doc, DocValue::Missing);
    }
}
