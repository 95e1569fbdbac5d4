//! The contract of a raw numeric value source.

use crate::cursor::NumericIter;
use crate::doc_value::{DocId, DocValue};

/// Raw typed values of one field across all documents of a segment.
///
/// A document may carry zero, one or many values. The order of a document's
/// values is a property of the source; every access method must observe the
/// same values in the same order.
///
/// Methods taking `&mut self` may use source-owned scratch storage; their
/// results are valid until the next call on the same source.
pub trait NumericValues<T: Copy> {
    /// Returns `true` if any document of this field may carry more than one
    /// value.
    fn is_multi_valued(&self) -> bool;

    /// Returns `true` if the document has at least one value.
    fn has_value(&self, doc: DocId) -> bool;

    /// Returns the first value of the document.
    ///
    /// Only meaningful when [`has_value`](Self::has_value) is `true`; for a
    /// document without values the result is implementation-defined.
    fn value(&self, doc: DocId) -> T;

    /// Returns all values of the document, in source order.
    fn values(&mut self, doc: DocId) -> &[T];

    /// Returns a single-pass cursor over the document's values.
    fn iter(&mut self, doc: DocId) -> NumericIter<'_, T> {
        NumericIter::from_slice(self.values(doc))
    }

    /// Pushes every value of the document to `handler`, or a single
    /// [`DocValue::Missing`] when the document has none.
    fn for_each_value_in_doc(&mut self, doc: DocId, handler: &mut dyn FnMut(DocId, DocValue<T>)) {
        let values = self.values(doc);
        if values.is_empty() {
            handler(doc, DocValue::Missing);
        } else {
            for &value in values {
                handler(doc, DocValue::Value(value));
            }
        }
    }
}

impl<T: Copy, S: NumericValues<T> + ?Sized> NumericValues<T> for Box<S> {
    #[inline]
    fn is_multi_valued(&self) -> bool {
        (**self).is_multi_valued()
    }

    #[inline]
    fn has_value(&self, doc: DocId) -> bool {
        (**self).has_value(doc)
    }

    #[inline]
    fn value(&self, doc: DocId) -> T {
        (**self).value(doc)
    }

    #[inline]
    fn values(&mut self, doc: DocId) -> &[T] {
        (**self).values(doc)
    }

    #[inline]
    fn iter(&mut self, doc: DocId) -> NumericIter<'_, T> {
        (**self).iter(doc)
    }

    #[inline]
    fn for_each_value_in_doc(&mut self, doc: DocId, handler: &mut dyn FnMut(DocId, DocValue<T>)) {
        (**self).for_each_value_in_doc(doc, handler)
    }
}
