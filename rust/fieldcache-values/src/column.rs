//! In-memory, offsets-encoded column of per-document values.

use std::sync::Arc;

use fieldcache_common::{Result, verify_data};

use crate::cursor::NumericIter;
use crate::doc_value::{DocId, DocValue};
use crate::numeric::NumericValues;

/// Values of one field for every document of a segment.
///
/// Values of all documents are stored back to back; `offsets[d]..offsets[d + 1]`
/// is the range of document `d`, so `offsets` has `num_docs + 1` entries and
/// starts at zero. A document with an empty range has no values.
///
/// The storage is shared: cloning a column is cheap, which lets every consumer
/// thread wrap its own projection around the same data.
#[derive(Debug, Clone)]
pub struct DocValuesColumn<T> {
    values: Arc<[T]>,
    offsets: Arc<[u64]>,
    multi_valued: bool,
}

impl<T: Copy + Default> DocValuesColumn<T> {
    /// Creates a column from its raw parts, validating the offsets.
    pub fn from_parts(values: Vec<T>, offsets: Vec<u64>) -> Result<DocValuesColumn<T>> {
        verify_data!(offsets, !offsets.is_empty());
        verify_data!(offsets, offsets[0] == 0);
        verify_data!(offsets, offsets.windows(2).all(|w| w[0] <= w[1]));
        verify_data!(offsets, offsets[offsets.len() - 1] == values.len() as u64);
        Ok(Self::new_unchecked(values, offsets))
    }

    /// Creates a column from per-document value slices.
    pub fn from_docs<I, D>(docs: I) -> DocValuesColumn<T>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[T]>,
    {
        let mut builder = DocValuesColumnBuilder::new();
        for doc in docs {
            builder.push_doc(doc.as_ref());
        }
        builder.build()
    }

    fn new_unchecked(values: Vec<T>, offsets: Vec<u64>) -> DocValuesColumn<T> {
        let multi_valued = offsets.windows(2).any(|w| w[1] - w[0] > 1);
        log::debug!(
            "column with {} docs, {} values, multi_valued={}",
            offsets.len() - 1,
            values.len(),
            multi_valued
        );
        DocValuesColumn {
            values: values.into(),
            offsets: offsets.into(),
            multi_valued,
        }
    }

    #[inline]
    pub fn num_docs(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of values across all documents.
    #[inline]
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Returns the values of `doc`.
    ///
    /// # Panics
    ///
    /// Panics if `doc` is not below [`num_docs`](Self::num_docs).
    #[inline]
    pub fn doc_values(&self, doc: DocId) -> &[T] {
        let doc = doc as usize;
        let start = self.offsets[doc] as usize;
        let end = self.offsets[doc + 1] as usize;
        &self.values[start..end]
    }

    /// Returns the number of values of `doc`.
    #[inline]
    pub fn value_count(&self, doc: DocId) -> usize {
        let doc = doc as usize;
        (self.offsets[doc + 1] - self.offsets[doc]) as usize
    }
}

impl<T: Copy + Default> NumericValues<T> for DocValuesColumn<T> {
    #[inline]
    fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    #[inline]
    fn has_value(&self, doc: DocId) -> bool {
        self.value_count(doc) != 0
    }

    #[inline]
    fn value(&self, doc: DocId) -> T {
        self.doc_values(doc).first().copied().unwrap_or_default()
    }

    #[inline]
    fn values(&mut self, doc: DocId) -> &[T] {
        self.doc_values(doc)
    }

    #[inline]
    fn iter(&mut self, doc: DocId) -> NumericIter<'_, T> {
        NumericIter::from_slice(self.doc_values(doc))
    }

    fn for_each_value_in_doc(&mut self, doc: DocId, handler: &mut dyn FnMut(DocId, DocValue<T>)) {
        match self.doc_values(doc) {
            [] => handler(doc, DocValue::Missing),
            values => values
                .iter()
                .for_each(|&value| handler(doc, DocValue::Value(value))),
        }
    }
}

/// Incrementally builds a [`DocValuesColumn`], one document at a time.
#[derive(Debug, Clone)]
pub struct DocValuesColumnBuilder<T> {
    values: Vec<T>,
    offsets: Vec<u64>,
}

impl<T: Copy + Default> DocValuesColumnBuilder<T> {
    pub fn new() -> DocValuesColumnBuilder<T> {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(docs: usize, values: usize) -> DocValuesColumnBuilder<T> {
        let mut offsets = Vec::with_capacity(docs + 1);
        offsets.push(0);
        DocValuesColumnBuilder {
            values: Vec::with_capacity(values),
            offsets,
        }
    }

    /// Appends the next document with the given values (possibly none).
    pub fn push_doc(&mut self, values: &[T]) -> &mut Self {
        self.values.extend_from_slice(values);
        self.offsets.push(self.values.len() as u64);
        self
    }

    /// Appends the next document without values.
    pub fn push_missing(&mut self) -> &mut Self {
        self.push_doc(&[])
    }

    /// Number of documents appended so far.
    pub fn num_docs(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn build(self) -> DocValuesColumn<T> {
        DocValuesColumn::new_unchecked(self.values, self.offsets)
    }
}

impl<T: Copy + Default> Default for DocValuesColumnBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
