//! Per-document ordinals into a deduplicated term dictionary.
//!
//! Ordinal `0` is reserved for "no value"; the terms of a dictionary with
//! `num_ords` entries are addressed by ordinals `1..=num_ords`.

use fieldcache_common::{Result, error::Error};

use crate::column::DocValuesColumn;
use crate::cursor::NumericIter;
use crate::doc_value::{DocId, DocValue};
use crate::numeric::NumericValues;

pub type Ordinal = u32;

/// The ordinal of a document without values.
pub const MISSING_ORDINAL: Ordinal = 0;

/// Ordinal sequences of every document of a segment.
pub trait DocOrdinals {
    fn num_docs(&self) -> usize;

    /// Number of distinct ordinals, excluding [`MISSING_ORDINAL`].
    fn num_ords(&self) -> usize;

    /// Returns `true` if any document may reference more than one ordinal.
    fn is_multi_valued(&self) -> bool;

    /// Returns the first ordinal of the document, or [`MISSING_ORDINAL`].
    fn ord(&self, doc: DocId) -> Ordinal;

    /// Returns the ordinals of the document, in the order the document
    /// references them.
    fn ords(&self, doc: DocId) -> &[Ordinal];

    fn iter(&self, doc: DocId) -> NumericIter<'_, Ordinal> {
        NumericIter::from_slice(self.ords(doc))
    }

    /// Pushes each ordinal of the document to `handler`, or a single
    /// [`DocValue::Missing`].
    fn for_each_ordinal_in_doc(
        &self,
        doc: DocId,
        handler: &mut dyn FnMut(DocId, DocValue<Ordinal>),
    ) {
        match self.ords(doc) {
            [] => handler(doc, DocValue::Missing),
            ords => ords
                .iter()
                .for_each(|&ord| handler(doc, DocValue::Value(ord))),
        }
    }
}

/// Ordinals of a field where no document has a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyOrdinals {
    num_docs: usize,
}

impl EmptyOrdinals {
    pub fn new(num_docs: usize) -> EmptyOrdinals {
        EmptyOrdinals { num_docs }
    }
}

impl DocOrdinals for EmptyOrdinals {
    fn num_docs(&self) -> usize {
        self.num_docs
    }

    fn num_ords(&self) -> usize {
        0
    }

    fn is_multi_valued(&self) -> bool {
        false
    }

    fn ord(&self, _doc: DocId) -> Ordinal {
        MISSING_ORDINAL
    }

    fn ords(&self, _doc: DocId) -> &[Ordinal] {
        &[]
    }

    fn iter(&self, _doc: DocId) -> NumericIter<'_, Ordinal> {
        NumericIter::Empty
    }
}

/// In-memory ordinals, stored as a column of per-document ordinals.
#[derive(Debug, Clone)]
pub struct OrdinalsColumn {
    column: DocValuesColumn<Ordinal>,
    num_ords: usize,
}

impl OrdinalsColumn {
    /// Wraps `column`, checking that it only references ordinals in
    /// `1..=num_ords`.
    pub fn new(column: DocValuesColumn<Ordinal>, num_ords: usize) -> Result<OrdinalsColumn> {
        for doc in 0..column.num_docs() {
            for &ord in column.doc_values(doc as DocId) {
                if ord == MISSING_ORDINAL || ord as usize > num_ords {
                    return Err(Error::ordinal_out_of_range(ord, num_ords));
                }
            }
        }
        Ok(OrdinalsColumn { column, num_ords })
    }

    pub fn from_docs<I, D>(docs: I, num_ords: usize) -> Result<OrdinalsColumn>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[Ordinal]>,
    {
        Self::new(DocValuesColumn::from_docs(docs), num_ords)
    }

    pub fn column(&self) -> &DocValuesColumn<Ordinal> {
        &self.column
    }
}

impl DocOrdinals for OrdinalsColumn {
    fn num_docs(&self) -> usize {
        self.column.num_docs()
    }

    fn num_ords(&self) -> usize {
        self.num_ords
    }

    fn is_multi_valued(&self) -> bool {
        self.column.is_multi_valued()
    }

    fn ord(&self, doc: DocId) -> Ordinal {
        self.column.value(doc)
    }

    fn ords(&self, doc: DocId) -> &[Ordinal] {
        self.column.doc_values(doc)
    }
}

#[cfg(test)]
mod tests {
    use fieldcache_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_empty_ordinals() {
        let ords = EmptyOrdinals::new(4);
        assert_eq!(ords.num_docs(), 4);
        assert_eq!(ords.num_ords(), 0);
        assert!(!ords.is_multi_valued());
        assert_eq!(ords.ord(2), MISSING_ORDINAL);
        assert!(ords.ords(2).is_empty());
        assert!(!ords.iter(2).has_next());

        let mut events = Vec::new();
        ords.for_each_ordinal_in_doc(3, &mut |doc, ord| events.push((doc, ord)));
        assert_eq!(events, vec![(3, DocValue::Missing)]);
    }

    #[test]
    fn test_ordinals_column() {
        let ords = OrdinalsColumn::from_docs([vec![2], vec![], vec![1, 2, 1]], 2).unwrap();
        assert_eq!(ords.num_docs(), 3);
        assert_eq!(ords.num_ords(), 2);
        assert!(ords.is_multi_valued());
        assert_eq!(ords.ord(0), 2);
        assert_eq!(ords.ord(1), MISSING_ORDINAL);
        assert_eq!(ords.ords(2), &[1, 2, 1]);
        assert_eq!(ords.iter(2).collect::<Vec<_>>(), vec![1, 2, 1]);

        let mut events = Vec::new();
        ords.for_each_ordinal_in_doc(2, &mut |_, ord| events.push(ord));
        assert_eq!(
            events,
            vec![DocValue::Value(1), DocValue::Value(2), DocValue::Value(1)]
        );
    }

    #[test]
    fn test_ordinals_out_of_range() {
        let err = OrdinalsColumn::from_docs([vec![1], vec![3]], 2).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::OrdinalOutOfRange {
                ordinal: 3,
                num_ords: 2
            }
        ));

        let err = OrdinalsColumn::from_docs([vec![MISSING_ORDINAL]], 2).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::OrdinalOutOfRange { .. }));
    }
}
