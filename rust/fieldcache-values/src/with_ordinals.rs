//! Textual values backed by ordinals into a shared term dictionary.
//!
//! Fields whose values repeat across many documents (tags, categories) keep
//! each distinct term once, and every document only references terms by
//! ordinal. Resolving an ordinal hands out the dictionary's own text, so no
//! decoding or allocation is repeated per document.

use std::sync::Arc;

use fieldcache_common::{Result, error::Error};

use crate::cursor::{EMPTY_ITER, EmptyIter, NumericIter, TextCursor};
use crate::doc_value::{DocId, DocValue};
use crate::options::ScratchOptions;
use crate::ordinals::{DocOrdinals, EmptyOrdinals, MISSING_ORDINAL, Ordinal};
use crate::scratch::{StringArrayRef, TextScratch};
use crate::string_values::StringValues;

/// [`StringValues`] that also expose the ordinals behind the values.
///
/// For every document, resolving each ordinal of `ordinals().ords(doc)` through
/// [`value_by_ord`](Self::value_by_ord) yields the same sequence as
/// [`values`](StringValues::values).
pub trait WithOrdinals: StringValues {
    type Ordinals: DocOrdinals;

    /// Per-document ordinal sequences.
    fn ordinals(&self) -> &Self::Ordinals;

    /// Resolves an ordinal to its term, independently of any document.
    /// Returns `None` for [`MISSING_ORDINAL`] and unknown ordinals.
    fn value_by_ord(&self, ord: Ordinal) -> Option<&str>;
}

/// Distinct terms of a field, addressed by ordinal.
///
/// Cheap to clone; all clones share the same terms.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    terms: Arc<[Box<str>]>,
}

impl TermDictionary {
    /// Builds a dictionary where the `k`-th term gets ordinal `k + 1`.
    pub fn from_terms<I, S>(terms: I) -> TermDictionary
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        TermDictionary {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of terms, i.e. the highest valid ordinal.
    #[inline]
    pub fn num_ords(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn get(&self, ord: Ordinal) -> Option<&str> {
        if ord == MISSING_ORDINAL {
            return None;
        }
        self.terms.get(ord as usize - 1).map(|term| &**term)
    }

    /// Returns the term of a valid ordinal.
    ///
    /// # Panics
    ///
    /// Panics on [`MISSING_ORDINAL`] or an ordinal past the last term.
    #[inline]
    pub fn term(&self, ord: Ordinal) -> &str {
        match self.get(ord) {
            Some(term) => term,
            None => panic!("ordinal {ord} is not in the dictionary"),
        }
    }
}

/// [`WithOrdinals`] for a field where no document has a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyWithOrdinals {
    ordinals: EmptyOrdinals,
}

impl EmptyWithOrdinals {
    pub fn new(ordinals: EmptyOrdinals) -> EmptyWithOrdinals {
        EmptyWithOrdinals { ordinals }
    }
}

impl StringValues for EmptyWithOrdinals {
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

impl WithOrdinals for EmptyWithOrdinals {
    type Ordinals = EmptyOrdinals;

    fn ordinals(&self) -> &EmptyOrdinals {
        &self.ordinals
    }

    fn value_by_ord(&self, _ord: Ordinal) -> Option<&str> {
        None
    }
}

/// [`WithOrdinals`] over an ordinals provider and its term dictionary.
#[derive(Debug)]
pub struct OrdinalStringValues<O> {
    ordinals: O,
    dictionary: TermDictionary,
    scratch: TextScratch,
}

impl<O: DocOrdinals> OrdinalStringValues<O> {
    /// Pairs `ordinals` with `dictionary`, which must hold a term for every
    /// ordinal referenced by any document.
    pub fn new(ordinals: O, dictionary: TermDictionary) -> Result<Self> {
        Self::with_options(ordinals, dictionary, &ScratchOptions::default())
    }

    pub fn with_options(
        ordinals: O,
        dictionary: TermDictionary,
        options: &ScratchOptions,
    ) -> Result<Self> {
        options.validate()?;
        if ordinals.num_ords() > dictionary.num_ords() {
            return Err(Error::ordinal_out_of_range(
                ordinals.num_ords() as Ordinal,
                dictionary.num_ords(),
            ));
        }
        for doc in 0..ordinals.num_docs() {
            for &ord in ordinals.ords(doc as DocId) {
                if dictionary.get(ord).is_none() {
                    return Err(Error::ordinal_out_of_range(ord, dictionary.num_ords()));
                }
            }
        }
        log::debug!(
            "ordinal string values over {} docs, {} terms, multi_valued={}",
            ordinals.num_docs(),
            dictionary.num_ords(),
            ordinals.is_multi_valued()
        );
        Ok(OrdinalStringValues {
            ordinals,
            dictionary,
            scratch: TextScratch::with_capacity(
                options.initial_values,
                options.initial_text_bytes,
            ),
        })
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }
}

impl<O: DocOrdinals> StringValues for OrdinalStringValues<O> {
    type Iter<'a>
        = OrdinalTextIter<'a>
    where
        Self: 'a;

    #[inline]
    fn is_multi_valued(&self) -> bool {
        self.ordinals.is_multi_valued()
    }

    #[inline]
    fn has_value(&self, doc: DocId) -> bool {
        self.ordinals.ord(doc) != MISSING_ORDINAL
    }

    #[inline]
    fn value(&mut self, doc: DocId) -> Option<&str> {
        match self.ordinals.ord(doc) {
            MISSING_ORDINAL => None,
            ord => Some(self.dictionary.term(ord)),
        }
    }

    fn values(&mut self, doc: DocId) -> StringArrayRef<'_> {
        let ords = self.ordinals.ords(doc);
        if ords.is_empty() {
            return StringArrayRef::EMPTY;
        }
        self.scratch.reset(ords.len());
        for &ord in ords {
            self.scratch.push(self.dictionary.term(ord));
        }
        self.scratch.as_array_ref()
    }

    #[inline]
    fn iter(&mut self, doc: DocId) -> OrdinalTextIter<'_> {
        OrdinalTextIter {
            ords: self.ordinals.iter(doc),
            dictionary: &self.dictionary,
        }
    }

    fn for_each_value_in_doc(
        &mut self,
        doc: DocId,
        handler: &mut dyn FnMut(DocId, DocValue<&str>),
    ) {
        let dictionary = &self.dictionary;
        self.ordinals
            .for_each_ordinal_in_doc(doc, &mut |doc, ord| match ord {
                DocValue::Value(ord) => handler(doc, DocValue::Value(dictionary.term(ord))),
                DocValue::Missing => handler(doc, DocValue::Missing),
            });
    }
}

impl<O: DocOrdinals> WithOrdinals for OrdinalStringValues<O> {
    type Ordinals = O;

    #[inline]
    fn ordinals(&self) -> &O {
        &self.ordinals
    }

    #[inline]
    fn value_by_ord(&self, ord: Ordinal) -> Option<&str> {
        self.dictionary.get(ord)
    }
}

/// Pull cursor of an [`OrdinalStringValues`].
pub struct OrdinalTextIter<'a> {
    ords: NumericIter<'a, Ordinal>,
    dictionary: &'a TermDictionary,
}

impl TextCursor for OrdinalTextIter<'_> {
    #[inline]
    fn has_next(&self) -> bool {
        self.ords.has_next()
    }

    #[inline]
    fn next_value(&mut self) -> &str {
        self.dictionary.term(self.ords.next_value())
    }
}
