//! Textual projection of a numeric source.

use std::marker::PhantomData;

use fieldcache_common::Result;

use crate::canonical::CanonicalText;
use crate::cursor::{NumericIter, TextCursor};
use crate::doc_value::{DocId, DocValue};
use crate::numeric::NumericValues;
use crate::options::ScratchOptions;
use crate::scratch::{StringArrayRef, TextScratch};
use crate::string_values::StringValues;

/// [`StringValues`] over a numeric source of element type `T`.
///
/// Values are converted to their canonical text lazily, on every call, through
/// a formatting buffer and a [`TextScratch`] owned by the projection. Both are
/// overwritten by each call rather than reallocated, so once the scratch has
/// grown to the largest document, reading allocates nothing.
///
/// `is_multi_valued` and `has_value` are answered by the source as is.
pub struct NumericStringValues<T: CanonicalText, S> {
    source: S,
    scratch: TextScratch,
    text: T::Buffer,
    _element: PhantomData<fn() -> T>,
}

pub type ByteStringValues<S> = NumericStringValues<i8, S>;
pub type ShortStringValues<S> = NumericStringValues<i16, S>;
pub type IntStringValues<S> = NumericStringValues<i32, S>;
pub type LongStringValues<S> = NumericStringValues<i64, S>;
pub type FloatStringValues<S> = NumericStringValues<f32, S>;
pub type DoubleStringValues<S> = NumericStringValues<f64, S>;

impl<T, S> NumericStringValues<T, S>
where
    T: CanonicalText,
    S: NumericValues<T>,
{
    pub fn new(source: S) -> Self {
        Self::build(source, &ScratchOptions::default())
    }

    pub fn with_options(source: S, options: &ScratchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(source, options))
    }

    fn build(source: S, options: &ScratchOptions) -> Self {
        log::debug!(
            "string projection over {} values, multi_valued={}",
            T::TYPE_NAME,
            source.is_multi_valued()
        );
        NumericStringValues {
            source,
            scratch: TextScratch::with_capacity(
                options.initial_values,
                options.initial_text_bytes,
            ),
            text: T::new_buffer(),
            _element: PhantomData,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Current scratch storage, for inspection of its reuse.
    pub fn scratch(&self) -> &TextScratch {
        &self.scratch
    }
}

impl<T, S> StringValues for NumericStringValues<T, S>
where
    T: CanonicalText,
    S: NumericValues<T>,
{
    type Iter<'a>
        = NumericTextIter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn is_multi_valued(&self) -> bool {
        self.source.is_multi_valued()
    }

    #[inline]
    fn has_value(&self, doc: DocId) -> bool {
        self.source.has_value(doc)
    }

    #[inline]
    fn value(&mut self, doc: DocId) -> Option<&str> {
        if !self.source.has_value(doc) {
            return None;
        }
        Some(self.source.value(doc).to_canonical_text(&mut self.text))
    }

    fn values(&mut self, doc: DocId) -> StringArrayRef<'_> {
        let values = self.source.values(doc);
        if values.is_empty() {
            return StringArrayRef::EMPTY;
        }
        self.scratch.reset(values.len());
        for &value in values {
            self.scratch.push(value.to_canonical_text(&mut self.text));
        }
        self.scratch.as_array_ref()
    }

    #[inline]
    fn iter(&mut self, doc: DocId) -> NumericTextIter<'_, T> {
        NumericTextIter {
            inner: self.source.iter(doc),
            text: &mut self.text,
        }
    }

    fn for_each_value_in_doc(
        &mut self,
        doc: DocId,
        handler: &mut dyn FnMut(DocId, DocValue<&str>),
    ) {
        let text = &mut self.text;
        self.source
            .for_each_value_in_doc(doc, &mut |doc, value| match value {
                DocValue::Value(value) => {
                    handler(doc, DocValue::Value(value.to_canonical_text(&mut *text)))
                }
                DocValue::Missing => handler(doc, DocValue::Missing),
            });
    }
}

impl<T: CanonicalText, S> std::fmt::Debug for NumericStringValues<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericStringValues")
            .field("element", &T::TYPE_NAME)
            .field("scratch", &self.scratch)
            .finish_non_exhaustive()
    }
}

/// Pull cursor of a [`NumericStringValues`]: forwards to the source cursor and
/// formats each value into the projection's buffer.
pub struct NumericTextIter<'a, T: CanonicalText> {
    inner: NumericIter<'a, T>,
    text: &'a mut T::Buffer,
}

impl<T: CanonicalText> TextCursor for NumericTextIter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    #[inline]
    fn next_value(&mut self) -> &str {
        self.inner.next_value().to_canonical_text(&mut *self.text)
    }
}

#[cfg(test)]
mod tests {
    use fieldcache_common::error::ErrorKind;

    use super::*;
    use crate::column::DocValuesColumn;

    fn int_values() -> IntStringValues<DocValuesColumn<i32>> {
        NumericStringValues::new(DocValuesColumn::from_docs([vec![5], vec![], vec![3, 7]]))
    }

    #[test]
    fn test_value() {
        let mut values = int_values();
        assert!(values.is_multi_valued());
        assert!(values.has_value(0));
        assert_eq!(values.value(0), Some("5"));
        assert!(!values.has_value(1));
        assert_eq!(values.value(1), None);
        assert_eq!(values.value(2), Some("3"));
    }

    #[test]
    fn test_values() {
        let mut values = int_values();
        assert_eq!(values.values(2), ["3", "7"]);
        assert!(values.values(1).is_empty());
        assert_eq!(values.values(0), ["5"]);
    }

    #[test]
    fn test_iter() {
        let mut values = int_values();
        let mut iter = values.iter(2);
        assert!(iter.has_next());
        assert_eq!(iter.next_value(), "3");
        assert_eq!(iter.next_value(), "7");
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), None);

        assert!(!values.iter(1).has_next());
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_iter_past_end_panics() {
        let mut values = int_values();
        let mut iter = values.iter(0);
        iter.next_value();
        iter.next_value();
    }

    #[test]
    #[should_panic]
    fn test_empty_doc_iter_panics() {
        let mut values = int_values();
        values.iter(1).next_value();
    }

    #[test]
    fn test_for_each_value_in_doc() {
        let mut values = int_values();
        let mut events: Vec<(DocId, DocValue<String>)> = Vec::new();
        for doc in 0..3 {
            values.for_each_value_in_doc(doc, &mut |d, v| {
                events.push((d, v.map(str::to_string)))
            });
        }
        assert_eq!(
            events,
            vec![
                (0, DocValue::Value("5".to_string())),
                (1, DocValue::Missing),
                (2, DocValue::Value("3".to_string())),
                (2, DocValue::Value("7".to_string())),
            ]
        );
    }

    #[test]
    fn test_byte_and_float() {
        let mut bytes = ByteStringValues::new(DocValuesColumn::from_docs([[5i8]]));
        assert!(!bytes.is_multi_valued());
        assert_eq!(bytes.value(0), Some("5"));

        let mut floats = FloatStringValues::new(DocValuesColumn::from_docs([[1.5f32]]));
        assert_eq!(floats.value(0), Some("1.5"));
    }

    #[test]
    fn test_remaining_types() {
        let mut shorts = ShortStringValues::new(DocValuesColumn::from_docs([vec![-2i16, 300]]));
        assert_eq!(shorts.values(0), ["-2", "300"]);

        let mut longs = LongStringValues::new(DocValuesColumn::from_docs([vec![i64::MAX]]));
        assert_eq!(longs.value(0), Some("9223372036854775807"));

        let mut doubles = DoubleStringValues::new(DocValuesColumn::from_docs([vec![0.5f64]]));
        assert_eq!(doubles.iter(0).next_value(), "0.5");
    }

    #[test]
    fn test_value_is_idempotent() {
        let mut values = int_values();
        let first = values.value(2).map(str::to_owned);
        let second = values.value(2).map(str::to_owned);
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_scratch_is_overwritten() {
        let mut values =
            IntStringValues::new(DocValuesColumn::from_docs([vec![1, 2, 3], vec![40]]));
        let first = values.values(0).to_vec();
        assert_eq!(first, vec!["1", "2", "3"]);
        let capacity = values.scratch().values_capacity();

        let second = values.values(1);
        assert_eq!(second.len(), 1);
        assert_eq!(second, ["40"]);
        assert_eq!(values.scratch().item_count(), 1);
        assert_eq!(values.scratch().values_capacity(), capacity);
    }

    #[test]
    fn test_with_options() {
        let options = ScratchOptions {
            initial_values: 16,
            initial_text_bytes: 256,
        };
        let values =
            IntStringValues::with_options(DocValuesColumn::from_docs([[1i32]]), &options).unwrap();
        assert!(values.scratch().values_capacity() >= 16);
        assert!(values.scratch().text_capacity() >= 256);

        let err = IntStringValues::with_options(
            DocValuesColumn::from_docs([[1i32]]),
            &ScratchOptions {
                initial_values: 0,
                initial_text_bytes: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn NumericValues<i64>> =
            Box::new(DocValuesColumn::from_docs([vec![1i64, -1]]));
        let mut values = LongStringValues::new(source);
        assert_eq!(values.values(0), ["1", "-1"]);
        assert!(values.source().has_value(0));
    }
}
