//! Document identifiers and the push-traversal event type.

/// Segment-local document identifier.
pub type DocId = u32;

/// One event of a push-style traversal over a document's values.
///
/// A traversal of a document with values yields one `Value` per value, in
/// source order. A traversal of a document without values yields exactly one
/// `Missing`. The two are never mixed for the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocValue<V> {
    Value(V),
    Missing,
}

impl<V> DocValue<V> {
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, DocValue::Missing)
    }

    #[inline]
    pub fn value(self) -> Option<V> {
        match self {
            DocValue::Value(v) => Some(v),
            DocValue::Missing => None,
        }
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> DocValue<U> {
        match self {
            DocValue::Value(v) => DocValue::Value(f(v)),
            DocValue::Missing => DocValue::Missing,
        }
    }
}

impl<V> From<Option<V>> for DocValue<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => DocValue::Value(v),
            None => DocValue::Missing,
        }
    }
}
