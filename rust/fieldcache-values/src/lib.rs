//! Per-document value projections over in-memory field data.
//!
//! Field data keeps the values of one field, for every document of a segment,
//! resident in memory in their raw typed encoding. Consumers such as sort
//! comparators, scripts and aggregation collectors, however, often want a
//! uniform textual view of those values. This crate provides that view without
//! materializing strings at load time and without allocating per access.
//!
//! # Core Concepts
//!
//! ## Sources
//!
//! A [`numeric::NumericValues`] source exposes the raw values of one field for
//! one segment: zero, one or many values per document, in the source's own
//! order. [`column::DocValuesColumn`] is the in-memory implementation.
//!
//! ## Projections
//!
//! A [`string_values::StringValues`] instance wraps exactly one source and
//! offers four equivalent ways of reading a document: existence, single value,
//! the full value set and iteration (pull via [`cursor::TextCursor`], push via
//! a [`doc_value::DocValue`] handler). [`numeric_string::NumericStringValues`]
//! is the single generic projection for all primitive numeric types; the
//! element type decides the canonical text through [`canonical::CanonicalText`].
//!
//! ## Scratch storage
//!
//! Every projection owns its scratch storage (see [`scratch::TextScratch`]).
//! Results borrow from the projection, so the borrow checker enforces that a
//! result is only used until the next call on the same instance. A projection
//! is not meant to be shared between threads; each consumer obtains its own.
//!
//! ## Ordinals
//!
//! Fields whose values repeat heavily are stored as per-document ordinals into
//! a deduplicated [`with_ordinals::TermDictionary`]. The
//! [`with_ordinals::WithOrdinals`] extension exposes both the ordinals and the
//! ordinal to term resolution.

pub mod canonical;
pub mod column;
pub mod cursor;
pub mod doc_value;
pub mod numeric;
pub mod numeric_string;
pub mod options;
pub mod ordinals;
pub mod scratch;
pub mod string_values;
pub mod with_ordinals;

pub use doc_value::{DocId, DocValue};
pub use string_values::StringValues;
pub use with_ordinals::WithOrdinals;
