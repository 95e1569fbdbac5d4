//! Data generation utilities for testing.
//!
//! All generators take an explicit `fastrand::Rng`, so a test seeds it once and
//! gets the same data on every run.

use fieldcache_values::column::{DocValuesColumn, DocValuesColumnBuilder};
use fieldcache_values::ordinals::{Ordinal, OrdinalsColumn};
use fieldcache_values::with_ordinals::{OrdinalStringValues, TermDictionary};

/// Shape of a generated field.
#[derive(Debug, Clone, Copy)]
pub struct FieldShape {
    pub num_docs: usize,
    /// Upper bound (inclusive) of values per document with values.
    pub max_values_per_doc: usize,
    /// Probability, in percent, that a document has no values.
    pub missing_percent: u32,
}

impl FieldShape {
    pub fn single_valued(num_docs: usize) -> FieldShape {
        FieldShape {
            num_docs,
            max_values_per_doc: 1,
            missing_percent: 20,
        }
    }

    pub fn multi_valued(num_docs: usize) -> FieldShape {
        FieldShape {
            num_docs,
            max_values_per_doc: 5,
            missing_percent: 20,
        }
    }

    fn next_value_count(&self, rng: &mut fastrand::Rng) -> usize {
        assert_ne!(self.max_values_per_doc, 0);
        if rng.u32(0..100) < self.missing_percent {
            0
        } else {
            rng.usize(1..=self.max_values_per_doc)
        }
    }
}

/// Generates a column of the given shape, drawing each value from `generate`.
pub fn generate_column<T, F>(
    rng: &mut fastrand::Rng,
    shape: &FieldShape,
    mut generate: F,
) -> DocValuesColumn<T>
where
    T: Copy + Default,
    F: FnMut(&mut fastrand::Rng) -> T,
{
    let mut builder = DocValuesColumnBuilder::with_capacity(shape.num_docs, shape.num_docs);
    let mut doc = Vec::with_capacity(shape.max_values_per_doc);
    for _ in 0..shape.num_docs {
        doc.clear();
        for _ in 0..shape.next_value_count(rng) {
            doc.push(generate(rng));
        }
        builder.push_doc(&doc);
    }
    builder.build()
}

/// Generates an ordinal-backed field with `num_terms` distinct terms named
/// `term-000`, `term-001`, ...
pub fn generate_ordinal_field(
    rng: &mut fastrand::Rng,
    shape: &FieldShape,
    num_terms: usize,
) -> OrdinalStringValues<OrdinalsColumn> {
    assert_ne!(num_terms, 0);
    let column = generate_column(rng, shape, |rng| rng.u32(1..=num_terms as Ordinal));
    let ordinals = OrdinalsColumn::new(column, num_terms).expect("generated ordinals in range");
    let dictionary = TermDictionary::from_terms((0..num_terms).map(|k| format!("term-{k:03}")));
    OrdinalStringValues::new(ordinals, dictionary).expect("dictionary covers all ordinals")
}

#[cfg(test)]
mod tests {
    use fieldcache_values::numeric::NumericValues;
    use fieldcache_values::ordinals::DocOrdinals;
    use fieldcache_values::with_ordinals::WithOrdinals;

    use super::*;

    #[test]
    fn test_generate_column_is_reproducible() {
        let shape = FieldShape::multi_valued(100);
        let a = generate_column(&mut fastrand::Rng::with_seed(7), &shape, |rng| rng.i32(..));
        let b = generate_column(&mut fastrand::Rng::with_seed(7), &shape, |rng| rng.i32(..));
        assert_eq!(a.num_docs(), 100);
        for doc in 0..100 {
            assert_eq!(a.doc_values(doc), b.doc_values(doc));
            assert!(a.doc_values(doc).len() <= 5);
        }
    }

    #[test]
    fn test_single_valued_shape() {
        let shape = FieldShape::single_valued(200);
        let column = generate_column(&mut fastrand::Rng::with_seed(1), &shape, |rng| rng.i8(..));
        assert!(!column.is_multi_valued());
    }

    #[test]
    fn test_generate_ordinal_field() {
        let shape = FieldShape::multi_valued(50);
        let field = generate_ordinal_field(&mut fastrand::Rng::with_seed(3), &shape, 10);
        assert_eq!(field.ordinals().num_docs(), 50);
        assert_eq!(field.dictionary().num_ords(), 10);
        assert_eq!(field.value_by_ord(1), Some("term-000"));
        assert_eq!(field.value_by_ord(10), Some("term-009"));
    }
}
