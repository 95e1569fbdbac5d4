//! Cross-checks of the access patterns of a `StringValues` instance.

use fieldcache_values::cursor::TextCursor;
use fieldcache_values::{DocId, DocValue, StringValues};

/// What each access pattern reported for one document, copied out of the
/// instance's scratch storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSnapshot {
    pub has_value: bool,
    pub value: Option<String>,
    pub values: Vec<String>,
    pub iterated: Vec<String>,
    pub pushed: Vec<String>,
    pub missing_events: usize,
}

/// Reads `doc` through every access pattern of `values`.
pub fn snapshot_doc<V: StringValues>(values: &mut V, doc: DocId) -> DocSnapshot {
    let has_value = values.has_value(doc);
    let value = values.value(doc).map(str::to_owned);
    let all = values.values(doc).to_vec();

    let mut iterated = Vec::new();
    {
        let mut iter = values.iter(doc);
        while iter.has_next() {
            iterated.push(iter.next_value().to_owned());
        }
    }

    let mut pushed = Vec::new();
    let mut missing_events = 0;
    values.for_each_value_in_doc(doc, &mut |d, v| {
        assert_eq!(d, doc, "push traversal reported a different doc");
        match v {
            DocValue::Value(s) => pushed.push(s.to_owned()),
            DocValue::Missing => missing_events += 1,
        }
    });

    DocSnapshot {
        has_value,
        value,
        values: all,
        iterated,
        pushed,
        missing_events,
    }
}

/// Asserts that all access patterns of `values` agree for docs `0..num_docs`,
/// and returns the snapshots for further checks.
///
/// For a document without values: `value` is `None`, `values` is empty, the
/// cursor is exhausted from the start, and push traversal reports exactly one
/// missing event. For a document with values: `value` equals the first element
/// of both `values` and the cursor, and all three sequences are identical with
/// no missing event.
pub fn check_access_patterns_agree<V: StringValues>(
    values: &mut V,
    num_docs: usize,
) -> Vec<DocSnapshot> {
    let mut snapshots = Vec::with_capacity(num_docs);
    for doc in 0..num_docs as DocId {
        let snapshot = snapshot_doc(values, doc);
        if snapshot.has_value {
            assert!(!snapshot.values.is_empty(), "doc {doc}: {snapshot:?}");
            assert_eq!(
                snapshot.value.as_ref(),
                snapshot.values.first(),
                "doc {doc}"
            );
            assert_eq!(snapshot.iterated, snapshot.values, "doc {doc}");
            assert_eq!(snapshot.pushed, snapshot.values, "doc {doc}");
            assert_eq!(snapshot.missing_events, 0, "doc {doc}");
        } else {
            assert_eq!(snapshot.value, None, "doc {doc}");
            assert!(snapshot.values.is_empty(), "doc {doc}");
            assert!(snapshot.iterated.is_empty(), "doc {doc}");
            assert!(snapshot.pushed.is_empty(), "doc {doc}");
            assert_eq!(snapshot.missing_events, 1, "doc {doc}");
        }
        snapshots.push(snapshot);
    }
    snapshots
}
