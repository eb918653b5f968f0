// src/pipeline/merge.rs

//! Merging parser outputs into one deduplicated, ordered sequence.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::StandardRecord;

/// Drop later records whose `(framework, code)` was already seen.
pub fn dedup(records: Vec<StandardRecord>) -> Vec<StandardRecord> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert((record.framework, record.code.clone())) {
            deduped.push(record);
        } else {
            log::debug!(
                "Dropped duplicate standard {} ({})",
                record.code,
                record.framework
            );
        }
    }
    deduped
}

/// Corpus order: framework, subject, grade band, code.
///
/// Subjects and codes compare by Unicode scalar value, which for
/// precomposed Hangul syllables is Korean dictionary order.
pub fn compare(a: &StandardRecord, b: &StandardRecord) -> Ordering {
    a.framework
        .cmp(&b.framework)
        .then_with(|| a.subject.cmp(&b.subject))
        .then_with(|| a.grade_band.cmp(&b.grade_band))
        .then_with(|| a.code.cmp(&b.code))
}

/// Sort records into corpus order (stable).
pub fn sort(records: &mut [StandardRecord]) {
    records.sort_by(compare);
}

/// Concatenate batches in order, deduplicate, then sort.
pub fn merge<I>(batches: I) -> Vec<StandardRecord>
where
    I: IntoIterator<Item = Vec<StandardRecord>>,
{
    let mut merged = dedup(batches.into_iter().flatten().collect());
    sort(&mut merged);
    merged
}
