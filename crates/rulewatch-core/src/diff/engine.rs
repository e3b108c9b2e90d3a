//! Change detection engine.
//!
//! Rules, applied in order:
//! 1. no previous entry: baseline, never a change
//! 2. either side failed: changed iff the failure identities differ
//!    (key `error`)
//! 3. both observed: compare the six fingerprint fields, missing = ""

use crate::diff::model::{ChangeDetection, DiffKey};
use crate::model::{Fingerprint, SnapshotEntry};

/// Classify `current` against the previous entry for the same code.
pub fn detect_change(previous: Option<&SnapshotEntry>, current: &SnapshotEntry) -> ChangeDetection {
    let Some(previous) = previous else {
        return ChangeDetection::unchanged();
    };

    if previous.is_error() || current.is_error() {
        let same = match (previous.error(), current.error()) {
            (Some(a), Some(b)) => a.same_failure(b),
            _ => false,
        };
        return if same {
            ChangeDetection::unchanged()
        } else {
            ChangeDetection::changed(vec![DiffKey::Error])
        };
    }

    match (previous.fingerprint(), current.fingerprint()) {
        (Some(prev), Some(cur)) => ChangeDetection::changed(diff_fingerprints(prev, cur)),
        _ => ChangeDetection::unchanged(),
    }
}

/// Fingerprint fields that differ, in reporting order.
pub fn diff_fingerprints(prev: &Fingerprint, cur: &Fingerprint) -> Vec<DiffKey> {
    DiffKey::FINGERPRINT_FIELDS
        .into_iter()
        .filter(|key| field(prev, *key) != field(cur, *key))
        .collect()
}

fn field(fp: &Fingerprint, key: DiffKey) -> &str {
    let value = match key {
        DiffKey::NoticeNo => fp.notice_no.as_deref(),
        DiffKey::AnnounceDate => fp.announce_date.as_deref(),
        DiffKey::EffectiveDate => fp.effective_date.as_deref(),
        DiffKey::RevisionType => fp.revision_type.as_deref(),
        DiffKey::BodyHash => Some(fp.body_hash.as_str()),
        DiffKey::SuppHash => Some(fp.supp_hash.as_str()),
        DiffKey::Error => None,
    };
    value.unwrap_or_default()
}
