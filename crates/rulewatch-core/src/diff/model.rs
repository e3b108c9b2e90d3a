//! Change detection result types.

use serde::{Deserialize, Serialize};

/// Field that differs between two snapshot entries.
///
/// Variant order is the order keys are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffKey {
    NoticeNo,
    AnnounceDate,
    EffectiveDate,
    RevisionType,
    BodyHash,
    SuppHash,
    /// Error identity appeared, cleared, or changed
    Error,
}

impl DiffKey {
    /// Fingerprint fields compared when both sides are observed.
    pub const FINGERPRINT_FIELDS: [DiffKey; 6] = [
        DiffKey::NoticeNo,
        DiffKey::AnnounceDate,
        DiffKey::EffectiveDate,
        DiffKey::RevisionType,
        DiffKey::BodyHash,
        DiffKey::SuppHash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKey::NoticeNo => "noticeNo",
            DiffKey::AnnounceDate => "announceDate",
            DiffKey::EffectiveDate => "effectiveDate",
            DiffKey::RevisionType => "revisionType",
            DiffKey::BodyHash => "bodyHash",
            DiffKey::SuppHash => "suppHash",
            DiffKey::Error => "error",
        }
    }
}

impl std::fmt::Display for DiffKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeDetection {
    pub changed: bool,
    pub diff_keys: Vec<DiffKey>,
}

impl ChangeDetection {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed(diff_keys: Vec<DiffKey>) -> Self {
        Self {
            changed: !diff_keys.is_empty(),
            diff_keys,
        }
    }

    /// Keys as their wire names, e.g. for a ChangeRecord.
    pub fn key_names(&self) -> Vec<String> {
        self.diff_keys.iter().map(|k| k.as_str().to_string()).collect()
    }
}
