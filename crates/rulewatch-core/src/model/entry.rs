//! Snapshot entries and the snapshot store.
//!
//! In memory an entry is a tagged union: either an observed fingerprint, or
//! a failure that keeps the last-known-good fingerprint underneath it. On
//! disk the entry is one flat JSON object (fingerprint fields plus an
//! optional `error` object); the conversion happens only at the serde
//! boundary through [`RawEntry`].

use crate::errors::{FailureKind, TransportError};
use crate::model::tracked::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pipeline stage at which a per-code failure happened (`where` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Search,
    Detail,
    /// Run-level precondition, never stored on an entry
    Runtime,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Search => "search",
            Stage::Detail => "detail",
            Stage::Runtime => "runtime",
        }
    }
}

/// The `error` object carried by a failed snapshot entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryError {
    #[serde(rename = "where")]
    pub stage: Stage,
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Record being fetched when a detail-stage failure happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    #[serde(rename = "error", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EntryError {
    pub fn new(stage: Stage, kind: FailureKind) -> Self {
        Self {
            stage,
            kind,
            status: None,
            content_type: None,
            head: None,
            url: None,
            query: None,
            remote_id: None,
            message: None,
        }
    }

    /// Tag a transport failure with the stage it surfaced in.
    pub fn from_transport(stage: Stage, err: TransportError) -> Self {
        Self {
            stage,
            kind: err.kind,
            status: err.status,
            content_type: err.content_type,
            head: err.head,
            url: Some(err.url),
            query: None,
            remote_id: None,
            message: err.message,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    /// Identity used by change detection: two failures are "the same" when
    /// they happened at the same stage with the same kind. Status, body head
    /// and URL are diagnostic detail and do not participate.
    pub fn same_failure(&self, other: &EntryError) -> bool {
        self.stage == other.stage && self.kind == other.kind
    }
}

/// Normalized fields plus content hashes of one remote record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub remote_id: String,
    pub notice_no: Option<String>,
    pub announce_date: Option<String>,
    pub effective_date: Option<String>,
    pub revision_type: Option<String>,
    pub org_name: Option<String>,
    pub rule_name: String,
    pub html_url: String,
    pub body_hash: String,
    pub supp_hash: String,
}

/// Outcome half of a snapshot entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    Observed(Fingerprint),
    Failed {
        error: EntryError,
        last_known_good: Option<Fingerprint>,
    },
}

/// Durable record of one tracked code as last observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct SnapshotEntry {
    pub code: String,
    pub title: String,
    pub checked_at: NaiveDate,
    pub state: EntryState,
}

impl SnapshotEntry {
    pub fn observed(
        code: impl Into<String>,
        title: impl Into<String>,
        checked_at: NaiveDate,
        fingerprint: Fingerprint,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            checked_at,
            state: EntryState::Observed(fingerprint),
        }
    }

    /// Failed entry that inherits the last-known-good fingerprint of
    /// `previous`, if any.
    pub fn failed(
        code: impl Into<String>,
        title: impl Into<String>,
        checked_at: NaiveDate,
        error: EntryError,
        previous: Option<&SnapshotEntry>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            checked_at,
            state: EntryState::Failed {
                error,
                last_known_good: previous.and_then(|p| p.last_known_good()).cloned(),
            },
        }
    }

    /// Fingerprint observed by this entry's own run.
    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        match &self.state {
            EntryState::Observed(fp) => Some(fp),
            EntryState::Failed { .. } => None,
        }
    }

    /// Own fingerprint, or the one preserved under a failure.
    pub fn last_known_good(&self) -> Option<&Fingerprint> {
        match &self.state {
            EntryState::Observed(fp) => Some(fp),
            EntryState::Failed {
                last_known_good, ..
            } => last_known_good.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&EntryError> {
        match &self.state {
            EntryState::Observed(_) => None,
            EntryState::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

/// Flat on-disk shape of a snapshot entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    code: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    title: String,
    checked_at: NaiveDate,
    #[serde(default, alias = "lawgoId", skip_serializing_if = "Option::is_none")]
    remote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notice_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    announce_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effective_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supp_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<EntryError>,
}

impl RawEntry {
    fn fingerprint(&self) -> Option<Fingerprint> {
        Some(Fingerprint {
            remote_id: self.remote_id.clone()?,
            notice_no: self.notice_no.clone(),
            announce_date: self.announce_date.clone(),
            effective_date: self.effective_date.clone(),
            revision_type: self.revision_type.clone(),
            org_name: self.org_name.clone(),
            rule_name: self.rule_name.clone().unwrap_or_default(),
            html_url: self.html_url.clone().unwrap_or_default(),
            body_hash: self.body_hash.clone()?,
            supp_hash: self.supp_hash.clone()?,
        })
    }
}

impl TryFrom<RawEntry> for SnapshotEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        if raw.code.trim().is_empty() {
            return Err("snapshot entry has an empty code".to_string());
        }
        let fingerprint = raw.fingerprint();
        let state = match (raw.error, fingerprint) {
            (Some(error), last_known_good) => EntryState::Failed {
                error,
                last_known_good,
            },
            (None, Some(fp)) => EntryState::Observed(fp),
            (None, None) => {
                return Err(format!(
                    "snapshot entry {} has neither an error nor fingerprint fields",
                    raw.code
                ))
            }
        };
        Ok(SnapshotEntry {
            code: raw.code,
            title: raw.title,
            checked_at: raw.checked_at,
            state,
        })
    }
}

impl From<SnapshotEntry> for RawEntry {
    fn from(entry: SnapshotEntry) -> Self {
        let (fingerprint, error) = match entry.state {
            EntryState::Observed(fp) => (Some(fp), None),
            EntryState::Failed {
                error,
                last_known_good,
            } => (last_known_good, Some(error)),
        };
        let mut raw = RawEntry {
            code: entry.code,
            title: entry.title,
            checked_at: entry.checked_at,
            remote_id: None,
            notice_no: None,
            announce_date: None,
            effective_date: None,
            revision_type: None,
            org_name: None,
            rule_name: None,
            html_url: None,
            body_hash: None,
            supp_hash: None,
            error,
        };
        if let Some(fp) = fingerprint {
            raw.remote_id = Some(fp.remote_id);
            raw.notice_no = fp.notice_no;
            raw.announce_date = fp.announce_date;
            raw.effective_date = fp.effective_date;
            raw.revision_type = fp.revision_type;
            raw.org_name = fp.org_name;
            raw.rule_name = Some(fp.rule_name);
            raw.html_url = Some(fp.html_url);
            raw.body_hash = Some(fp.body_hash);
            raw.supp_hash = Some(fp.supp_hash);
        }
        raw
    }
}

/// Mapping category → code → latest entry, persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotStore {
    categories: BTreeMap<Category, BTreeMap<String, SnapshotEntry>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    /// Empty store with every category present.
    pub fn new() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| (*c, BTreeMap::new()))
            .collect();
        Self { categories }
    }

    pub fn get(&self, category: Category, code: &str) -> Option<&SnapshotEntry> {
        self.categories.get(&category).and_then(|m| m.get(code))
    }

    /// Insert or supersede the entry for `entry.code`.
    pub fn insert(&mut self, category: Category, entry: SnapshotEntry) {
        self.categories
            .entry(category)
            .or_default()
            .insert(entry.code.clone(), entry);
    }

    pub fn entries(&self, category: Category) -> impl Iterator<Item = &SnapshotEntry> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|m| m.values())
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
