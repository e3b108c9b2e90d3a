//! Fingerprint building.
//!
//! Turns a resolved remote record into the normalized fields and content
//! hashes stored on a snapshot entry. A detail failure yields an
//! [`EntryError`]; no partial fingerprint is produced.

pub mod digest;
pub mod link;

pub use digest::{normalize_date, sha256_hex};
pub use link::DetailLinkTemplate;

use crate::model::{DetailPayload, EntryError, Fingerprint, Stage, TrackedItem};
use crate::ports::RemoteSource;
use crate::resolver::ResolvedCandidate;

/// Fetch the detail payload for `resolved` and fingerprint it.
pub fn build_fingerprint(
    source: &dyn RemoteSource,
    resolved: &ResolvedCandidate,
    item: &TrackedItem,
    links: &DetailLinkTemplate,
) -> Result<Fingerprint, EntryError> {
    let payload = source.fetch_detail(&resolved.remote_id).map_err(|e| {
        EntryError::from_transport(Stage::Detail, e).with_remote_id(&resolved.remote_id)
    })?;
    Ok(fingerprint_from_payload(resolved, item, links, &payload))
}

/// Pure part of [`build_fingerprint`].
pub fn fingerprint_from_payload(
    resolved: &ResolvedCandidate,
    item: &TrackedItem,
    links: &DetailLinkTemplate,
    payload: &DetailPayload,
) -> Fingerprint {
    let rule_name = payload
        .rule_name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(&item.title)
        .to_string();
    let html_url = match resolved.candidate.direct_link() {
        Some(link) => link.to_string(),
        None => links.html_url(&resolved.remote_id),
    };

    Fingerprint {
        remote_id: resolved.remote_id.clone(),
        notice_no: payload.notice_no.clone(),
        announce_date: payload.announce_date.as_deref().map(normalize_date),
        effective_date: payload.effective_date.as_deref().map(normalize_date),
        revision_type: payload.revision_type.clone(),
        org_name: payload.org_name.clone(),
        rule_name,
        html_url,
        body_hash: digest::body_hash(payload.article_text.as_deref()),
        supp_hash: digest::supp_hash(
            payload.supplementary_text.as_deref(),
            payload.appendix_text.as_deref(),
        ),
    }
}
