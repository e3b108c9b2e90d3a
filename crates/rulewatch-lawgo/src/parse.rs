//! DRF JSON → core types
//!
//! The DRF API is loose about shapes: keys vary in case, identifiers come
//! as strings or numbers, and a single search hit may be wrapped
//! differently from a list. Everything here is total: unexpected shapes
//! yield empty results rather than errors.

use rulewatch_core::{DetailPayload, RemoteCandidate};
use serde_json::{Map, Value};

const ITEM_LIST_KEYS: [&str; 3] = ["admrul", "Admrul", "admruls"];
const KOREAN_ITEM_KEY: &str = "행정규칙";

/// Search hits, from the first present list key.
pub fn extract_items(root: &Value) -> Vec<&Map<String, Value>> {
    let Some(obj) = root.as_object() else {
        return Vec::new();
    };
    let list = match ITEM_LIST_KEYS.iter().find_map(|k| obj.get(*k)) {
        Some(v) => v.as_array(),
        None => obj.get(KOREAN_ITEM_KEY).and_then(Value::as_array),
    };
    list.map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

pub fn candidate_from_item(item: &Map<String, Value>) -> RemoteCandidate {
    RemoteCandidate {
        org_name: first_text(item, &["소관부처명", "소관부처"]),
        rule_kind: first_text(item, &["행정규칙종류"]),
        issue_date: first_text(item, &["발령일자"]),
        remote_id: first_text(item, &["행정규칙일련번호", "일련번호", "id", "ID"]),
        link: first_text(item, &["행정규칙상세링크", "상세링크"]),
    }
}

pub fn candidates(root: &Value) -> Vec<RemoteCandidate> {
    extract_items(root)
        .into_iter()
        .map(candidate_from_item)
        .collect()
}

/// Detail object under `행정규칙`, else `admrul`, else the root itself.
pub fn extract_payload(root: &Value) -> Option<&Map<String, Value>> {
    let obj = root.as_object()?;
    [KOREAN_ITEM_KEY, "admrul"]
        .iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_object))
        .or(Some(obj))
}

pub fn detail_payload(root: &Value) -> DetailPayload {
    let Some(p) = extract_payload(root) else {
        return DetailPayload::default();
    };
    DetailPayload {
        rule_name: first_text(p, &["행정규칙명"]),
        notice_no: first_text(p, &["발령번호"]),
        announce_date: first_text(p, &["발령일자"]),
        effective_date: first_text(p, &["시행일자"]),
        revision_type: first_text(p, &["제개정구분명"]),
        org_name: first_text(p, &["소관부처명"]),
        article_text: first_text(p, &["조문내용"]),
        supplementary_text: first_text(p, &["부칙내용"]),
        appendix_text: first_text(p, &["별표내용"]),
    }
}

/// First key whose value has a non-empty text form.
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(text_of))
        .find(|s| !s.is_empty())
}

/// Strings as-is, numbers in decimal, arrays of those joined by newlines.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(text_of).collect();
            Some(parts.join("\n"))
        }
        _ => None,
    }
}
