//! Offline source for `LAWGO_MOCK=1`
//!
//! Returns one fixed candidate for every search and one fixed payload for
//! every detail fetch, without touching the network.

use rulewatch_core::{DetailPayload, RemoteCandidate, RemoteSource, TransportError};

pub const MOCK_REMOTE_ID: &str = "MOCK-001";
pub const MOCK_LINK: &str = "https://www.law.go.kr/";

#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    pub fn candidate() -> RemoteCandidate {
        RemoteCandidate {
            org_name: Some("소방청".to_string()),
            rule_kind: Some("고시".to_string()),
            issue_date: Some("20260225".to_string()),
            remote_id: Some(MOCK_REMOTE_ID.to_string()),
            link: Some(MOCK_LINK.to_string()),
        }
    }

    pub fn payload() -> DetailPayload {
        DetailPayload {
            rule_name: Some("MOCK NFPC/NFTC".to_string()),
            notice_no: Some("소방청고시 제2026-1호".to_string()),
            announce_date: Some("20260225".to_string()),
            effective_date: Some("20260301".to_string()),
            revision_type: Some("일부개정".to_string()),
            org_name: Some("소방청".to_string()),
            article_text: Some("제1조(목적) ... (mock)".to_string()),
            supplementary_text: Some("부칙 ... (mock)".to_string()),
            appendix_text: Some(String::new()),
        }
    }
}

impl RemoteSource for MockSource {
    fn search(&self, query: &str, _knd: u32, _display: u32) -> Result<Vec<RemoteCandidate>, TransportError> {
        tracing::debug!(query, "mock search");
        Ok(vec![Self::candidate()])
    }

    fn fetch_detail(&self, remote_id: &str) -> Result<DetailPayload, TransportError> {
        tracing::debug!(remote_id, "mock detail");
        Ok(Self::payload())
    }
}
