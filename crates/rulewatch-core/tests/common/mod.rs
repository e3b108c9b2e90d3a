use rulewatch_core::model::{DetailPayload, RemoteCandidate};
use rulewatch_core::{FailureKind, RemoteSource, TransportError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory remote source with scripted responses per query / id.
///
/// Unscripted queries return an empty result list; unscripted ids fail
/// with `http_error` 404.
#[derive(Default)]
pub struct FakeSource {
    searches: RefCell<HashMap<String, Result<Vec<RemoteCandidate>, TransportError>>>,
    details: RefCell<HashMap<String, Result<DetailPayload, TransportError>>>,
    pub search_calls: Cell<usize>,
    pub detail_calls: Cell<usize>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, query: &str, result: Vec<RemoteCandidate>) -> Self {
        self.searches
            .borrow_mut()
            .insert(query.to_string(), Ok(result));
        self
    }

    pub fn with_search_error(self, query: &str, err: TransportError) -> Self {
        self.searches.borrow_mut().insert(query.to_string(), Err(err));
        self
    }

    pub fn with_detail(self, id: &str, payload: DetailPayload) -> Self {
        self.set_detail(id, Ok(payload));
        self
    }

    pub fn with_detail_error(self, id: &str, err: TransportError) -> Self {
        self.set_detail(id, Err(err));
        self
    }

    pub fn set_detail(&self, id: &str, result: Result<DetailPayload, TransportError>) {
        self.details.borrow_mut().insert(id.to_string(), result);
    }

    pub fn set_search(&self, query: &str, result: Result<Vec<RemoteCandidate>, TransportError>) {
        self.searches.borrow_mut().insert(query.to_string(), result);
    }

    pub fn total_calls(&self) -> usize {
        self.search_calls.get() + self.detail_calls.get()
    }
}

impl RemoteSource for FakeSource {
    fn search(
        &self,
        query: &str,
        _knd: u32,
        _display: u32,
    ) -> Result<Vec<RemoteCandidate>, TransportError> {
        self.search_calls.set(self.search_calls.get() + 1);
        self.searches
            .borrow()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn fetch_detail(&self, remote_id: &str) -> Result<DetailPayload, TransportError> {
        self.detail_calls.set(self.detail_calls.get() + 1);
        self.details
            .borrow()
            .get(remote_id)
            .cloned()
            .unwrap_or_else(|| {
                Err(TransportError::new(
                    FailureKind::HttpError,
                    format!("https://fake.test/detail?ID={}", remote_id),
                )
                .with_status(404))
            })
    }
}

/// Candidate issued by the National Fire Agency.
#[allow(dead_code)]
pub fn nfa_candidate(id: &str) -> RemoteCandidate {
    RemoteCandidate {
        org_name: Some("소방청".to_string()),
        rule_kind: Some("고시".to_string()),
        issue_date: Some("20260225".to_string()),
        remote_id: Some(id.to_string()),
        link: None,
    }
}

#[allow(dead_code)]
pub fn payload(notice_no: &str, article: &str) -> DetailPayload {
    DetailPayload {
        rule_name: Some("화재안전성능기준".to_string()),
        notice_no: Some(notice_no.to_string()),
        announce_date: Some("20260225".to_string()),
        effective_date: Some("20260301".to_string()),
        revision_type: Some("일부개정".to_string()),
        org_name: Some("소방청".to_string()),
        article_text: Some(article.to_string()),
        supplementary_text: Some("부칙".to_string()),
        appendix_text: None,
    }
}
