//! Blocking law.go.kr client
//!
//! One `reqwest::blocking::Client` per run; every call goes through
//! [`with_retry`] and [`classify_response`]. Errors carry the endpoint URL
//! without query parameters so the OC credential never lands in a report.

use crate::classify::{classify_response, RawResponse};
use crate::config::{LawGoConfig, ADMRUL_TARGET};
use crate::parse;
use crate::retry::with_retry;
use reqwest::header::CONTENT_TYPE;
use rulewatch_core::errors::{ExError, ExErrorKind};
use rulewatch_core::{DetailPayload, FailureKind, RemoteCandidate, RemoteSource, TransportError};
use serde_json::Value;
use url::Url;

const USER_AGENT: &str = concat!("rulewatch/", env!("CARGO_PKG_VERSION"));

pub struct LawGoClient {
    http: reqwest::blocking::Client,
    config: LawGoConfig,
}

impl LawGoClient {
    /// # Errors
    ///
    /// Returns `ExErrorKind::ExternalService` if the HTTP client cannot be
    /// constructed (e.g. TLS backend initialization fails).
    pub fn new(config: LawGoConfig) -> Result<Self, ExError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ExError::new(ExErrorKind::ExternalService)
                    .with_op("build_http_client")
                    .with_message(e.to_string())
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &LawGoConfig {
        &self.config
    }

    fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, TransportError> {
        let url = Url::parse_with_params(endpoint, params).map_err(|e| {
            TransportError::new(FailureKind::RequestException, endpoint).with_message(e.to_string())
        })?;

        with_retry(
            self.config.max_attempts,
            &self.config.backoff,
            std::thread::sleep,
            |attempt| {
                tracing::debug!(endpoint, attempt, "request");
                let resp = self.http.get(url.clone()).send().map_err(|e| {
                    TransportError::new(FailureKind::RequestException, endpoint)
                        .with_message(e.to_string())
                })?;
                let raw = read_response(resp, endpoint)?;
                classify_response(&raw, endpoint)
            },
        )
    }
}

fn read_response(
    resp: reqwest::blocking::Response,
    endpoint: &str,
) -> Result<RawResponse, TransportError> {
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = resp.text().map_err(|e| {
        TransportError::new(FailureKind::RequestException, endpoint)
            .with_status(status)
            .with_content_type(content_type.to_lowercase())
            .with_message(e.to_string())
    })?;
    Ok(RawResponse::new(status, &content_type, body))
}

impl RemoteSource for LawGoClient {
    fn search(
        &self,
        query: &str,
        knd: u32,
        display: u32,
    ) -> Result<Vec<RemoteCandidate>, TransportError> {
        let knd = knd.to_string();
        let display = display.to_string();
        let params = [
            ("OC", self.config.oc.expose().as_str()),
            ("target", ADMRUL_TARGET),
            ("type", "JSON"),
            ("query", query),
            ("knd", knd.as_str()),
            ("display", display.as_str()),
            ("sort", "ddes"),
        ];
        let root = self.get_json(&self.config.search_url, &params)?;
        let found = parse::candidates(&root);
        tracing::debug!(query, candidates = found.len(), "search complete");
        Ok(found)
    }

    fn fetch_detail(&self, remote_id: &str) -> Result<DetailPayload, TransportError> {
        let params = [
            ("OC", self.config.oc.expose().as_str()),
            ("target", ADMRUL_TARGET),
            ("type", "JSON"),
            ("ID", remote_id),
        ];
        let root = self.get_json(&self.config.service_url, &params)?;
        Ok(parse::detail_payload(&root))
    }
}
