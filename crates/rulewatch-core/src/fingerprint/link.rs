//! Human-viewable links to remote records.

use rulewatch_core_types::Sensitive;
use url::form_urlencoded;

pub const DEFAULT_SERVICE_BASE: &str = "https://www.law.go.kr/DRF/lawService.do";
pub const ADMRUL_TARGET: &str = "admrul";

/// Template for the synthesized HTML link used when a search candidate has
/// no direct link of its own.
#[derive(Debug, Clone)]
pub struct DetailLinkTemplate {
    base: String,
    credential: Sensitive<String>,
}

impl DetailLinkTemplate {
    pub fn new(base: impl Into<String>, credential: Sensitive<String>) -> Self {
        Self {
            base: base.into(),
            credential,
        }
    }

    /// Template against the public law.go.kr service endpoint.
    pub fn law_go_kr(credential: Sensitive<String>) -> Self {
        Self::new(DEFAULT_SERVICE_BASE, credential)
    }

    /// `<base>?OC=<credential>&target=admrul&ID=<id>&type=HTML`
    pub fn html_url(&self, remote_id: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("OC", self.credential.expose())
            .append_pair("target", ADMRUL_TARGET)
            .append_pair("ID", remote_id)
            .append_pair("type", "HTML")
            .finish();
        format!("{}?{}", self.base, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_url_encodes_credential() {
        let t = DetailLinkTemplate::law_go_kr(Sensitive::new("a b&c".to_string()));
        assert_eq!(
            t.html_url("123"),
            "https://www.law.go.kr/DRF/lawService.do?OC=a+b%26c&target=admrul&ID=123&type=HTML"
        );
    }

    #[test]
    fn test_debug_does_not_leak_credential() {
        let t = DetailLinkTemplate::law_go_kr(Sensitive::new("secret-oc".to_string()));
        assert!(!format!("{:?}", t).contains("secret-oc"));
    }
}
