//! Ephemeral views of the remote source's search results and detail payloads.
//!
//! The transport collaborator maps the raw JSON into these shapes; the core
//! never sees the wire format.

/// One result from a remote search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteCandidate {
    pub org_name: Option<String>,
    pub rule_kind: Option<String>,
    pub issue_date: Option<String>,
    pub remote_id: Option<String>,
    pub link: Option<String>,
}

impl RemoteCandidate {
    /// Identifier if present and non-blank
    pub fn id(&self) -> Option<&str> {
        non_blank(self.remote_id.as_deref())
    }

    /// Direct human-viewable link if present and non-blank
    pub fn direct_link(&self) -> Option<&str> {
        non_blank(self.link.as_deref())
    }
}

/// Detail payload for a single remote record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPayload {
    pub rule_name: Option<String>,
    pub notice_no: Option<String>,
    pub announce_date: Option<String>,
    pub effective_date: Option<String>,
    pub revision_type: Option<String>,
    pub org_name: Option<String>,
    /// Main article text (조문내용)
    pub article_text: Option<String>,
    /// Supplementary provisions (부칙내용)
    pub supplementary_text: Option<String>,
    /// Appendix / tables (별표내용)
    pub appendix_text: Option<String>,
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}
