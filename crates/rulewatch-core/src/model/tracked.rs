use serde::{Deserialize, Serialize};

/// Issuing organization assumed when a tracked item does not name one
pub const DEFAULT_ORG_NAME: &str = "소방청";

/// Remote category code assumed when a tracked item does not name one
pub const DEFAULT_KND: u32 = 3;

/// Standards family a tracked item belongs to.
///
/// Declaration order is the processing order of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 화재안전성능기준 (performance standards)
    Nfpc,
    /// 화재안전기술기준 (technical standards)
    Nftc,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Nfpc, Category::Nftc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nfpc => "nfpc",
            Category::Nftc => "nftc",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nfpc" => Ok(Category::Nfpc),
            "nftc" => Ok(Category::Nftc),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// One regulation to monitor, as declared in a standards file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItem {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knd: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
}

impl TrackedItem {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            query: None,
            knd: None,
            org_name: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_org_name(mut self, org_name: impl Into<String>) -> Self {
        self.org_name = Some(org_name.into());
        self
    }

    pub fn with_knd(mut self, knd: u32) -> Self {
        self.knd = Some(knd);
        self
    }

    /// Search string: explicit query, else title, else code.
    pub fn search_query(&self) -> &str {
        [self.query.as_deref(), Some(self.title.as_str())]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(&self.code)
    }

    pub fn category_code(&self) -> u32 {
        self.knd.unwrap_or(DEFAULT_KND)
    }

    /// Expected issuing organization used for disambiguation.
    pub fn org_hint(&self) -> &str {
        self.org_name.as_deref().unwrap_or(DEFAULT_ORG_NAME)
    }
}
