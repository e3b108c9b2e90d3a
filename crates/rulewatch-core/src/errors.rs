use rulewatch_core_types::RunId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Infrastructure and precondition failures that can abort a command. Each
/// kind maps to a stable error code used in logs and CLI output. Per-code
/// remote failures are NOT represented here; they are data (see
/// [`FailureKind`]) recorded on the affected snapshot entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Precondition
    MissingCredential,
    InvalidInput,

    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingCredential => "ERR_MISSING_CREDENTIAL",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, tracked code, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    tracked_code: Option<String>,
    path: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            tracked_code: None,
            path: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add tracked-code context
    pub fn with_tracked_code(mut self, code: impl Into<String>) -> Self {
        self.tracked_code = Some(code.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add run correlation context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn tracked_code(&self) -> Option<&str> {
        self.tracked_code.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(code) = &self.tracked_code {
            write!(f, " (code: {})", code)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleWatchError {
    #[error("API credential (LAWGO_OC) is not configured")]
    MissingCredential,

    #[error("Tracked item has no code (title: {title})")]
    TrackedItemWithoutCode { title: String },

    #[error("Report not found for date {date}")]
    ReportNotFound { date: String },

    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Malformed JSON in {path}: {reason}")]
    MalformedFile { path: String, reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<RuleWatchError> for ExError {
    fn from(err: RuleWatchError) -> Self {
        match err {
            RuleWatchError::MissingCredential => ExError::new(ExErrorKind::MissingCredential)
                .with_op("check_precondition")
                .with_message("LAWGO_OC empty"),

            RuleWatchError::TrackedItemWithoutCode { title } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("load_tracked_items")
                    .with_message(format!("tracked item '{}' has no code", title))
            }

            RuleWatchError::ReportNotFound { date } => ExError::new(ExErrorKind::NotFound)
                .with_op("find_report")
                .with_message(format!("no report for {}", date)),

            RuleWatchError::ReadFailed { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("read_file")
                .with_path(path)
                .with_message(reason),

            RuleWatchError::WriteFailed { path, reason } => ExError::new(ExErrorKind::Persistence)
                .with_op("write_file")
                .with_path(path)
                .with_message(reason),

            RuleWatchError::MalformedFile { path, reason } => {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("parse_file")
                    .with_path(path)
                    .with_message(reason)
            }

            RuleWatchError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for RuleWatchError {
    fn from(err: serde_json::Error) -> Self {
        RuleWatchError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        RuleWatchError::from(err).into()
    }
}

// ========== Per-code remote failures ==========

/// Classification of a failure observed while resolving or fetching one
/// tracked code. Serialized as the `kind` of the entry's `error` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Search returned zero structured items
    NoResults,
    /// The winning candidate carries no record identifier
    IdMissing,
    /// Non-200 HTTP status
    HttpError,
    /// 200 with a blank body
    EmptyBody,
    /// 200 with a non-JSON content type
    NotJson,
    /// 200, JSON content type, body failed to parse
    JsonParseFail,
    /// Connection/timeout/TLS failure before a response arrived
    RequestException,
    /// Fatal precondition; only ever appears in a report's error list
    MissingCredential,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NoResults => "no_results",
            FailureKind::IdMissing => "id_missing",
            FailureKind::HttpError => "http_error",
            FailureKind::EmptyBody => "empty_body",
            FailureKind::NotJson => "not_json",
            FailureKind::JsonParseFail => "json_parse_fail",
            FailureKind::RequestException => "request_exception",
            FailureKind::MissingCredential => "missing_credential",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final failure reported by the transport collaborator after its own
/// retries are exhausted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (status: {status:?}, url: {url})")]
pub struct TransportError {
    pub kind: FailureKind,
    pub status: Option<u16>,
    pub content_type: Option<String>,
    /// First 200 characters of the body, newlines flattened
    pub head: Option<String>,
    pub url: String,
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(kind: FailureKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            content_type: None,
            head: None,
            url: url.into(),
            message: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
