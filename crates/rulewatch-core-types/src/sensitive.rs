//! Redaction wrapper for secrets
//!
//! The law.go.kr access credential (`OC`) travels through configuration
//! structs that derive `Debug`; wrapping it in `Sensitive` keeps it out of
//! any log line or panic message.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use rulewatch_core_types::Sensitive;
///
/// let oc = Sensitive::new("my-oc-key");
/// assert_eq!(format!("{:?}", oc), "***REDACTED***");
/// assert_eq!(oc.expose(), &"my-oc-key");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value. Only call this where the secret is sent
    /// over the wire.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl Sensitive<String> {
    /// True when no credential was configured (empty or whitespace only)
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Default> Default for Sensitive<T> {
    fn default() -> Self {
        Self(T::default())
    }
}
