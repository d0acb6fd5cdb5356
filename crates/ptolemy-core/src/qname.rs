//! Namespace-qualified names.

use serde::Serialize;
use std::fmt;

/// A namespace-qualified XML name.
///
/// An empty namespace denotes the default (no) namespace.
///
/// # Example
///
/// ```
/// use ptolemy_core::QName;
///
/// let name = QName::new("urn:types:a", "order");
/// assert_eq!(name.namespace(), "urn:types:a");
/// assert_eq!(name.to_string(), "{urn:types:a}order");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QName {
    namespace: String,
    local_part: String,
}

impl QName {
    /// Creates a qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_part: local_part.into(),
        }
    }

    /// Creates a name in the default namespace.
    #[must_use]
    pub fn local(local_part: impl Into<String>) -> Self {
        Self::new(String::new(), local_part)
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the local part.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.local_part)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_namespace() {
        let name = QName::new("urn:svc:a", "getOrder");
        assert_eq!(name.to_string(), "{urn:svc:a}getOrder");
    }

    #[test]
    fn test_display_default_namespace() {
        let name = QName::local("getOrder");
        assert_eq!(name.namespace(), "");
        assert_eq!(name.to_string(), "getOrder");
    }

    #[test]
    fn test_equality_includes_namespace() {
        assert_ne!(QName::new("urn:a", "x"), QName::new("urn:b", "x"));
        assert_eq!(QName::new("urn:a", "x"), QName::new("urn:a", "x"));
    }
}
