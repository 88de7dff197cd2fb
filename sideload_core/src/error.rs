use std::fmt;

use crate::kind::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideloadError {
    Dom(String),
    Javascript(String),
    /// The node's `error` event fired.
    LoadFailed {
        kind: ResourceKind,
        locator: String,
    },
    /// A deferred attach found a node for the same locator in the container.
    AlreadyAttached {
        kind: ResourceKind,
        locator: String,
    },
    UnsupportedContentType {
        locator: String,
        content_type: String,
    },
    /// The content-type inspection request failed or carried no header.
    FetchFailed {
        locator: String,
        reason: String,
    },
}

impl SideloadError {
    /// The locator this error is about, if any.
    pub fn locator(&self) -> Option<&str> {
        match self {
            SideloadError::Dom(_) | SideloadError::Javascript(_) => None,
            SideloadError::LoadFailed { locator, .. }
            | SideloadError::AlreadyAttached { locator, .. }
            | SideloadError::UnsupportedContentType { locator, .. }
            | SideloadError::FetchFailed { locator, .. } => Some(locator),
        }
    }
}

impl fmt::Display for SideloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideloadError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            SideloadError::Javascript(msg) => write!(f, "JavaScript Error: {}", msg),
            SideloadError::LoadFailed { kind, locator } => {
                write!(f, "Failed to load {}: {}", kind, locator)
            }
            SideloadError::AlreadyAttached { kind, locator } => {
                write!(f, "The {} is already attached: {}", kind, locator)
            }
            SideloadError::UnsupportedContentType {
                locator,
                content_type,
            } => write!(f, "Unsupported content type: {} ({})", content_type, locator),
            SideloadError::FetchFailed { locator, reason } => {
                write!(f, "Failed to get content type: {} ({})", locator, reason)
            }
        }
    }
}

impl std::error::Error for SideloadError {}

impl From<wasm_bindgen::JsValue> for SideloadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        SideloadError::Javascript(msg)
    }
}

pub type SideloadResult<T> = Result<T, SideloadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_message() {
        let err = SideloadError::LoadFailed {
            kind: ResourceKind::Script,
            locator: "a.js".into(),
        };
        assert_eq!(err.to_string(), "Failed to load script: a.js");

        let err = SideloadError::LoadFailed {
            kind: ResourceKind::Style,
            locator: "a.css".into(),
        };
        assert_eq!(err.to_string(), "Failed to load stylesheet: a.css");
    }

    #[test]
    fn test_content_type_messages() {
        let err = SideloadError::UnsupportedContentType {
            locator: "data.json".into(),
            content_type: "application/json".into(),
        };
        assert!(err.to_string().starts_with("Unsupported content type: application/json"));

        let err = SideloadError::FetchFailed {
            locator: "missing.js".into(),
            reason: "network error".into(),
        };
        assert!(err.to_string().starts_with("Failed to get content type: missing.js"));
    }

    #[test]
    fn test_locator_accessor() {
        let err = SideloadError::AlreadyAttached {
            kind: ResourceKind::Script,
            locator: "a.js".into(),
        };
        assert_eq!(err.locator(), Some("a.js"));
        assert_eq!(SideloadError::Dom("no head".into()).locator(), None);
    }
}
