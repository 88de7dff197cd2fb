use std::fmt;

/// The two kinds of resource the injector knows how to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A `<script src>` node.
    Script,
    /// A `<link rel="stylesheet" href>` node.
    Style,
}

impl ResourceKind {
    /// Tag name of the attachment node.
    pub const fn tag(self) -> &'static str {
        match self {
            ResourceKind::Script => "script",
            ResourceKind::Style => "link",
        }
    }

    /// Attribute holding the locator, also used for the dedup lookup.
    pub const fn locator_attr(self) -> &'static str {
        match self {
            ResourceKind::Script => "src",
            ResourceKind::Style => "href",
        }
    }

    /// MIME type written to the node's `type` attribute.
    pub const fn mime(self) -> &'static str {
        match self {
            ResourceKind::Script => "text/javascript",
            ResourceKind::Style => "text/css",
        }
    }

    /// Maps a `Content-Type` header value to a kind.
    ///
    /// Matching is by substring, so parameters such as `; charset=utf-8` are
    /// ignored. Returns `None` for anything that is neither JavaScript nor CSS.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("text/javascript")
            || content_type.contains("application/javascript")
        {
            Some(ResourceKind::Script)
        } else if content_type.contains("text/css") {
            Some(ResourceKind::Style)
        } else {
            None
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Script => write!(f, "script"),
            ResourceKind::Style => write!(f, "stylesheet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_types() {
        assert_eq!(
            ResourceKind::from_content_type("text/javascript"),
            Some(ResourceKind::Script)
        );
        assert_eq!(
            ResourceKind::from_content_type("application/javascript; charset=utf-8"),
            Some(ResourceKind::Script)
        );
        assert_eq!(
            ResourceKind::from_content_type("Text/JavaScript"),
            Some(ResourceKind::Script)
        );
    }

    #[test]
    fn test_css_type() {
        assert_eq!(
            ResourceKind::from_content_type("text/css;charset=UTF-8"),
            Some(ResourceKind::Style)
        );
    }

    #[test]
    fn test_unsupported_types() {
        assert_eq!(ResourceKind::from_content_type("application/json"), None);
        assert_eq!(ResourceKind::from_content_type("text/html"), None);
        assert_eq!(ResourceKind::from_content_type(""), None);
    }

    #[test]
    fn test_node_shape() {
        assert_eq!(ResourceKind::Script.tag(), "script");
        assert_eq!(ResourceKind::Script.locator_attr(), "src");
        assert_eq!(ResourceKind::Style.tag(), "link");
        assert_eq!(ResourceKind::Style.locator_attr(), "href");
        assert_eq!(ResourceKind::Style.to_string(), "stylesheet");
    }
}
