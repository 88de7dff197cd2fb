use sideload_core::{SideloadError, SideloadResult};
use web_sys::{Document, HtmlHeadElement, Window};

// --- Window & Document Access ---

thread_local! {
    static WINDOW: Option<Window> = web_sys::window();
    static DOCUMENT: Option<Document> = WINDOW.with(|w| w.as_ref().and_then(Window::document));
}

/// Returns the cached [`Window`](web_sys::Window).
pub fn window() -> SideloadResult<Window> {
    WINDOW
        .with(|w| w.clone())
        .ok_or_else(|| SideloadError::Dom("Window not found".into()))
}

/// Returns the cached [`Document`](web_sys::Document).
pub fn document() -> SideloadResult<Document> {
    DOCUMENT
        .with(|d| d.clone())
        .ok_or_else(|| SideloadError::Dom("Document not found".into()))
}

/// Returns `document.head`, the usual container for injected resources.
pub fn head() -> SideloadResult<HtmlHeadElement> {
    document()?
        .head()
        .ok_or_else(|| SideloadError::Dom("Document has no <head>".into()))
}

// --- Selector Helpers ---

/// Builds `tag[attr="value"]`, escaping `value` as a CSS string so that any
/// locator yields a valid selector.
///
/// Control characters become hex escapes (`\c ` for a form feed), the same
/// way `CSS.escape` writes them.
pub fn attribute_selector(tag: &str, attr: &str, value: &str) -> String {
    let mut selector = String::with_capacity(tag.len() + attr.len() + value.len() + 6);
    selector.push_str(tag);
    selector.push('[');
    selector.push_str(attr);
    selector.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '"' => selector.push_str("\\\""),
            '\\' => selector.push_str("\\\\"),
            '\0' => selector.push('\u{FFFD}'),
            '\u{1}'..='\u{1F}' | '\u{7F}' => {
                selector.push_str(&format!("\\{:x} ", ch as u32));
            }
            ch => selector.push(ch),
        }
    }
    selector.push_str("\"]");
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_selector() {
        assert_eq!(
            attribute_selector("script", "src", "a.js"),
            r#"script[src="a.js"]"#
        );
        assert_eq!(
            attribute_selector("link", "href", "https://cdn.example.com/app.css?v=2"),
            r#"link[href="https://cdn.example.com/app.css?v=2"]"#
        );
    }

    #[test]
    fn test_escaped_selector() {
        assert_eq!(
            attribute_selector("script", "src", r#"a"b.js"#),
            r#"script[src="a\"b.js"]"#
        );
        assert_eq!(
            attribute_selector("script", "src", r"dir\a.js"),
            r#"script[src="dir\\a.js"]"#
        );
        assert_eq!(
            attribute_selector("script", "src", "a\nb.js"),
            "script[src=\"a\\a b.js\"]"
        );
    }

    #[test]
    fn test_control_characters_escaped() {
        let selector = attribute_selector("script", "src", "a\u{000C}b\rc\u{7F}d.js");
        assert_eq!(selector, "script[src=\"a\\c b\\d c\\7f d.js\"]");
        assert!(!selector.chars().any(|ch| ch.is_control()));

        assert_eq!(
            attribute_selector("link", "href", "a\tb"),
            "link[href=\"a\\9 b\"]"
        );
        assert_eq!(
            attribute_selector("link", "href", "a\0b"),
            "link[href=\"a\u{FFFD}b\"]"
        );
    }
}
