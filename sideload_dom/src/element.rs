use sideload_core::{ResourceKind, SideloadError, SideloadResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlLinkElement, HtmlScriptElement};

use crate::helpers::attribute_selector;

/// Looks for a `kind` node whose locator attribute equals `locator` among the
/// descendants of `container`.
///
/// If the selector is rejected the descendants are compared one by one, so a
/// refused query never reads as "absent".
pub fn find_existing(container: &Element, kind: ResourceKind, locator: &str) -> Option<Element> {
    let selector = attribute_selector(kind.tag(), kind.locator_attr(), locator);
    match container.query_selector(&selector) {
        Ok(found) => found,
        Err(e) => {
            sideload_core::warn!(
                "Invalid selector {}: {}",
                selector,
                SideloadError::from(e)
            );
            scan_existing(container, kind, locator)
        }
    }
}

/// Linear walk over the `kind` descendants of `container`.
pub fn scan_existing(container: &Element, kind: ResourceKind, locator: &str) -> Option<Element> {
    let candidates = container.get_elements_by_tag_name(kind.tag());
    (0..candidates.length())
        .filter_map(|i| candidates.item(i))
        .find(|el| el.get_attribute(kind.locator_attr()).as_deref() == Some(locator))
}

/// Creates a detached `<script type="text/javascript" src=locator>`.
pub fn create_script(document: &Document, locator: &str) -> SideloadResult<HtmlScriptElement> {
    let script = document
        .create_element(ResourceKind::Script.tag())?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| SideloadError::Dom("Created element is not a <script>".into()))?;
    script.set_type(ResourceKind::Script.mime());
    script.set_src(locator);
    Ok(script)
}

/// Creates a detached `<link rel="stylesheet" type="text/css" href=locator media=media>`.
pub fn create_stylesheet(
    document: &Document,
    locator: &str,
    media: &str,
) -> SideloadResult<HtmlLinkElement> {
    let link = document
        .create_element(ResourceKind::Style.tag())?
        .dyn_into::<HtmlLinkElement>()
        .map_err(|_| SideloadError::Dom("Created element is not a <link>".into()))?;
    link.set_rel("stylesheet");
    link.set_type(ResourceKind::Style.mime());
    link.set_href(locator);
    link.set_media(media);
    Ok(link)
}

/// Creates the detached attachment node for `kind`.
pub fn create_resource(
    document: &Document,
    kind: ResourceKind,
    locator: &str,
    media: &str,
) -> SideloadResult<Element> {
    Ok(match kind {
        ResourceKind::Script => create_script(document, locator)?.into(),
        ResourceKind::Style => create_stylesheet(document, locator, media)?.into(),
    })
}
