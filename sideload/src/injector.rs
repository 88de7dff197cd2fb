use sideload_core::{OnLoad, ResourceKind, SideloadError, SideloadResult};
use sideload_dom::{create_resource, find_existing, on_settled};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlLinkElement, HtmlScriptElement};

use crate::config::InjectorConfig;

/// Attaches script and stylesheet nodes to one container.
///
/// The container is always passed in explicitly. [`Injector::head`] is the
/// shorthand for the common `document.head` case.
///
/// ```rust,no_run
/// use sideload::prelude::*;
///
/// let injector = Injector::head().unwrap();
/// let first = injector.attach_script("a.js", None);
/// let second = injector.attach_script("a.js", None);
/// assert!(first.is_some());
/// assert!(second.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Injector {
    container: Element,
    config: InjectorConfig,
}

impl Injector {
    pub fn new(container: impl Into<Element>) -> Self {
        Self {
            container: container.into(),
            config: InjectorConfig::default(),
        }
    }

    /// An injector targeting the current `document.head`.
    pub fn head() -> SideloadResult<Self> {
        Ok(Self::new(sideload_dom::head()?))
    }

    pub fn with_config(mut self, config: InjectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Returns `true` if a `kind` node for `locator` is already in the container.
    pub fn contains(&self, kind: ResourceKind, locator: &str) -> bool {
        find_existing(&self.container, kind, locator).is_some()
    }

    // --- Synchronous Attach ---

    /// Appends a `<script>` for `locator`.
    ///
    /// Returns `None` when the container already holds a script with the same
    /// `src`; nothing is created and `on_load` is never called in that case.
    pub fn attach_script(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> Option<HtmlScriptElement> {
        self.attach(ResourceKind::Script, locator, on_load)
            .map(|element| element.unchecked_into())
    }

    /// Appends a `<link rel="stylesheet">` for `locator`. Same contract as
    /// [`Injector::attach_script`].
    pub fn attach_style(&self, locator: &str, on_load: Option<OnLoad>) -> Option<HtmlLinkElement> {
        self.attach(ResourceKind::Style, locator, on_load)
            .map(|element| element.unchecked_into())
    }

    /// Batch form of [`Injector::attach_script`]; slot `i` is `None` when
    /// `locators[i]` was a duplicate.
    pub fn attach_scripts(
        &self,
        locators: &[&str],
        on_load: Option<OnLoad>,
    ) -> Vec<Option<HtmlScriptElement>> {
        locators
            .iter()
            .map(|locator| self.attach_script(locator, on_load.clone()))
            .collect()
    }

    /// Batch form of [`Injector::attach_style`].
    pub fn attach_styles(
        &self,
        locators: &[&str],
        on_load: Option<OnLoad>,
    ) -> Vec<Option<HtmlLinkElement>> {
        locators
            .iter()
            .map(|locator| self.attach_style(locator, on_load.clone()))
            .collect()
    }

    /// Never fails: DOM refusals are logged and reported as `None`.
    pub(crate) fn attach(
        &self,
        kind: ResourceKind,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> Option<Element> {
        if self.contains(kind, locator) {
            return None;
        }
        match self.try_attach(kind, locator, on_load) {
            Ok(element) => Some(element),
            Err(e) => {
                sideload_core::error!("Failed to attach {} {}: {}", kind, locator, e);
                None
            }
        }
    }

    /// Creates the node, wires load/error handling and appends it.
    ///
    /// The caller is responsible for the duplicate check.
    pub(crate) fn try_attach(
        &self,
        kind: ResourceKind,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> SideloadResult<Element> {
        let document = self.document()?;
        let element = create_resource(&document, kind, locator, &self.config.media)?;

        let node = element.clone();
        let failed_locator = locator.to_string();
        let remove_on_error = self.config.remove_on_error;
        on_settled(
            &element,
            move |event| {
                if let Some(on_load) = on_load {
                    on_load.call(event);
                }
            },
            move |_| {
                sideload_core::error!("Failed to load {}: {}", kind, failed_locator);
                if remove_on_error {
                    node.remove();
                }
            },
        )?;

        self.container.append_child(&element)?;
        Ok(element)
    }

    pub(crate) fn document(&self) -> SideloadResult<Document> {
        self.container
            .owner_document()
            .ok_or_else(|| SideloadError::Dom("Container is not part of a document".into()))
    }
}
