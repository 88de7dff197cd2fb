use std::future::Future;

use sideload_core::{OnLoad, ResourceKind, SideloadError, SideloadResult};
use sideload_dom::load_signal;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlLinkElement, HtmlScriptElement};

use crate::injector::Injector;

/// Converts a deferred result into a `(value, error)` pair.
///
/// Exactly one side is `Some`. The future's error never escapes as a `Result`.
pub async fn with_error<T, F>(future: F) -> (Option<T>, Option<SideloadError>)
where
    F: Future<Output = SideloadResult<T>>,
{
    match future.await {
        Ok(value) => (Some(value), None),
        Err(e) => (None, Some(e)),
    }
}

impl Injector {
    /// Attaches a script and waits for it to load.
    ///
    /// `on_load` runs before the future resolves. On an `error` event the node
    /// is logged, removed (see [`InjectorConfig`](crate::InjectorConfig)) and the
    /// future fails with [`SideloadError::LoadFailed`]. A duplicate fails with
    /// [`SideloadError::AlreadyAttached`] without touching the DOM.
    pub async fn attach_script_async(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> SideloadResult<HtmlScriptElement> {
        self.attach_deferred(ResourceKind::Script, locator, on_load)
            .await
            .map(|element| element.unchecked_into())
    }

    /// Stylesheet counterpart of [`Injector::attach_script_async`].
    pub async fn attach_style_async(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> SideloadResult<HtmlLinkElement> {
        self.attach_deferred(ResourceKind::Style, locator, on_load)
            .await
            .map(|element| element.unchecked_into())
    }

    pub async fn attach_script_async_with_error(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> (Option<HtmlScriptElement>, Option<SideloadError>) {
        with_error(self.attach_script_async(locator, on_load)).await
    }

    pub async fn attach_style_async_with_error(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> (Option<HtmlLinkElement>, Option<SideloadError>) {
        with_error(self.attach_style_async(locator, on_load)).await
    }

    pub(crate) async fn attach_deferred(
        &self,
        kind: ResourceKind,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> SideloadResult<Element> {
        if self.contains(kind, locator) {
            return Err(SideloadError::AlreadyAttached {
                kind,
                locator: locator.to_string(),
            });
        }

        let element = self.try_attach(kind, locator, on_load)?;
        match load_signal(&element)?.await {
            Ok(_) => Ok(element),
            Err(_) => Err(SideloadError::LoadFailed {
                kind,
                locator: locator.to_string(),
            }),
        }
    }
}
