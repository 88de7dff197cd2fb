//! Content-type dispatch: fetch a locator first, then attach it as a script or
//! a stylesheet depending on what the server says it is.

use futures::channel::oneshot;
use futures::future::try_join_all;
use sideload_core::{OnLoad, ResourceKind, SideloadError, SideloadResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, Response, Window};

use crate::deferred::with_error;
use crate::injector::Injector;

/// Fetches `locator` and returns its `content-type` header.
///
/// Any failure along the way, including a missing header, is reported as
/// [`SideloadError::FetchFailed`].
pub async fn inspect_content_type(window: &Window, locator: &str) -> SideloadResult<String> {
    let fetch_failed = |reason: String| SideloadError::FetchFailed {
        locator: locator.to_string(),
        reason,
    };

    let response = JsFuture::from(window.fetch_with_str(locator))
        .await
        .map_err(|e| fetch_failed(SideloadError::from(e).to_string()))?
        .dyn_into::<Response>()
        .map_err(|_| fetch_failed("fetch did not resolve to a Response".into()))?;

    response
        .headers()
        .get("content-type")
        .map_err(|e| fetch_failed(SideloadError::from(e).to_string()))?
        .ok_or_else(|| fetch_failed("response has no content-type header".into()))
}

impl Injector {
    /// Fetches `locator`, then attaches it as a script (`text/javascript`,
    /// `application/javascript`) or a stylesheet (`text/css`) and waits for it
    /// to load.
    ///
    /// The inspection request is separate from the browser's own load of the
    /// node, so the resource is requested twice unless the HTTP cache serves
    /// the second one.
    pub async fn attach_async(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> SideloadResult<Element> {
        let content_type = inspect_content_type(&self.window()?, locator).await?;
        match ResourceKind::from_content_type(&content_type) {
            Some(kind) => self.attach_deferred(kind, locator, on_load).await,
            None => Err(SideloadError::UnsupportedContentType {
                locator: locator.to_string(),
                content_type,
            }),
        }
    }

    /// Runs [`Injector::attach_async`] for every locator at once.
    ///
    /// Resolves in input order once all succeed, or with the first failure.
    /// A failure does not cancel the others: they keep running and stay
    /// attached when they finish.
    pub async fn attach_all_async(
        &self,
        locators: &[&str],
        on_load: Option<OnLoad>,
    ) -> SideloadResult<Vec<Element>> {
        let pending = locators.iter().map(|locator| {
            let (tx, rx) = oneshot::channel();
            let injector = self.clone();
            let locator = locator.to_string();
            let on_load = on_load.clone();
            spawn_local(async move {
                let _ = tx.send(injector.attach_async(&locator, on_load).await);
            });
            async move {
                rx.await
                    .unwrap_or_else(|_| Err(SideloadError::Javascript("load task dropped".into())))
            }
        });
        try_join_all(pending).await
    }

    pub async fn attach_async_with_error(
        &self,
        locator: &str,
        on_load: Option<OnLoad>,
    ) -> (Option<Element>, Option<SideloadError>) {
        with_error(self.attach_async(locator, on_load)).await
    }

    pub async fn attach_all_async_with_error(
        &self,
        locators: &[&str],
        on_load: Option<OnLoad>,
    ) -> (Option<Vec<Element>>, Option<SideloadError>) {
        with_error(self.attach_all_async(locators, on_load)).await
    }

    fn window(&self) -> SideloadResult<Window> {
        self.document()?
            .default_view()
            .ok_or_else(|| SideloadError::Dom("Document has no window".into()))
    }
}
