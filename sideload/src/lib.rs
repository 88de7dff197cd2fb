//! Inject external scripts and stylesheets into a document and observe when
//! they finish loading.
//!
//! ```rust,no_run
//! use sideload::prelude::*;
//!
//! # async fn run() -> SideloadResult<()> {
//! let injector = Injector::head()?;
//!
//! // Fire and forget, with a callback.
//! injector.attach_style("theme.css", Some(OnLoad::new(|_| log!("theme ready"))));
//!
//! // Or wait for the node.
//! let script = injector.attach_script_async("app.js", None).await?;
//! log!("loaded {:?}", script.get_attribute("src"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod deferred;
pub mod injector;
#[cfg(feature = "net")]
pub mod net;

pub use config::InjectorConfig;
pub use deferred::with_error;
pub use injector::Injector;
pub use sideload_core::{Callback, OnLoad, ResourceKind, SideloadError, SideloadResult};
pub use sideload_core::{error, log, warn};

pub mod prelude {
    pub use crate::config::InjectorConfig;
    pub use crate::deferred::with_error;
    pub use crate::injector::Injector;
    pub use sideload_core::prelude::*;
    pub use sideload_core::{error, log, warn};
}
