pub mod callback;
pub mod error;
pub mod kind;
pub mod log;

pub use callback::{Callback, OnLoad};
pub use error::{SideloadError, SideloadResult};
pub use kind::ResourceKind;

pub mod prelude {
    pub use crate::callback::{Callback, OnLoad};
    pub use crate::kind::ResourceKind;
    pub use crate::log::*;
    pub use crate::{SideloadError, SideloadResult};
}
