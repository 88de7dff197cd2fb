//! Console logging.
//!
//! On `wasm32` messages go to the browser console. Elsewhere they fall back to
//! stdout/stderr so that native unit tests and tools still see them.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Writes `msg` with [`console.log`](https://developer.mozilla.org/en-US/docs/Web/API/Console/log).
pub fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));

    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", msg);
}

/// Writes `msg` with [`console.warn`](https://developer.mozilla.org/en-US/docs/Web/API/Console/warn).
pub fn console_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", msg);
}

/// Writes `msg` with [`console.error`](https://developer.mozilla.org/en-US/docs/Web/API/Console/error).
pub fn console_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(msg));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", msg);
}

/// `format!`-style wrapper around [`console_log`].
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::console_log(&format!($($arg)*))
    };
}

/// `format!`-style wrapper around [`console_warn`].
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::console_warn(&format!($($arg)*))
    };
}

/// `format!`-style wrapper around [`console_error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::console_error(&format!($($arg)*))
    };
}
