pub mod element;
pub mod event;
pub mod helpers;

pub use element::*;
pub use event::*;
pub use helpers::*;

// --- Custom Panic Hook ---

#[cfg(debug_assertions)]
use std::panic;

#[cfg(all(target_arch = "wasm32", debug_assertions))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", debug_assertions))]
#[wasm_bindgen(inline_js = "export function get_stack() { return new Error().stack; }")]
extern "C" {
    fn get_stack() -> String;
}

/// A panic hook that logs panics into
/// [`console.error`](https://developer.mozilla.org/en-US/docs/Web/API/Console/error)
/// together with the JavaScript stack.
///
/// On non-wasm targets, prints the panic to `stderr`.
#[cfg(debug_assertions)]
fn hook(info: &panic::PanicHookInfo<'_>) {
    #[cfg(target_arch = "wasm32")]
    {
        let stack = get_stack();
        sideload_core::log::console_error(&format!("{}\n\nStack:\n\n{}\n\n", info, stack));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", info);
    }
}

/// Routes panics to the browser console. Does nothing in release builds.
pub fn install_panic_hook() {
    #[cfg(debug_assertions)]
    panic::set_hook(Box::new(hook));
}
