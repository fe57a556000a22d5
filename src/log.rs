//! Console Logging
//!
//! Thin wrappers over the browser console so diagnostic logging stays
//! available to host-side unit tests.

/// Log a diagnostic error to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

/// Log an informational message to the browser console.
pub fn console_info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    println!("{message}");
}
