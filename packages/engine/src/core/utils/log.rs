//! Console logging.
//!
//! In the browser every message goes to `console.log`. Host builds (unit and
//! integration tests) have no JS runtime to call into, so the macro only
//! type-checks its arguments there.

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn write_console(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::write_console(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
