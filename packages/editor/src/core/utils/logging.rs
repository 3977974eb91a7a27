//! Console logging
//!
//! - wasm32: `console.log` through web-sys
//! - native debug builds: stderr
//! - native release builds: compiled out

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        eprintln!("[sprite-editor] {}", format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macro_accepts_format_args() {
        let cells = 3;
        console_log!("flushed {} cells", cells);
        console_log!("plain message");
    }
}
