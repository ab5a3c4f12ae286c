//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. Backend
//! commands fail with an error string; a failed invoke rejects the
//! promise, so the binding catches the rejection and surfaces it as
//! `Err(String)` to callers.

mod auth;
mod project;
mod pipeline;
mod status;
mod card;
mod backup;
mod search;
mod prefs;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    async fn invoke_raw(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a backend command; a rejected promise carries the command's
/// error string.
pub(crate) async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    invoke_raw(cmd, args)
        .await
        .map_err(|e| rejection_message(e.as_string()))
}

fn rejection_message(raw: Option<String>) -> String {
    match raw {
        Some(msg) if !msg.is_empty() => msg,
        _ => "command failed".to_string(),
    }
}

// Re-export all public items
pub use auth::*;
pub use project::*;
pub use pipeline::*;
pub use status::*;
pub use card::*;
pub use backup::*;
pub use search::*;
pub use prefs::*;

#[cfg(test)]
mod tests {
    use super::rejection_message;

    #[test]
    fn rejection_message_keeps_backend_text() {
        assert_eq!(
            rejection_message(Some("unauthorized: session expired".to_string())),
            "unauthorized: session expired"
        );
    }

    #[test]
    fn rejection_message_falls_back_when_opaque() {
        assert_eq!(rejection_message(None), "command failed");
        assert_eq!(rejection_message(Some(String::new())), "command failed");
    }
}
