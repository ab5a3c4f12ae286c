//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::User;

/// Session errors carry this prefix so the UI can tell an expired
/// token apart from ordinary request failures.
pub const UNAUTHORIZED_PREFIX: &str = "unauthorized:";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Logged-in user, None before login / after logout - read
    pub user: ReadSignal<Option<User>>,
    /// Logged-in user - write
    set_user: WriteSignal<Option<User>>,
    /// Trigger to reload the board from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the board from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last error surfaced to the user - read
    pub last_error: ReadSignal<Option<String>>,
    /// Last error surfaced to the user - write
    set_last_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        last_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            last_error: last_error.0,
            set_last_error: last_error.1,
        }
    }

    /// Trigger a reload of the board
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_user(&self, user: Option<User>) {
        self.set_user.set(user);
    }

    pub fn clear_error(&self) {
        self.set_last_error.set(None);
    }

    /// Record a command failure. An expired session drops the user back
    /// to the login screen instead of showing the raw error.
    pub fn report_error(&self, err: String) {
        if let Some(msg) = err.strip_prefix(UNAUTHORIZED_PREFIX) {
            self.set_last_error.set(Some(msg.trim().to_string()));
            self.set_user.set(None);
            spawn_local(async move {
                let _ = commands::logout().await;
            });
        } else {
            self.set_last_error.set(Some(err));
        }
    }
}
