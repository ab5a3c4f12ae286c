//! Auth Commands
//!
//! Frontend bindings for session-related backend commands. The token never
//! reaches the frontend; the backend holds it and persists the session.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::User;
use super::invoke;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    email: &'a str,
    name: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ChangePasswordArgs<'a> {
    #[serde(rename = "currentPassword")]
    current_password: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

pub async fn login(email: &str, password: &str) -> Result<User, String> {
    let js_args = serde_wasm_bindgen::to_value(&LoginArgs { email, password }).map_err(|e| e.to_string())?;
    let result = invoke("login", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn register(email: &str, name: &str, password: &str) -> Result<User, String> {
    let js_args = serde_wasm_bindgen::to_value(&RegisterArgs { email, name, password }).map_err(|e| e.to_string())?;
    let result = invoke("register", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Restore a previously persisted session, if any
pub async fn restore_session() -> Result<Option<User>, String> {
    let result = invoke("restore_session", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn logout() -> Result<(), String> {
    invoke("logout", JsValue::NULL).await?;
    Ok(())
}

pub async fn change_password(current_password: &str, new_password: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ChangePasswordArgs { current_password, new_password })
        .map_err(|e| e.to_string())?;
    invoke("change_password", js_args).await?;
    Ok(())
}
