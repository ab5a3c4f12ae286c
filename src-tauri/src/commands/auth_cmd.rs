//! Tauri Commands for Authentication
//!
//! The bearer token stays on this side of the IPC boundary: commands
//! hand the frontend only the user record.

use tauri::State;
use crate::domain::User;
use crate::prefs::Session;
use crate::AppState;

/// Log in and persist the session
#[tauri::command]
pub async fn login(state: State<'_, AppState>, email: String, password: String) -> Result<User, String> {
    let auth = state.api.login(&email, &password).await.map_err(|e| e.to_string())?;
    state.api.set_token(auth.token.clone()).await;
    state
        .prefs
        .save_session(Session { token: auth.token, user: auth.user.clone() })
        .map_err(|e| e.to_string())?;
    tracing::info!(user_id = auth.user.id, "logged in");
    Ok(auth.user)
}

/// Register a new account. The server does not hand out a token on
/// registration, so this logs the fresh account in right after.
#[tauri::command]
pub async fn register(
    state: State<'_, AppState>,
    email: String,
    name: String,
    password: String,
) -> Result<User, String> {
    state.api.register(&email, &name, &password).await.map_err(|e| e.to_string())?;
    login(state, email, password).await
}

/// Restore a previously persisted session, if any
#[tauri::command]
pub async fn restore_session(state: State<'_, AppState>) -> Result<Option<User>, String> {
    let Some(session) = state.prefs.session() else {
        return Ok(None);
    };
    state.api.set_token(session.token).await;
    Ok(Some(session.user))
}

/// Drop the token, the persisted session and the saved board selection
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    state.api.clear_token().await;
    state.prefs.clear_session().map_err(|e| e.to_string())?;
    state.prefs.clear_selection().map_err(|e| e.to_string())?;
    tracing::info!("logged out");
    Ok(())
}

#[tauri::command]
pub async fn change_password(
    state: State<'_, AppState>,
    current_password: String,
    new_password: String,
) -> Result<(), String> {
    state
        .api
        .change_password(&current_password, &new_password)
        .await
        .map_err(|e| e.to_string())
}
