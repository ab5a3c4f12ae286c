//! Auth Endpoints

use crate::domain::{
    AuthResponse, ChangePasswordRequest, DomainResult, LoginRequest, RegisterRequest, User,
};
use super::client::ApiClient;

impl ApiClient {
    /// POST /auth/login; the caller is responsible for storing the token
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        self.post("/auth/login", &LoginRequest { email, password }).await
    }

    /// POST /auth/register. Registration does not log the account in;
    /// the server returns only the created user.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> DomainResult<User> {
        self.post("/auth/register", &RegisterRequest { email, name, password }).await
    }

    /// POST /auth/change-password for the logged-in account
    pub async fn change_password(&self, current_password: &str, new_password: &str) -> DomainResult<()> {
        let body = ChangePasswordRequest { current_password, new_password };
        self.post_unit("/auth/change-password", &body).await
    }
}
