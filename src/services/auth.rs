//! Authentication gateway
//!
//! Login, signup, profile and logout calls against `/api/auth`. The session
//! itself is a cookie kept by the shared HTTP client.

use tracing::{debug, info};

use crate::models::{Ack, LoginRequest, SignupRequest, User};
use crate::utils::errors::ApiResult;
use super::http::ApiClient;

#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<User> {
        debug!(email = %credentials.email, "Sending login request");
        let user: User = self.client.post(&["api", "auth", "login"], credentials).await?;
        info!(user_id = %user.id, "Login successful");
        Ok(user)
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<User> {
        debug!(username = %request.username, "Sending signup request");
        let user: User = self.client.post(&["api", "auth", "signup"], request).await?;
        info!(user_id = %user.id, "Signup successful");
        Ok(user)
    }

    /// Profile of the session owner; fails when nobody is logged in
    pub async fn profile(&self) -> ApiResult<User> {
        self.client.get(&["api", "auth", "profile"]).await
    }

    pub async fn logout(&self) -> ApiResult<Ack> {
        self.client.post_empty(&["api", "auth", "logout"]).await
    }
}
