//! Session holder
//!
//! Tracks who is logged in. The state starts as `Loading`, settles once the
//! profile fetch finishes, and is rewritten only by login, signup and logout.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::models::{LoginRequest, SignupRequest, User};
use crate::services::AuthService;
use crate::utils::errors::{ApiError, ApiResult};

/// Authentication state of the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl AuthState {
    /// State after the profile fetch completes
    ///
    /// Every failure, a 401 or an unreachable server alike, means "not
    /// logged in". There is no retry.
    pub fn from_profile(result: Result<User, ApiError>) -> Self {
        match result {
            Ok(user) => AuthState::Authenticated(user),
            Err(_) => AuthState::Unauthenticated,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Shared holder of the session state
#[derive(Clone, Debug)]
pub struct SessionHolder {
    state: Arc<RwLock<AuthState>>,
    auth: AuthService,
}

impl SessionHolder {
    pub fn new(auth: AuthService) -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthState::Loading)),
            auth,
        }
    }

    /// Fetch the profile once and settle the state
    pub async fn initialize(&self) -> AuthState {
        let result = self.auth.profile().await;
        if let Err(ref e) = result {
            info!(error = %e, "No active session");
        }

        let next = AuthState::from_profile(result);
        if let AuthState::Authenticated(ref user) = next {
            info!(user_id = %user.id, role = %user.role, "Session restored");
        }

        *self.state.write().await = next.clone();
        next
    }

    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<User> {
        let user = self.auth.login(credentials).await?;
        *self.state.write().await = AuthState::Authenticated(user.clone());
        Ok(user)
    }

    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<User> {
        let user = self.auth.signup(request).await?;
        *self.state.write().await = AuthState::Authenticated(user.clone());
        Ok(user)
    }

    /// End the session; on failure the user stays logged in
    pub async fn logout(&self) -> ApiResult<()> {
        match self.auth.logout().await {
            Ok(_) => {
                *self.state.write().await = AuthState::Unauthenticated;
                info!("Logged out");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Logout failed");
                Err(e)
            }
        }
    }
}
