//! Login and signup page

use tracing::{error, info};

use crate::models::{LoginRequest, SignupRequest, User};
use crate::state::AppContext;
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::is_valid_email;
use crate::utils::logging::log_user_action;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

/// Where the user lands after a successful login or signup
pub const AFTER_AUTH_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Email as sent to the backend
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    /// Check the form for `mode`; the first problem found is returned
    pub fn validate(&self, mode: AuthMode) -> Result<()> {
        let invalid = |msg: &str| Err(CampusEventsError::InvalidInput(msg.to_string()));

        let email = self.normalized_email();
        if email.is_empty() || self.password.is_empty() {
            return invalid("Email and password are required");
        }
        if !is_valid_email(&email) {
            return invalid("Please enter a valid email address");
        }

        if mode == AuthMode::Signup {
            let username = self.username.trim();
            if username.is_empty() {
                return invalid("Username is required");
            }
            if username.chars().count() < MIN_USERNAME_LEN {
                return invalid("Username must be at least 3 characters long");
            }
            if self.password.chars().count() < MIN_PASSWORD_LEN {
                return invalid("Password must be at least 6 characters long");
            }
            if self.password != self.confirm_password {
                return invalid("Passwords do not match");
            }
        }

        Ok(())
    }

    pub fn to_login(&self) -> LoginRequest {
        LoginRequest {
            email: self.normalized_email(),
            password: self.password.clone(),
        }
    }

    pub fn to_signup(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.trim().to_string(),
            email: self.normalized_email(),
            password: self.password.clone(),
        }
    }
}

pub struct AuthPage {
    ctx: AppContext,
    pub mode: AuthMode,
    pub form: AuthForm,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl AuthPage {
    pub fn new(ctx: AppContext, mode: AuthMode) -> Self {
        Self {
            ctx,
            mode,
            form: AuthForm::default(),
            loading: false,
            error: None,
            success: None,
        }
    }

    /// Switch between login and signup, clearing the form and messages
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.form = AuthForm::default();
        self.error = None;
        self.success = None;
    }

    /// Validate and submit; returns the redirect target on success
    pub async fn submit(&mut self) -> Option<String> {
        self.error = None;
        self.success = None;

        if let Err(e) = self.form.validate(self.mode) {
            self.error = Some(e.user_message());
            return None;
        }

        self.loading = true;
        let session = &self.ctx.session;
        let result = match self.mode {
            AuthMode::Login => session.login(&self.form.to_login()).await,
            AuthMode::Signup => session.signup(&self.form.to_signup()).await,
        };
        self.loading = false;

        match result {
            Ok(user) => {
                self.on_success(&user);
                Some(AFTER_AUTH_PATH.to_string())
            }
            Err(e) => {
                error!(mode = ?self.mode, error = %e, "Authentication failed");
                self.error = Some(e.user_message());
                None
            }
        }
    }

    fn on_success(&mut self, user: &User) {
        let (action, text) = match self.mode {
            AuthMode::Login => ("login", "Login successful! Redirecting..."),
            AuthMode::Signup => ("signup", "Account created successfully! Redirecting..."),
        };
        info!(user_id = %user.id, action = action, "Authenticated");
        log_user_action(&user.id, action, None);
        self.success = Some(text.to_string());
        self.ctx.toasts.success(text);
    }
}
