//! Test context for unified test setup
//!
//! This module provides a unified test context that starts the mock backend,
//! builds settings pointing at it, and hands out application contexts with
//! or without a logged-in session.

use tempfile::TempDir;

use CampusEvents::config::Settings;
use CampusEvents::models::{LoginRequest, User};
use CampusEvents::state::AuthState;
use CampusEvents::AppContext;

use super::backend_mock::{BackendMockServer, MockResponseConfig};

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub temp_dir: TempDir,
    pub session_user: Option<User>,
}

/// Configuration for test context
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Log this user in when an app context is created
    pub session_user: Option<User>,
    /// Mount profile and login mocks for `session_user`
    pub setup_default_mocks: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            session_user: None,
            setup_default_mocks: true,
        }
    }
}

impl TestConfig {
    pub fn logged_in(user: User) -> Self {
        Self {
            session_user: Some(user),
            ..Self::default()
        }
    }
}

impl TestContext {
    /// Create a new test context with an anonymous session
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(config: TestConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Initialize logging once
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir()?;

        let backend = BackendMockServer::new().await;
        if config.setup_default_mocks {
            backend.mock_profile(config.session_user.as_ref()).await;
            if let Some(ref user) = config.session_user {
                backend.mock_login(user, MockResponseConfig::default()).await;
            }
        }

        let settings = Self::create_test_settings(&backend, &temp_dir);

        Ok(Self {
            backend,
            settings,
            temp_dir,
            session_user: config.session_user,
        })
    }

    /// Create test settings pointing at the mock backend
    pub fn create_test_settings(backend: &BackendMockServer, temp_dir: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = backend.base_url.clone();
        settings.api.timeout_seconds = 5;
        settings.logging.level = "debug".to_string();
        settings.logging.file_path = temp_dir.path().join("logs").to_string_lossy().into_owned();
        settings
    }

    /// Build an application context and settle its session
    ///
    /// When the config names a session user, they are logged in so the
    /// cookie store holds a session for every later call.
    pub async fn create_app_context(&self) -> Result<AppContext, Box<dyn std::error::Error + Send + Sync>> {
        let (ctx, _) = AppContext::bootstrap(self.settings.clone()).await?;

        if let Some(ref user) = self.session_user {
            ctx.session
                .login(&LoginRequest {
                    email: user.email.clone(),
                    password: "password123".to_string(),
                })
                .await?;
        }

        Ok(ctx)
    }

    /// Current auth state of a context
    pub async fn auth_state(ctx: &AppContext) -> AuthState {
        ctx.session.state().await
    }
}
