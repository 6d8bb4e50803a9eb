//! Integration tests for the login and signup page

use CampusEvents::pages::{AuthForm, AuthMode, AuthPage};
use CampusEvents::AuthState;

use crate::helpers::*;

#[tokio::test]
async fn test_login_authenticates_session() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user = student();
    ctx.backend.mock_login(&user, MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AuthPage::new(app.clone(), AuthMode::Login);
    page.form = AuthForm::login(" ADA@college.edu ", "password123");

    let redirect = page.submit().await;

    assert_eq!(redirect.as_deref(), Some("/dashboard"));
    assert_eq!(page.success.as_deref(), Some("Login successful! Redirecting..."));
    assert!(page.error.is_none());
    assert!(!page.loading);
    assert_eq!(TestContext::auth_state(&app).await, AuthState::Authenticated(user));
}

#[tokio::test]
async fn test_login_failure_keeps_session_anonymous() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.backend
        .mock_login(&student(), MockResponseConfig::failing("Invalid email or password"))
        .await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AuthPage::new(app.clone(), AuthMode::Login);
    page.form = AuthForm::login("ada@college.edu", "wrong");

    assert!(page.submit().await.is_none());
    assert_eq!(page.error.as_deref(), Some("Invalid email or password"));
    assert_eq!(TestContext::auth_state(&app).await, AuthState::Unauthenticated);
}

#[tokio::test]
async fn test_signup_validation_happens_before_request() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AuthPage::new(app, AuthMode::Signup);
    page.form = AuthForm {
        username: "ada".into(),
        email: "ada@college.edu".into(),
        password: "secret1".into(),
        confirm_password: "secret2".into(),
    };

    assert!(page.submit().await.is_none());
    assert_eq!(page.error.as_deref(), Some("Passwords do not match"));
    ctx.backend.verify_calls("POST", "/api/auth/signup", 0).await;
}

#[tokio::test]
async fn test_signup_success() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user = student();
    ctx.backend.mock_signup(&user, MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AuthPage::new(app.clone(), AuthMode::Signup);
    page.form = AuthForm {
        username: "ada".into(),
        email: "ada@college.edu".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
    };

    assert_eq!(page.submit().await.as_deref(), Some("/dashboard"));
    assert!(TestContext::auth_state(&app).await.is_authenticated());
}

#[tokio::test]
async fn test_toggle_mode_clears_form() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AuthPage::new(app, AuthMode::Login);
    page.form = AuthForm::login("ada@college.edu", "x");
    page.error = Some("Invalid email or password".into());

    page.toggle_mode();

    assert_eq!(page.mode, AuthMode::Signup);
    assert_eq!(page.form, AuthForm::default());
    assert!(page.error.is_none());
}
