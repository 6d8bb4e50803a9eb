//! Integration tests for the event detail page
//!
//! Covers registration-status reconciliation on load, the optimistic
//! registered state after a successful registration, and dropping results
//! that arrive after the page is disposed.

use std::time::Duration;

use CampusEvents::pages::{DetailView, EventDetailsPage, RegistrationAction};
use CampusEvents::widgets::ToastKind;

use crate::helpers::*;

#[tokio::test]
async fn test_registration_is_optimistic() {
    let ctx = TestContext::new_with_config(TestConfig::logged_in(student()))
        .await
        .expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    // Fetched once on load; registering must not refetch it
    ctx.backend.mock_my_registrations(&[], Some(1)).await;
    ctx.backend.mock_register("e1", true, MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app.clone(), "e1");

    page.load().await;
    assert_eq!(page.view, DetailView::Ready);
    assert!(!page.is_registered);
    assert_eq!(page.action(), RegistrationAction::Register);

    let redirect = page.register().await;
    assert!(redirect.is_none());
    assert!(page.is_registered);
    assert_eq!(page.action(), RegistrationAction::AlreadyRegistered);
    assert_eq!(page.registration_message_text(), Some("Success! Your ticket has been generated."));

    let toasts = app.toasts.active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert!(toasts[0].message.starts_with("Confirmation email sent!"));

    ctx.backend.verify_calls("GET", "/api/registrations/my-registrations", 1).await;
    ctx.backend.verify_calls("POST", "/api/registrations/register", 1).await;
}

#[tokio::test]
async fn test_existing_registration_is_detected() {
    let ctx = TestContext::new_with_config(TestConfig::logged_in(student()))
        .await
        .expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    ctx.backend
        .mock_my_registrations(
            &[create_unpopulated_registration("r0", "other"), create_test_registration("r1", &event)],
            Some(1),
        )
        .await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app, "e1");
    page.load().await;

    assert!(page.is_registered);
    assert_eq!(page.action(), RegistrationAction::AlreadyRegistered);
}

#[tokio::test]
async fn test_registration_without_email() {
    let ctx = TestContext::new_with_config(TestConfig::logged_in(student()))
        .await
        .expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    ctx.backend.mock_my_registrations(&[], None).await;
    ctx.backend.mock_register("e1", false, MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app.clone(), "e1");
    page.load().await;
    page.register().await;

    let toasts = app.toasts.active();
    assert!(toasts[0].message.starts_with("Registration successful!"));
}

#[tokio::test]
async fn test_failed_registration_keeps_state() {
    let ctx = TestContext::new_with_config(TestConfig::logged_in(student()))
        .await
        .expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    ctx.backend.mock_my_registrations(&[], None).await;
    ctx.backend
        .mock_register("e1", false, MockResponseConfig::failing("Event is full"))
        .await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app.clone(), "e1");
    page.load().await;
    page.register().await;

    assert!(!page.is_registered);
    assert_eq!(page.registration_message_text(), Some("Event is full"));
    assert_eq!(app.toasts.active()[0].kind, ToastKind::Error);
}

#[tokio::test]
async fn test_anonymous_user_is_sent_to_login() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    ctx.backend.mock_my_registrations(&[], Some(0)).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app, "e1");
    page.load().await;

    assert_eq!(page.view, DetailView::Ready);
    assert_eq!(page.action(), RegistrationAction::LoginPrompt);

    let redirect = page.register().await;
    assert_eq!(redirect.as_deref(), Some("/login"));
    assert_eq!(
        page.registration_message_text(),
        Some("Please log in to get your ticket for this event.")
    );
    ctx.backend.verify_calls("POST", "/api/registrations/register", 0).await;
}

#[tokio::test]
async fn test_missing_event_is_not_found() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.backend.mock_event_not_found("gone").await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app, "gone");
    page.load().await;

    assert_eq!(page.view, DetailView::NotFound);
    assert!(page.event.is_none());
}

#[tokio::test]
async fn test_registrations_failure_fails_the_load() {
    let ctx = TestContext::new_with_config(TestConfig::logged_in(student()))
        .await
        .expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    ctx.backend.mock_html_page("/api/registrations/my-registrations", 500).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app, "e1");
    page.load().await;

    match page.view {
        DetailView::Error(ref message) => assert!(message.contains("API endpoint not found")),
        ref other => panic!("expected error view, got {:?}", other),
    }
    assert!(!page.is_registered);
}

#[tokio::test]
async fn test_disposed_page_ignores_late_results() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::delayed(300)).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = EventDetailsPage::new(app, "e1");

    let guard = page.guard();
    let unmount = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        guard.dispose();
    });

    page.load().await;
    unmount.await.unwrap();

    assert_eq!(page.view, DetailView::Loading);
    assert!(page.event.is_none());
}
