//! Integration tests for the admin panel

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};

use CampusEvents::pages::{AdminPanelPage, EventForm};
use CampusEvents::utils::errors::ErrorSeverity;
use CampusEvents::CampusEventsError;

use crate::helpers::*;

async fn admin_context() -> TestContext {
    TestContext::new_with_config(TestConfig::logged_in(admin()))
        .await
        .expect("Failed to create test context")
}

#[tokio::test]
async fn test_create_event_resets_form_and_refetches() {
    let ctx = admin_context().await;
    let created = create_test_event("new", "Poetry Night", "2099-05-02", "19:30");
    ctx.backend.mock_events_list(&[created.clone()]).await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(body_partial_json(json!({
            "name": "Poetry Night",
            "date": "2099-05-02",
            "time": "19:30",
            "tags": ["arts", "open mic"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::to_value(&created).unwrap()))
        .expect(1)
        .mount(&ctx.backend.server)
        .await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);
    page.form = EventForm {
        name: "Poetry Night".into(),
        date: "2099-05-02".into(),
        time: "7:30 PM".into(),
        tags: "arts, open mic".into(),
        ..EventForm::default()
    };

    page.submit().await.expect("submit");

    assert_eq!(page.message.as_ref().map(|b| b.message.as_str()), Some("Event created successfully!"));
    assert_eq!(page.form, EventForm::default());
    assert!(page.editing_event_id.is_none());
    assert_eq!(page.events.len(), 1);
    ctx.backend.verify_calls("GET", "/api/events", 1).await;
}

#[tokio::test]
async fn test_edit_then_update() {
    let ctx = admin_context().await;
    let event = future_event("e1");
    ctx.backend.mock_events_list(&[event.clone()]).await;
    ctx.backend.mock_update_event(&event, MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);
    page.load().await;

    let first = page.events[0].clone();
    page.edit(&first);
    assert_eq!(page.editing_event_id.as_deref(), Some("e1"));
    assert_eq!(page.form.date, "2099-03-10");
    assert_eq!(page.form.tags, "campus");

    page.form.location = "Library".into();
    page.submit().await.expect("submit");

    assert_eq!(page.message.as_ref().map(|b| b.message.as_str()), Some("Event updated successfully!"));
    assert!(page.editing_event_id.is_none());
    ctx.backend.verify_calls("PUT", "/api/events/e1", 1).await;
}

#[tokio::test]
async fn test_edit_by_id_prefills_form() {
    let ctx = admin_context().await;
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);
    page.edit_by_id("e1").await.expect("edit");

    assert_eq!(page.editing_event_id.as_deref(), Some("e1"));
    assert_eq!(page.form.name, event.name);
}

#[tokio::test]
async fn test_edit_missing_event_is_not_found() {
    let ctx = admin_context().await;
    ctx.backend.mock_event_not_found("e404").await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);
    let err = page.edit_by_id("e404").await.unwrap_err();

    assert_matches!(err, CampusEventsError::EventNotFound { ref event_id } if event_id == "e404");
    assert_eq!(err.severity(), ErrorSeverity::Warning);
    assert!(page.editing_event_id.is_none());
    assert_eq!(page.error.as_ref().map(|b| b.message.as_str()), Some("Event not found: e404"));
}

#[tokio::test]
async fn test_invalid_form_makes_no_request() {
    let ctx = admin_context().await;
    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);
    page.form = EventForm {
        name: "No Date".into(),
        time: "10:00".into(),
        ..EventForm::default()
    };

    assert!(page.submit().await.is_err());
    assert!(page.error.is_some());
    ctx.backend.verify_calls("POST", "/api/events", 0).await;
}

#[tokio::test]
async fn test_delete_event() {
    let ctx = admin_context().await;
    ctx.backend.mock_events_list(&[]).await;
    ctx.backend.mock_delete_event("e1", MockResponseConfig::default()).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);
    page.delete("e1").await.expect("delete");

    assert_eq!(page.message.as_ref().map(|b| b.message.as_str()), Some("Event deleted successfully!"));
    ctx.backend.verify_calls("GET", "/api/events", 1).await;
}

#[tokio::test]
async fn test_toggle_attendees() {
    let ctx = admin_context().await;
    ctx.backend.mock_attendees("e1", &[student()]).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = AdminPanelPage::new(app);

    page.toggle_attendees("e1").await;
    assert_eq!(page.attendees.event_id.as_deref(), Some("e1"));
    assert_eq!(page.attendees.attendees.len(), 1);
    assert!(!page.attendees.loading);

    // Second toggle hides the list without another request
    page.toggle_attendees("e1").await;
    assert!(page.attendees.event_id.is_none());
    assert!(page.attendees.attendees.is_empty());
    ctx.backend.verify_calls("GET", "/api/events/e1/attendees", 1).await;
}
