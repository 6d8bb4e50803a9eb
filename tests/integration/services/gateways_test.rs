//! Integration tests for the gateway endpoint table

use chrono::NaiveDate;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

use CampusEvents::models::{EventDraft, LoginRequest, Registration, SignupRequest};
use CampusEvents::schedule::ClockTime;
use CampusEvents::ServiceFactory;

use crate::helpers::*;

#[tokio::test]
async fn test_auth_endpoints() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user = student();
    ctx.backend.mock_signup(&user, MockResponseConfig::default()).await;
    ctx.backend.mock_logout(MockResponseConfig::default()).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "ada@college.edu", "password": "password123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u-student", "username": "ada", "email": "ada@college.edu", "role": "user"
        })))
        .mount(&ctx.backend.server)
        .await;

    let services = ServiceFactory::new(&ctx.settings).expect("services");
    let auth = &services.auth_service;

    let logged_in = auth
        .login(&LoginRequest { email: "ada@college.edu".into(), password: "password123".into() })
        .await
        .expect("login");
    assert_eq!(logged_in, user);

    let signed_up = auth
        .signup(&SignupRequest {
            username: "ada".into(),
            email: "ada@college.edu".into(),
            password: "password123".into(),
        })
        .await
        .expect("signup");
    assert_eq!(signed_up.id, "u-student");

    let ack = auth.logout().await.expect("logout");
    assert_eq!(ack.message.as_deref(), Some("Logged out successfully"));
}

#[tokio::test]
async fn test_event_crud_endpoints() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_event(&event, MockResponseConfig::default()).await;
    ctx.backend.mock_update_event(&event, MockResponseConfig::default()).await;
    ctx.backend.mock_delete_event("e1", MockResponseConfig::default()).await;
    ctx.backend.mock_attendees("e1", &[student(), admin()]).await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(body_json(json!({
            "name": "Hackathon",
            "description": "",
            "date": "2099-03-10",
            "time": "09:00",
            "location": "Main Hall",
            "organizer": "Student Council",
            "tags": ["campus", "code"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::to_value(&event).unwrap()))
        .mount(&ctx.backend.server)
        .await;

    let services = ServiceFactory::new(&ctx.settings).expect("services");
    let events = &services.event_service;

    let draft = EventDraft {
        name: "Hackathon".into(),
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2099, 3, 10).unwrap(),
        time: ClockTime::from_hm(9, 0).unwrap(),
        location: "Main Hall".into(),
        organizer: "Student Council".into(),
        tags: vec!["campus".into(), "code".into()],
        image_url: None,
    };

    assert_eq!(events.create(&draft).await.expect("create").id, "e1");
    assert_eq!(events.get("e1").await.expect("get").name, "Hackathon");
    assert_eq!(events.update("e1", &draft).await.expect("update").id, "e1");
    assert!(events.delete("e1").await.is_ok());

    let attendees = events.attendees("e1").await.expect("attendees");
    assert_eq!(attendees.len(), 2);
    assert!(attendees[1].is_admin());
}

#[tokio::test]
async fn test_registration_endpoints() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let event = future_event("e1");
    ctx.backend.mock_register("e1", true, MockResponseConfig::default()).await;
    ctx.backend
        .mock_my_registrations(
            &[create_test_registration("r1", &event), create_unpopulated_registration("r2", "e2")],
            Some(1),
        )
        .await;
    ctx.backend.mock_cancel_registration("r1", MockResponseConfig::default()).await;

    let services = ServiceFactory::new(&ctx.settings).expect("services");
    let registrations = &services.registration_service;

    let response = registrations.register("e1").await.expect("register");
    assert!(response.email_sent);

    let mine: Vec<Registration> = registrations.my_registrations().await.expect("my registrations");
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].event().map(|e| e.name.as_str()), Some("Hackathon"));
    assert_eq!(mine[1].event_id(), "e2");
    assert!(mine[1].event().is_none());

    assert!(registrations.cancel("r1").await.is_ok());
}

#[tokio::test]
async fn test_registration_error_message_from_backend() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.backend
        .mock_register("e1", false, MockResponseConfig::failing("Already registered for this event"))
        .await;

    let services = ServiceFactory::new(&ctx.settings).expect("services");
    let err = services.registration_service.register("e1").await.unwrap_err();
    assert_eq!(err.user_message(), "Already registered for this event");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_ids_stay_inside_their_endpoint() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.backend.mock_cancel_registration("r1", MockResponseConfig::default()).await;
    ctx.backend.mock_attendees("e1", &[student()]).await;

    let services = ServiceFactory::new(&ctx.settings).expect("services");

    // Nothing is mounted for the encoded path, so the backend answers an empty 404
    let deleted = services.event_service.delete("../registrations/r1").await;
    assert_eq!(deleted.unwrap_err().status(), Some(404));
    ctx.backend.verify_calls("DELETE", "/api/registrations/r1", 0).await;

    let event = services.event_service.get("e1/attendees").await;
    assert!(event.is_err());
    ctx.backend.verify_calls("GET", "/api/events/e1/attendees", 0).await;

    let paths: Vec<String> = ctx
        .backend
        .server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/api/events/..%2Fregistrations%2Fr1".to_string(),
            "/api/events/e1%2Fattendees".to_string(),
        ]
    );
}
