//! Integration tests for the home page

use chrono::NaiveDate;

use CampusEvents::pages::HomePage;
use CampusEvents::widgets::ToastKind;

use crate::helpers::*;

fn noon(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_home_shows_only_upcoming_events() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.backend
        .mock_events_list(&[
            create_test_event("past", "Orientation", "2024-01-10", "10:00"),
            create_test_event("earlier-today", "Breakfast Club", "2024-03-01", "9:00 AM"),
            create_test_event("later-today", "Evening Talk", "2024-03-01", "6:30 PM"),
            create_test_event("tba", "Mystery Gig", "2024-01-01", "TBA"),
            create_test_event("future", "Spring Fest", "2024-04-12", "18:00"),
        ])
        .await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = HomePage::new(app);
    page.load(noon(2024, 3, 1)).await;

    let ids: Vec<&str> = page.upcoming.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["later-today", "tba", "future"]);
    assert!(!page.loading);
    assert!(page.error.is_none());
}

#[tokio::test]
async fn test_home_caps_displayed_events() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let events: Vec<_> = (0..9).map(|i| future_event(&format!("e{}", i))).collect();
    ctx.backend.mock_events_list(&events).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = HomePage::new(app);
    page.load(noon(2024, 3, 1)).await;

    assert_eq!(page.upcoming.len(), 9);
    assert_eq!(page.displayed().len(), 6);
}

#[tokio::test]
async fn test_home_load_failure() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    ctx.backend.mock_html_page("/api/events", 404).await;

    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let mut page = HomePage::new(app.clone());
    page.load(noon(2024, 3, 1)).await;

    assert_eq!(
        page.error.as_deref(),
        Some("Failed to load upcoming events. Please try again later.")
    );
    assert!(!page.is_empty_state());
    assert_eq!(app.toasts.active()[0].kind, ToastKind::Error);
}

#[tokio::test]
async fn test_home_search() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let app = ctx.create_app_context().await.expect("Failed to create app context");
    let page = HomePage::new(app.clone());

    assert_eq!(page.search("  jazz night ").as_deref(), Some("/events?keyword=jazz+night"));
    assert!(app.toasts.active().is_empty());

    assert!(page.search("   ").is_none());
    assert_eq!(app.toasts.active()[0].kind, ToastKind::Warning);
}
