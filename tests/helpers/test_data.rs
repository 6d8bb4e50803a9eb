//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating users, events and
//! registrations shaped the way the backend returns them.

use CampusEvents::models::{Event, EventRef, Registration, Role, User};

/// Helper function to create a test user
pub fn create_test_user(id: &str, username: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{}@college.edu", username),
        role,
    }
}

/// Regular student account
pub fn student() -> User {
    create_test_user("u-student", "ada", Role::User)
}

/// Administrator account
pub fn admin() -> User {
    create_test_user("u-admin", "grace", Role::Admin)
}

/// Helper function to create a test event
pub fn create_test_event(id: &str, name: &str, date: &str, time: &str) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        date: format!("{}T00:00:00.000Z", date),
        time: time.to_string(),
        location: "Main Hall".to_string(),
        organizer: "Student Council".to_string(),
        tags: vec!["campus".to_string()],
        ..Event::default()
    }
}

/// Event far enough ahead to always be upcoming
pub fn future_event(id: &str) -> Event {
    create_test_event(id, "Hackathon", "2099-03-10", "09:00")
}

/// Helper function to create a registration with the event populated
pub fn create_test_registration(id: &str, event: &Event) -> Registration {
    Registration {
        id: id.to_string(),
        user_id: None,
        event_id: EventRef::Populated(Box::new(event.clone())),
        registered_at: None,
    }
}

/// Registration referencing the event by id only
pub fn create_unpopulated_registration(id: &str, event_id: &str) -> Registration {
    Registration {
        id: id.to_string(),
        user_id: None,
        event_id: EventRef::Id(event_id.to_string()),
        registered_at: None,
    }
}
