//! Page modules
//!
//! Each page owns its view state and drives the gateways. Pages never
//! write view state once disposed: results that arrive late are dropped.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod event_details;
pub mod events;
pub mod home;

pub use admin::{AdminPanelPage, AttendeesPanel, EventForm};
pub use auth::{AuthForm, AuthMode, AuthPage};
pub use dashboard::DashboardPage;
pub use event_details::{DetailView, EventDetailsPage, RegistrationAction};
pub use events::EventsPage;
pub use home::HomePage;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Disposed flag shared between a page and whoever may unmount it
#[derive(Debug, Clone)]
pub struct ViewGuard {
    disposed: Arc<AtomicBool>,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self {
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        !self.disposed.load(Ordering::SeqCst)
    }
}

impl Default for ViewGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

/// Transient message shown at the top of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>, ttl: Duration) -> Self {
        Self::shown_at(kind, message, ttl, Instant::now())
    }

    pub fn shown_at(kind: BannerKind, message: impl Into<String>, ttl: Duration, at: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: at,
            ttl,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}

/// Message of a banner slot if it has not expired yet
pub fn visible_text(slot: &Option<Banner>, now: Instant) -> Option<&str> {
    slot.as_ref()
        .filter(|banner| banner.is_visible_at(now))
        .map(|banner| banner.message.as_str())
}

/// Message of a banner slot whatever its age
///
/// The terminal prints a page once, after every await has finished, so it
/// reports banners that a live view may already have hidden.
pub fn banner_text(slot: &Option<Banner>) -> Option<&str> {
    slot.as_ref().map(|banner| banner.message.as_str())
}
