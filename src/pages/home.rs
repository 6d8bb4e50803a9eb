//! Home page: upcoming events and keyword search

use chrono::NaiveDateTime;
use tracing::{debug, error};
use url::form_urlencoded;

use crate::models::{Event, EventFilters};
use crate::schedule::upcoming_events;
use crate::state::AppContext;
use super::ViewGuard;

pub struct HomePage {
    ctx: AppContext,
    guard: ViewGuard,
    pub loading: bool,
    pub error: Option<String>,
    pub upcoming: Vec<Event>,
}

impl HomePage {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            guard: ViewGuard::new(),
            loading: true,
            error: None,
            upcoming: Vec::new(),
        }
    }

    pub fn guard(&self) -> ViewGuard {
        self.guard.clone()
    }

    /// Fetch all events and keep the ones starting after `now`
    pub async fn load(&mut self, now: NaiveDateTime) {
        self.loading = true;
        let result = self.ctx.services.event_service.list(&EventFilters::default()).await;

        if !self.guard.is_active() {
            debug!("Home page disposed before events arrived");
            return;
        }

        match result {
            Ok(events) => {
                self.upcoming = upcoming_events(events, now);
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "Error fetching upcoming events");
                self.error = Some("Failed to load upcoming events. Please try again later.".to_string());
                self.ctx.toasts.error("Failed to load upcoming events.");
            }
        }
        self.loading = false;
    }

    /// Upcoming events capped for display
    pub fn displayed(&self) -> &[Event] {
        let limit = self.ctx.settings.ui.home_event_limit.min(self.upcoming.len());
        &self.upcoming[..limit]
    }

    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.error.is_none() && self.upcoming.is_empty()
    }

    /// Target path for a keyword search, or `None` with a warning toast
    pub fn search(&self, keyword: &str) -> Option<String> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.ctx.toasts.warning("Please enter a search keyword.");
            return None;
        }

        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("keyword", keyword)
            .finish();
        Some(format!("/events?{}", query))
    }

    pub fn dispose(&self) {
        self.guard.dispose();
    }
}
