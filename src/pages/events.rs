//! Events listing with filters

use tracing::{debug, error};

use crate::models::{Event, EventFilters};
use crate::state::AppContext;
use crate::utils::errors::{CampusEventsError, Result};
use super::ViewGuard;

pub struct EventsPage {
    ctx: AppContext,
    guard: ViewGuard,
    pub filters: EventFilters,
    pub loading: bool,
    pub error: Option<String>,
    pub events: Vec<Event>,
}

impl EventsPage {
    pub fn new(ctx: AppContext, filters: EventFilters) -> Self {
        Self {
            ctx,
            guard: ViewGuard::new(),
            filters,
            loading: true,
            error: None,
            events: Vec::new(),
        }
    }

    pub fn guard(&self) -> ViewGuard {
        self.guard.clone()
    }

    /// Fetch events for the current filters
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        debug!(filters = ?self.filters, "Fetching events with filters");
        let result = self.ctx.services.event_service.list(&self.filters).await;

        if !self.guard.is_active() {
            debug!("Events page disposed before events arrived");
            return;
        }

        match result {
            Ok(events) => self.events = events,
            Err(e) => {
                error!(error = %e, "Error fetching events");
                self.error = Some(e.user_message());
            }
        }
        self.loading = false;
    }

    /// Change one filter and refetch
    pub async fn set_filter(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.filters.set(key, value) {
            return Err(CampusEventsError::InvalidInput(format!("Unknown filter: {}", key)));
        }
        self.load().await;
        Ok(())
    }

    /// Reset every filter and refetch
    pub async fn clear_filters(&mut self) {
        self.filters = EventFilters::default();
        self.load().await;
    }

    pub fn dispose(&self) {
        self.guard.dispose();
    }
}
