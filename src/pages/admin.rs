//! Admin panel: event CRUD and attendee lists

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::models::{Event, EventDraft, User};
use crate::schedule::ClockTime;
use crate::state::AppContext;
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::{date_only, join_tags, split_tags};
use crate::utils::logging::log_admin_action;
use super::{Banner, BannerKind, ViewGuard};

/// Editable event form, as typed by the admin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer: String,
    /// Comma separated
    pub tags: String,
    pub image_url: String,
}

impl EventForm {
    /// Prefill from an existing event
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            date: date_only(&event.date).to_string(),
            time: event.time.clone(),
            location: event.location.clone(),
            organizer: event.organizer.clone(),
            tags: join_tags(&event.tags),
            image_url: event.image_url.clone().unwrap_or_default(),
        }
    }

    /// Validate and convert into the wire payload
    pub fn to_draft(&self) -> Result<EventDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CampusEventsError::InvalidInput("Event name is required".to_string()));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            CampusEventsError::InvalidInput(format!("Date must be YYYY-MM-DD, got {:?}", self.date))
        })?;

        let time = ClockTime::parse(&self.time)
            .map_err(|e| CampusEventsError::InvalidInput(format!("Invalid time: {}", e)))?;

        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(EventDraft {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            date,
            time,
            location: self.location.trim().to_string(),
            organizer: self.organizer.trim().to_string(),
            tags: split_tags(&self.tags),
            image_url,
        })
    }
}

/// Attendee list for one expanded event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendeesPanel {
    pub event_id: Option<String>,
    pub attendees: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct AdminPanelPage {
    ctx: AppContext,
    guard: ViewGuard,
    pub events: Vec<Event>,
    pub loading: bool,
    pub form: EventForm,
    pub editing_event_id: Option<String>,
    pub attendees: AttendeesPanel,
    pub message: Option<Banner>,
    pub error: Option<Banner>,
}

impl AdminPanelPage {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            guard: ViewGuard::new(),
            events: Vec::new(),
            loading: true,
            form: EventForm::default(),
            editing_event_id: None,
            attendees: AttendeesPanel::default(),
            message: None,
            error: None,
        }
    }

    pub fn guard(&self) -> ViewGuard {
        self.guard.clone()
    }

    fn success(&mut self, message: &str) {
        self.message = Some(Banner::new(BannerKind::Success, message, self.ctx.settings.banner_timeout()));
    }

    fn failure(&mut self, message: String) {
        self.error = Some(Banner::new(BannerKind::Error, message, self.ctx.settings.banner_timeout()));
    }

    async fn admin_id(&self) -> String {
        self.ctx
            .session
            .current_user()
            .await
            .map(|u| u.id)
            .unwrap_or_default()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        let result = self.ctx.services.event_service.list(&Default::default()).await;

        if !self.guard.is_active() {
            debug!("Admin panel disposed before events arrived");
            return;
        }

        match result {
            Ok(events) => self.events = events,
            Err(e) => {
                error!(error = %e, "Error fetching events");
                self.failure(e.user_message());
            }
        }
        self.loading = false;
    }

    /// Create or update from the current form; clears the form on success
    pub async fn submit(&mut self) -> Result<()> {
        self.message = None;
        self.error = None;

        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.failure(e.user_message());
                return Err(e);
            }
        };

        let services = &self.ctx.services;
        let result = match self.editing_event_id {
            Some(ref id) => services.event_service.update(id, &draft).await,
            None => services.event_service.create(&draft).await,
        };

        if !self.guard.is_active() {
            return Ok(());
        }

        match result {
            Ok(saved) => {
                let (action, text) = if self.editing_event_id.is_some() {
                    ("update_event", "Event updated successfully!")
                } else {
                    ("create_event", "Event created successfully!")
                };
                log_admin_action(&self.admin_id().await, action, Some(&saved.id), Some(&saved.name));
                self.success(text);
                self.form = EventForm::default();
                self.editing_event_id = None;
                self.load().await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error saving event");
                self.failure(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Fetch an event and load it into the form for editing
    pub async fn edit_by_id(&mut self, id: &str) -> Result<()> {
        match self.ctx.services.event_service.get(id).await {
            Ok(event) => {
                self.edit(&event);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                let err = CampusEventsError::EventNotFound { event_id: id.to_string() };
                self.failure(err.user_message());
                Err(err)
            }
            Err(e) => {
                error!(event_id = id, error = %e, "Error fetching event for editing");
                self.failure(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Load an event into the form for editing
    pub fn edit(&mut self, event: &Event) {
        self.editing_event_id = Some(event.id.clone());
        self.form = EventForm::from_event(event);
    }

    pub fn cancel_edit(&mut self) {
        self.editing_event_id = None;
        self.form = EventForm::default();
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let result = self.ctx.services.event_service.delete(id).await;

        if !self.guard.is_active() {
            return Ok(());
        }

        match result {
            Ok(_) => {
                log_admin_action(&self.admin_id().await, "delete_event", Some(id), None);
                self.success("Event deleted successfully!");
                self.load().await;
                Ok(())
            }
            Err(e) => {
                error!(event_id = id, error = %e, "Error deleting event");
                self.failure(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Show attendees for `event_id`, or hide them if already shown
    pub async fn toggle_attendees(&mut self, event_id: &str) {
        if self.attendees.event_id.as_deref() == Some(event_id) {
            self.attendees = AttendeesPanel::default();
            return;
        }

        self.attendees = AttendeesPanel {
            event_id: Some(event_id.to_string()),
            loading: true,
            ..AttendeesPanel::default()
        };

        let result = self.ctx.services.event_service.attendees(event_id).await;

        if !self.guard.is_active() {
            return;
        }

        match result {
            Ok(list) => self.attendees.attendees = list,
            Err(e) => {
                error!(event_id = event_id, error = %e, "Error fetching attendees");
                self.attendees.error = Some(e.user_message());
            }
        }
        self.attendees.loading = false;
    }

    pub fn dispose(&self) {
        self.guard.dispose();
    }
}
