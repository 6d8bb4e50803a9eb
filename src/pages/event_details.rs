//! Event detail page and registration-status reconciliation
//!
//! On load the page works out whether the session owner already holds a
//! registration for the event. With a user present, the event and the
//! user's registrations are fetched together and both must arrive before
//! membership is decided. After a successful registration the page marks
//! itself registered without asking the backend again, and that state
//! stands for the rest of the page's life.

use futures::future::try_join;
use tracing::{debug, error, info};

use crate::models::{is_registered_for, Event, User};
use crate::state::AppContext;
use crate::utils::errors::ApiError;
use crate::utils::logging::log_user_action;
use super::{visible_text, Banner, BannerKind, ViewGuard};

/// What the detail view is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    Ready,
    NotFound,
    Error(String),
}

/// Action offered next to the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Nobody is logged in
    LoginPrompt,
    Register,
    AlreadyRegistered,
}

pub struct EventDetailsPage {
    ctx: AppContext,
    guard: ViewGuard,
    event_id: String,
    user: Option<User>,
    pub view: DetailView,
    pub event: Option<Event>,
    pub is_registered: bool,
    pub registration_message: Option<Banner>,
}

impl EventDetailsPage {
    pub fn new(ctx: AppContext, event_id: impl Into<String>) -> Self {
        Self {
            ctx,
            guard: ViewGuard::new(),
            event_id: event_id.into(),
            user: None,
            view: DetailView::Loading,
            event: None,
            is_registered: false,
            registration_message: None,
        }
    }

    pub fn guard(&self) -> ViewGuard {
        self.guard.clone()
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Fetch the event and, for a logged-in user, their registration status
    pub async fn load(&mut self) {
        self.view = DetailView::Loading;
        let user = self.ctx.session.current_user().await;
        let events = &self.ctx.services.event_service;
        let registrations = &self.ctx.services.registration_service;

        let result: Result<(Event, bool), ApiError> = match user {
            None => events.get(&self.event_id).await.map(|event| (event, false)),
            Some(_) => {
                try_join(events.get(&self.event_id), registrations.my_registrations())
                    .await
                    .map(|(event, regs)| {
                        let registered = is_registered_for(&regs, &event.id);
                        (event, registered)
                    })
            }
        };

        if !self.guard.is_active() {
            debug!(event_id = %self.event_id, "Detail page disposed before data arrived");
            return;
        }

        self.user = user;
        match result {
            Ok((event, registered)) => {
                self.event = Some(event);
                self.is_registered = registered;
                self.view = DetailView::Ready;
            }
            Err(e) if e.is_not_found() => {
                debug!(event_id = %self.event_id, "Event not found");
                self.view = DetailView::NotFound;
            }
            Err(e) => {
                error!(event_id = %self.event_id, error = %e, "Error fetching event details");
                self.view = DetailView::Error(e.user_message());
            }
        }
    }

    pub fn action(&self) -> RegistrationAction {
        match (&self.user, self.is_registered) {
            (None, _) => RegistrationAction::LoginPrompt,
            (Some(_), true) => RegistrationAction::AlreadyRegistered,
            (Some(_), false) => RegistrationAction::Register,
        }
    }

    /// Register the session owner; returns a redirect when nobody is logged in
    pub async fn register(&mut self) -> Option<String> {
        let ttl = self.ctx.settings.banner_timeout();

        let user = match self.user.clone() {
            Some(user) => user,
            None => {
                self.registration_message = Some(Banner::new(
                    BannerKind::Info,
                    "Please log in to get your ticket for this event.",
                    ttl,
                ));
                return Some(self.ctx.guard.login_path().to_string());
            }
        };

        if self.is_registered {
            return None;
        }

        let event_id = self
            .event
            .as_ref()
            .map(|e| e.id.clone())
            .unwrap_or_else(|| self.event_id.clone());

        let result = self.ctx.services.registration_service.register(&event_id).await;

        if !self.guard.is_active() {
            debug!(event_id = %event_id, "Detail page disposed before registration finished");
            return None;
        }

        match result {
            Ok(response) => {
                self.is_registered = true;
                self.registration_message = Some(Banner::new(
                    BannerKind::Success,
                    "Success! Your ticket has been generated.",
                    ttl,
                ));
                if response.email_sent {
                    self.ctx.toasts.success(
                        "Confirmation email sent! Check your inbox for event details and updates.",
                    );
                } else {
                    self.ctx
                        .toasts
                        .success("Registration successful! Check your dashboard for event details.");
                }
                info!(event_id = %event_id, email_sent = response.email_sent, "Registered for event");
                log_user_action(&user.id, "register", Some(&event_id));
            }
            Err(e) => {
                error!(event_id = %event_id, error = %e, "Error registering");
                let message = e.user_message();
                self.registration_message = Some(Banner::new(BannerKind::Error, message.clone(), ttl));
                self.ctx.toasts.error(message);
            }
        }
        None
    }

    pub fn registration_message_text(&self) -> Option<&str> {
        visible_text(&self.registration_message, std::time::Instant::now())
    }

    pub fn dispose(&self) {
        self.guard.dispose();
    }
}
