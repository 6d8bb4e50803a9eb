//! Personal dashboard: registrations and cancellation

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::models::{count_upcoming, Registration, User};
use crate::state::AppContext;
use crate::utils::logging::log_user_action;
use super::{Banner, BannerKind, ViewGuard};

pub struct DashboardPage {
    ctx: AppContext,
    guard: ViewGuard,
    pub user: Option<User>,
    pub loading: bool,
    pub registrations: Vec<Registration>,
    pub message: Option<Banner>,
    pub error: Option<Banner>,
}

impl DashboardPage {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            guard: ViewGuard::new(),
            user: None,
            loading: true,
            registrations: Vec::new(),
            message: None,
            error: None,
        }
    }

    pub fn guard(&self) -> ViewGuard {
        self.guard.clone()
    }

    /// Fetch the session owner's registrations
    pub async fn load(&mut self) {
        self.user = self.ctx.session.current_user().await;
        if self.user.is_none() {
            self.loading = false;
            return;
        }

        self.loading = true;
        let result = self.ctx.services.registration_service.my_registrations().await;

        if !self.guard.is_active() {
            debug!("Dashboard disposed before registrations arrived");
            return;
        }

        match result {
            Ok(registrations) => self.registrations = registrations,
            Err(e) => {
                error!(error = %e, "Error fetching registrations");
                self.error = Some(Banner::new(
                    BannerKind::Error,
                    e.user_message(),
                    self.ctx.settings.banner_timeout(),
                ));
            }
        }
        self.loading = false;
    }

    pub fn total(&self) -> usize {
        self.registrations.len()
    }

    /// Registrations for events on or after `today`
    pub fn upcoming_count(&self, today: NaiveDate) -> usize {
        count_upcoming(&self.registrations, today)
    }

    /// Cancel a registration, then refetch the list
    pub async fn cancel(&mut self, registration_id: &str) {
        let ttl = self.ctx.settings.banner_timeout();
        let result = self.ctx.services.registration_service.cancel(registration_id).await;

        if !self.guard.is_active() {
            return;
        }

        match result {
            Ok(_) => {
                self.message = Some(Banner::new(
                    BannerKind::Success,
                    "Registration cancelled successfully!",
                    ttl,
                ));
                if let Some(ref user) = self.user {
                    log_user_action(&user.id, "cancel_registration", Some(registration_id));
                }
                self.load().await;
            }
            Err(e) => {
                error!(registration_id = registration_id, error = %e, "Error cancelling registration");
                self.error = Some(Banner::new(BannerKind::Error, e.user_message(), ttl));
            }
        }
    }

    /// Greeting shown in the header
    pub fn greeting(&self) -> String {
        let name = self.user.as_ref().map(|u| u.username.as_str()).unwrap_or("User");
        format!("Hey, {}", name)
    }

    pub fn dispose(&self) {
        self.guard.dispose();
    }
}
