//! Services module
//!
//! Gateways translating client operations into backend REST calls

pub mod auth;
pub mod diagnostics;
pub mod events;
pub mod http;
pub mod registrations;

// Re-export commonly used services
pub use auth::AuthService;
pub use diagnostics::{DiagnosticsService, HealthReport};
pub use events::EventService;
pub use http::{ApiClient, handle_response};
pub use registrations::RegistrationService;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all gateways
///
/// All gateways share one [`ApiClient`], so a session cookie obtained by a
/// login is sent by every later call.
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub event_service: EventService,
    pub registration_service: RegistrationService,
    pub diagnostics_service: DiagnosticsService,
    client: ApiClient,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all gateways initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = ApiClient::new(settings)?;

        Ok(Self {
            auth_service: AuthService::new(client.clone()),
            event_service: EventService::new(client.clone()),
            registration_service: RegistrationService::new(client.clone()),
            diagnostics_service: DiagnosticsService::new(client.clone()),
            client,
        })
    }

    /// Base URL every gateway talks to
    pub fn api_base_url(&self) -> &str {
        self.client.base_url()
    }
}
