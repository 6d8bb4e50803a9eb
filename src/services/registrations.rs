//! Registrations gateway

use tracing::debug;

use crate::models::{Ack, RegisterRequest, RegisterResponse, Registration};
use crate::utils::errors::ApiResult;
use super::http::ApiClient;

#[derive(Clone, Debug)]
pub struct RegistrationService {
    client: ApiClient,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, event_id: &str) -> ApiResult<RegisterResponse> {
        debug!(event_id = event_id, "Registering for event");
        let request = RegisterRequest { event_id: event_id.to_string() };
        self.client.post(&["api", "registrations", "register"], &request).await
    }

    /// Registrations held by the session owner
    pub async fn my_registrations(&self) -> ApiResult<Vec<Registration>> {
        let registrations: Option<Vec<Registration>> =
            self.client.get(&["api", "registrations", "my-registrations"]).await?;
        Ok(registrations.unwrap_or_default())
    }

    pub async fn cancel(&self, registration_id: &str) -> ApiResult<Ack> {
        debug!(registration_id = registration_id, "Cancelling registration");
        self.client.delete(&["api", "registrations", registration_id]).await
    }
}
