//! Events gateway
//!
//! Listing, detail, CRUD and attendee calls against `/api/events`.

use tracing::debug;

use crate::models::{Ack, Event, EventDraft, EventFilters, User};
use crate::utils::errors::ApiResult;
use super::http::ApiClient;

#[derive(Clone, Debug)]
pub struct EventService {
    client: ApiClient,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &EventFilters) -> ApiResult<Vec<Event>> {
        let query = filters.query_pairs();
        debug!(filters = ?query, "Fetching events");
        // A `null` body means no events.
        let events: Option<Vec<Event>> = self.client.get_with_query(&["api", "events"], &query).await?;
        Ok(events.unwrap_or_default())
    }

    pub async fn get(&self, id: &str) -> ApiResult<Event> {
        self.client.get(&["api", "events", id]).await
    }

    pub async fn create(&self, draft: &EventDraft) -> ApiResult<Event> {
        self.client.post(&["api", "events"], draft).await
    }

    pub async fn update(&self, id: &str, draft: &EventDraft) -> ApiResult<Event> {
        self.client.put(&["api", "events", id], draft).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.client.delete(&["api", "events", id]).await
    }

    pub async fn attendees(&self, id: &str) -> ApiResult<Vec<User>> {
        self.client.get(&["api", "events", id, "attendees"]).await
    }
}
