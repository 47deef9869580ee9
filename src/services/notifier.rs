use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Category, Item, ItemKind};

/// Errors that can occur when delivering match notifications
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Notification API returned error: {0}")]
    ApiError(String),
}

/// Delivery of match alerts to item owners.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Tell `recipient_id` that `item` (a `item_kind` report) looks like a
    /// match for one of their own reports.
    async fn notify_match(
        &self,
        recipient_id: &str,
        item: &Item,
        item_kind: ItemKind,
    ) -> Result<(), NotifyError>;
}

/// Payload posted to the platform's notification intake.
#[derive(Debug, Clone, Serialize)]
pub struct MatchAlert {
    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(rename = "itemId")]
    pub item_id: String,

    #[serde(rename = "itemName")]
    pub item_name: String,

    pub category: Option<Category>,

    pub location: String,

    #[serde(rename = "itemType")]
    pub item_type: ItemKind,

    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

impl MatchAlert {
    pub fn for_recipient(recipient_id: &str, item: &Item, item_kind: ItemKind) -> Self {
        Self {
            user_id: recipient_id.to_string(),
            item_id: item.id.clone(),
            item_name: item.item_name.clone(),
            category: item.category,
            location: item.location.clone(),
            item_type: item_kind,
            date: item.event_date(),
        }
    }
}

/// Notification client posting match alerts to the platform backend
pub struct HttpNotifier {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl HttpNotifier {
    /// Create a new notifier client
    pub fn new(endpoint: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }
}

#[async_trait]
impl NotificationDispatcher for HttpNotifier {
    async fn notify_match(
        &self,
        recipient_id: &str,
        item: &Item,
        item_kind: ItemKind,
    ) -> Result<(), NotifyError> {
        let alert = MatchAlert::for_recipient(recipient_id, item, item_kind);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .json(&alert)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::ApiError(format!(
                "Failed to send alert: {}",
                response.status()
            )));
        }

        tracing::debug!(
            "Sent match alert to {} about {} item {}",
            recipient_id,
            item_kind,
            item.id
        );

        Ok(())
    }
}
