use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Item, ItemQuery};

/// Errors that can occur when talking to the item document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read access to one of the platform's item collections.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// List items matching the query, most recently reported first.
    async fn find(&self, query: &ItemQuery) -> Result<Vec<Item>, StoreError>;

    /// Look up a single item by ID. `Ok(None)` when no such document exists.
    async fn find_by_id(&self, item_id: &str) -> Result<Option<Item>, StoreError>;
}

/// Document store client for a single item collection
///
/// Talks to the platform's Appwrite-compatible REST API. Each collection
/// (lost items, found items) gets its own client instance.
pub struct HttpItemStore {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    client: Client,
}

impl HttpItemStore {
    /// Create a new store client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection_id: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection_id,
            client,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection_id
        )
    }
}

#[async_trait]
impl ItemStore for HttpItemStore {
    async fn find(&self, query: &ItemQuery) -> Result<Vec<Item>, StoreError> {
        // Build the document store query list: JSON array of query strings
        let mut queries = vec![format!("equal(\"status\", \"{}\")", query.status)];
        if let Some(category) = query.category {
            queries.push(format!("equal(\"category\", \"{}\")", category));
        }
        queries.push("orderDesc(\"createdAt\")".to_string());
        queries.push(format!("limit({})", query.limit));

        let queries_json = serde_json::to_string(&queries).unwrap();
        let encoded_queries = urlencoding::encode(&queries_json);

        let full_url = format!("{}?query={}", self.documents_url(), encoded_queries);

        tracing::debug!("Querying {} items from: {}", self.collection_id, full_url);

        let response = self
            .client
            .get(&full_url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to query items: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))?;

        // Documents that fail to parse are skipped rather than failing the
        // whole listing.
        let items: Vec<Item> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                match serde_json::from_value(data.clone()) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping unparseable document in {}: {}",
                            self.collection_id,
                            e
                        );
                        None
                    }
                }
            })
            .collect();

        tracing::debug!(
            "Fetched {} items from {} (total: {})",
            items.len(),
            self.collection_id,
            total
        );

        Ok(items)
    }

    async fn find_by_id(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        let url = format!("{}/{}", self.documents_url(), item_id);

        tracing::debug!("Fetching item {} from {}", item_id, self.collection_id);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to fetch item: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let data = json.get("data").unwrap_or(&json);

        let item = serde_json::from_value(data.clone())
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse item: {}", e)))?;

        Ok(Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemStatus};
    use mockito::Matcher;

    fn test_store(base_url: String) -> HttpItemStore {
        HttpItemStore::new(
            base_url,
            "test_key".to_string(),
            "test_project".to_string(),
            "campus_finder".to_string(),
            "found_items".to_string(),
        )
    }

    #[test]
    fn test_store_creation() {
        let store = test_store("https://backend.test/v1".to_string());

        assert_eq!(store.base_url, "https://backend.test/v1");
        assert_eq!(store.api_key, "test_key");
        assert_eq!(store.collection_id, "found_items");
    }

    #[tokio::test]
    async fn test_find_builds_store_query() {
        let mut server = mockito::Server::new_async().await;

        let expected_query = concat!(
            "[\"equal(\\\"status\\\", \\\"available\\\")\",",
            "\"equal(\\\"category\\\", \\\"Electronics\\\")\",",
            "\"orderDesc(\\\"createdAt\\\")\",",
            "\"limit(10)\"]"
        );
        let mock = server
            .mock(
                "GET",
                "/databases/campus_finder/collections/found_items/documents",
            )
            .match_query(Matcher::UrlEncoded(
                "query".to_string(),
                expected_query.to_string(),
            ))
            .match_header("x-appwrite-key", "test_key")
            .match_header("x-appwrite-project", "test_project")
            .with_status(200)
            .with_body(
                r#"{"total": 1, "documents": [
                    {"itemId": "found_1", "userId": "user_9", "itemName": "Laptop",
                     "category": "Electronics", "status": "available"}
                ]}"#,
            )
            .create_async()
            .await;

        let store = test_store(server.url());
        let query = ItemQuery {
            category: Some(Category::Electronics),
            status: ItemStatus::Available,
            limit: 10,
        };

        let items = store.find(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "found_1");
        assert_eq!(items[0].item_name, "Laptop");
    }

    #[tokio::test]
    async fn test_find_skips_unparseable_documents() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock(
                "GET",
                "/databases/campus_finder/collections/found_items/documents",
            )
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"total": 3, "documents": [
                    {"itemId": "found_1", "userId": "u1", "itemName": "Bag", "status": "available"},
                    {"unrelated": true},
                    {"data": {"itemId": "found_2", "userId": "u2", "itemName": "Keys", "status": "available"}}
                ]}"#,
            )
            .create_async()
            .await;

        let store = test_store(server.url());
        let query = ItemQuery {
            category: None,
            status: ItemStatus::Available,
            limit: 10,
        };

        let items = store.find(&query).await.unwrap();

        // The bad document is dropped, the data-wrapped one still parses.
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "found_1");
        assert_eq!(items[1].id, "found_2");
    }

    #[tokio::test]
    async fn test_find_propagates_api_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock(
                "GET",
                "/databases/campus_finder/collections/found_items/documents",
            )
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let store = test_store(server.url());
        let query = ItemQuery {
            category: None,
            status: ItemStatus::Available,
            limit: 10,
        };

        let result = store.find(&query).await;
        assert!(matches!(result, Err(StoreError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_item() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock(
                "GET",
                "/databases/campus_finder/collections/found_items/documents/found_7",
            )
            .match_header("x-appwrite-key", "test_key")
            .with_status(200)
            .with_body(
                r#"{"itemId": "found_7", "userId": "user_3", "itemName": "Umbrella",
                    "category": "Other", "status": "available"}"#,
            )
            .create_async()
            .await;

        let store = test_store(server.url());
        let item = store.find_by_id("found_7").await.unwrap();

        let item = item.unwrap();
        assert_eq!(item.id, "found_7");
        assert_eq!(item.category, Some(Category::Other));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock(
                "GET",
                "/databases/campus_finder/collections/found_items/documents/nope",
            )
            .with_status(404)
            .create_async()
            .await;

        let store = test_store(server.url());
        let item = store.find_by_id("nope").await.unwrap();
        assert!(item.is_none());
    }
}
