//! HTTP-backed Users permissions store

use crate::config::models::users_api::UsersApiConfig;
use crate::core::permissions::PermissionPayload;
use crate::storage::users::UserPermissionsStore;
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Error body shape the backend uses for rejected writes
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// [`UserPermissionsStore`] over the Users REST backend
pub struct HttpUsersStore {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpUsersStore {
    /// Build a store from configuration
    pub fn new(config: &UsersApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn permissions_url(&self, user_id: &str) -> String {
        format!("{}/api/users/{}/permissions", self.base_url, user_id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Pull the human-readable failure message out of a non-success response
    async fn failure_message(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.is_empty() => format!("{}: {}", status, body),
            Err(_) => status.to_string(),
        }
    }
}

#[async_trait]
impl UserPermissionsStore for HttpUsersStore {
    async fn fetch_user_permissions(&self, user_id: &str) -> Result<PermissionPayload> {
        let url = self.permissions_url(user_id);
        debug!(user = %user_id, %url, "fetching user permissions");

        let response = self.authorize(self.client.get(&url)).send().await?;
        match response.status() {
            // Never-saved users have no payload yet; that is the all-false
            // tree, not an error.
            StatusCode::NOT_FOUND => Ok(PermissionPayload::default()),
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(AdminError::persistence(
                Self::failure_message(response).await,
            )),
        }
    }

    async fn save_user_permissions(
        &self,
        user_id: &str,
        payload: &PermissionPayload,
    ) -> Result<()> {
        let url = self.permissions_url(user_id);
        debug!(user = %user_id, %url, "saving user permissions");

        let response = self
            .authorize(self.client.put(&url))
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            info!(user = %user_id, "user permissions saved");
            Ok(())
        } else {
            Err(AdminError::persistence(
                Self::failure_message(response).await,
            ))
        }
    }
}
