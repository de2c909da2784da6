use reqwest::Client;
use url::Url;

use crate::error::{Result, UsersError};
use crate::types::User;

pub struct UsersClient {
    http: Client,
    endpoint: Url,
}

impl UsersClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Single GET against the endpoint. The parsed body is logged before it
    /// is decoded into records.
    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching users");

        let response = self.http.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            return Err(UsersError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.text().await?;
        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| self.decode_error(e))?;
        tracing::debug!(response = %raw, "received users");

        let users: Vec<User> = serde_json::from_value(raw).map_err(|e| self.decode_error(e))?;
        tracing::info!(count = users.len(), "fetched users");

        Ok(users)
    }

    fn decode_error(&self, source: serde_json::Error) -> UsersError {
        UsersError::Decode {
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}
