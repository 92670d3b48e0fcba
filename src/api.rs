use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::{Cursor, StatusPage};
use crate::error::FetchError;

/// Anything that can answer "what changed since `from_date`".
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch(&self, from_date: Cursor) -> Result<StatusPage, FetchError>;
}

pub struct PraktikumClient {
    token: String,
    url: String,
    client: Client,
}

impl PraktikumClient {
    pub fn new(token: String, url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self { token, url, client })
    }
}

#[async_trait]
impl HomeworkSource for PraktikumClient {
    async fn fetch(&self, from_date: Cursor) -> Result<StatusPage, FetchError> {
        debug!("Polling homework statuses from {}", from_date.value());

        let response = self
            .client
            .get(&self.url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.value())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Homework API answered {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = serde_json::from_str(&body).map_err(FetchError::Decode)?;
        serde_json::from_value(json).map_err(FetchError::Shape)
    }
}
