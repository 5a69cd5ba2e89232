//! HTTP client the CLI uses to talk to a running server.

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::adapters::http::types::{
    CategoriesResponse, CreateItemRequest, ErrorResponse, ItemResponse,
    RegisterProgressionRequest, ReplaceCategoriesRequest, UpdateItemRequest,
};
use crate::domain::models::ItemId;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} ({code}, HTTP {status})")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },
}

impl ClientError {
    /// Machine-readable error code, when the server supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            Self::Http(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub struct TodoClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .tcp_nodelay(true)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    pub async fn list_items(&self) -> ClientResult<Vec<ItemResponse>> {
        let response = self.http_client.get(self.url("/items")).send().await?;
        parse_response(response).await
    }

    pub async fn get_item(&self, id: ItemId) -> ClientResult<ItemResponse> {
        let response = self
            .http_client
            .get(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn create_item(
        &self,
        title: &str,
        description: &str,
        category: &str,
    ) -> ClientResult<ItemResponse> {
        let body = CreateItemRequest {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            category: Some(category.to_string()),
        };
        let response = self
            .http_client
            .post(self.url("/items"))
            .json(&body)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn update_item(&self, id: ItemId, description: &str) -> ClientResult<ItemResponse> {
        let body = UpdateItemRequest {
            description: Some(description.to_string()),
        };
        let response = self
            .http_client
            .put(self.url(&format!("/items/{id}")))
            .json(&body)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn remove_item(&self, id: ItemId) -> ClientResult<ItemResponse> {
        let response = self
            .http_client
            .delete(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn register_progression(
        &self,
        id: ItemId,
        date: &str,
        percent: Decimal,
    ) -> ClientResult<ItemResponse> {
        let body = RegisterProgressionRequest {
            date: Some(date.to_string()),
            percent: Some(percent),
        };
        let response = self
            .http_client
            .post(self.url(&format!("/items/{id}/progressions")))
            .json(&body)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn categories(&self) -> ClientResult<CategoriesResponse> {
        let response = self.http_client.get(self.url("/categories")).send().await?;
        parse_response(response).await
    }

    pub async fn replace_categories(
        &self,
        categories: Vec<String>,
    ) -> ClientResult<CategoriesResponse> {
        let body = ReplaceCategoriesRequest { categories };
        let response = self
            .http_client
            .put(self.url("/categories"))
            .json(&body)
            .send()
            .await?;
        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        debug!(%status, "request succeeded");
        return Ok(response.json::<T>().await?);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error body".to_string());
    warn!("API error ({}): {}", status, body);

    let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => (err.code, err.error),
        Err(_) => ("HTTP_ERROR".to_string(), body),
    };
    Err(ClientError::Api {
        status,
        code,
        message,
    })
}
