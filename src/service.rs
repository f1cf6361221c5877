use std::marker::PhantomData;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ValidationErrors;
use crate::resource::Resource;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("record has no id")]
    MissingId,
}

impl ServiceError {
    /// Messages carried by a validation failure, if this is one.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            ServiceError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

/// REST client for one resource collection.
///
/// Every call is single-shot: no retries and no caching of results.
pub struct ResourceService<T: Resource> {
    http: Client,
    base_url: String,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> ResourceService<T> {
    pub fn new(http: Client, api_base_url: &str) -> Self {
        Self {
            http,
            base_url: format!("{}/{}", api_base_url.trim_end_matches('/'), T::API_PATH),
            _resource: PhantomData,
        }
    }

    /// Collection URL this service is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let response = self.send(Method::GET, &self.base_url, None).await?;
        decode(response).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<T, ServiceError> {
        let response = self.send(Method::GET, &self.item_url(id), None).await?;
        decode(response).await
    }

    pub async fn create(&self, record: &T) -> Result<T, ServiceError> {
        let body = serde_json::to_value(record)?;
        let response = self.send(Method::POST, &self.base_url, Some(body)).await?;
        decode(response).await
    }

    /// Sends the record to `{path}/{id}`. A server answering with an empty body
    /// (204) is taken to have stored the record as sent.
    pub async fn update(&self, record: &T) -> Result<T, ServiceError> {
        let id = record.id().ok_or(ServiceError::MissingId)?;
        let body = serde_json::to_value(record)?;
        let response = self.send(Method::PUT, &self.item_url(id), Some(body)).await?;

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(record.clone());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.send(Method::DELETE, &self.item_url(id), None).await?;
        Ok(())
    }

    // Issues the request and maps any non-2xx status onto the error taxonomy.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ServiceError> {
        debug!(%method, url, "sending request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(b) = body {
            request = request.json(&b);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, url, error = %e, "request failed");
            ServiceError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error = error_from_response(status, response).await;
        warn!(%method, url, status = status.as_u16(), error = %error, "request rejected");
        Err(error)
    }
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ServiceError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn error_from_response(status: StatusCode, response: Response) -> ServiceError {
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return ServiceError::Transport(e),
    };

    match status {
        StatusCode::NOT_FOUND => ServiceError::NotFound,
        StatusCode::UNPROCESSABLE_ENTITY => match serde_json::from_str::<ValidationErrors>(&text) {
            Ok(body) => ServiceError::Validation(body.errors),
            Err(_) => ServiceError::Server {
                status: status.as_u16(),
                message: text,
            },
        },
        _ => ServiceError::Server {
            status: status.as_u16(),
            message: if text.is_empty() {
                status.to_string()
            } else {
                text
            },
        },
    }
}
