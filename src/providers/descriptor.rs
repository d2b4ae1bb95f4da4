use log::error;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::ApiError;

/// Immutable description of an outbound provider request. Adapters only
/// build descriptors; the network call happens in [`execute`].
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn get(url: Url, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url,
            headers,
            body: None,
        }
    }

    pub fn post(url: Url, headers: HeaderMap, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url,
            headers,
            body: Some(body),
        }
    }
}

/// Execute a provider request with the uniform error mapping shared by all
/// route groups: transport failures and non-2xx statuses become
/// `ExternalApi` (502), an undecodable body becomes `Internal` (500).
/// Upstream error bodies are logged, never forwarded to the client.
pub async fn execute<T: DeserializeOwned>(
    client: &reqwest::Client,
    descriptor: RequestDescriptor,
    context: &str,
) -> Result<T, ApiError> {
    let mut request = client
        .request(descriptor.method, descriptor.url)
        .headers(descriptor.headers);

    if let Some(body) = &descriptor.body {
        request = request.json(body);
    }

    let response = request.send().await.map_err(|e| {
        error!("{}: request failed: {}", context, e);
        ApiError::ExternalApi("request failed".to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("{}: upstream returned {}: {}", context, status, body);
        return Err(ApiError::ExternalApi(status.to_string()));
    }

    response.json::<T>().await.map_err(|e| {
        error!("{}: failed to decode upstream body: {}", context, e);
        ApiError::Internal("Failed to decode upstream response".to_string())
    })
}
