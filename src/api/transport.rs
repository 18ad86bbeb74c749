// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{AUTH_HEADER, ClientConfig};
use crate::error::{RequestError, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub use reqwest::Method;

const UA: &str = concat!("finmini/", env!("CARGO_PKG_VERSION"));

/// Authenticated HTTP-over-JSON access to the finance service.
///
/// Holds no state besides the connection pool; every call stands alone.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
    init_data: Option<String>,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(UA);
        if !config.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            init_data: config.init_data.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and return the parsed JSON body.
    ///
    /// `endpoint` is relative to the base URL and may carry a query string.
    /// An empty success body comes back as `Value::Null`.
    pub async fn send(&self, endpoint: &str, method: Method, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "sending request");

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.init_data {
            req = req.header(AUTH_HEADER, token.as_str());
        }
        if let Some(b) = body {
            let bytes = serde_json::to_vec(b)
                .map_err(|e| RequestError::new(format!("Invalid request body: {}", e)))?;
            req = req.body(bytes);
        }

        let resp = req.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "request did not complete");
            RequestError::from(e)
        })?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let err = RequestError::from_response(status.as_u16(), &bytes);
            warn!(%method, %url, status = status.as_u16(), message = err.message(), "request failed");
            return Err(err);
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%method, %url, error = %e, "response is not JSON");
            RequestError::new(format!("Invalid JSON response: {}", e)).with_status(status.as_u16())
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let v = self.send(endpoint, Method::GET, None).await?;
        decode(v)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)
            .map_err(|e| RequestError::new(format!("Invalid request body: {}", e)))?;
        let v = self.send(endpoint, Method::POST, Some(&body)).await?;
        decode(v)
    }

    /// The service answers deletes with a status message; it is discarded.
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        self.send(endpoint, Method::DELETE, None).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(v: Value) -> Result<T> {
    serde_json::from_value(v).map_err(|e| RequestError::new(format!("Malformed response: {}", e)))
}
