// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const ENV_API_URL: &str = "FINMINI_API_URL";
pub const ENV_INIT_DATA: &str = "FINMINI_INIT_DATA";

/// Header carrying the host platform's identity token.
pub const AUTH_HEADER: &str = "X-Telegram-Init-Data";

/// Everything a [`crate::api::Transport`] needs to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub init_data: Option<String>,
    pub use_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            init_data: None,
            use_proxy: true,
        }
    }

    /// Set the identity token. An empty token is treated as no token.
    pub fn with_init_data(mut self, token: impl Into<String>) -> Self {
        let token: String = token.into();
        self.init_data = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn without_proxy(mut self) -> Self {
        self.use_proxy = false;
        self
    }

    /// Resolve from the global `--api-url` / `--init-data` arguments, which
    /// fall back to their environment variables.
    pub fn from_matches(m: &clap::ArgMatches) -> Self {
        let base = m
            .get_one::<String>("api-url")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BASE_URL);
        let cfg = Self::new(base);
        match m.get_one::<String>("init-data") {
            Some(token) => cfg.with_init_data(token.as_str()),
            None => cfg,
        }
    }
}
