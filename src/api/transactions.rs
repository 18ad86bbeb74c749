// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::transport::Transport;
use crate::error::{RequestError, Result};
use crate::models::{NewTransaction, Transaction, TransactionType};
use chrono::NaiveDate;

/// Query filters for [`list`]. Unset options are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub r#type: Option<TransactionType>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Filters the service understands that have no typed field here.
    pub extra: Vec<(String, String)>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn skip(mut self, n: u32) -> Self {
        self.skip = Some(n);
        self
    }

    pub fn of_type(mut self, t: TransactionType) -> Self {
        self.r#type = Some(t);
        self
    }

    pub fn category(mut self, c: impl Into<String>) -> Self {
        self.category = Some(c.into());
        self
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.skip {
            pairs.push(("skip".to_string(), v.to_string()));
        }
        if let Some(v) = self.limit {
            pairs.push(("limit".to_string(), v.to_string()));
        }
        if let Some(v) = self.r#type {
            pairs.push(("type".to_string(), v.as_str().to_string()));
        }
        if let Some(v) = &self.category {
            pairs.push(("category".to_string(), v.clone()));
        }
        if let Some(v) = self.start_date {
            pairs.push(("start_date".to_string(), v.to_string()));
        }
        if let Some(v) = self.end_date {
            pairs.push(("end_date".to_string(), v.to_string()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }

    /// URL-encoded query string, empty when no filter is set.
    pub fn to_query(&self) -> Result<String> {
        serde_urlencoded::to_string(self.to_pairs())
            .map_err(|e| RequestError::new(format!("Invalid filter: {}", e)))
    }
}

pub async fn list(transport: &Transport, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
    let query = filter.to_query()?;
    let endpoint = if query.is_empty() {
        "/transactions/".to_string()
    } else {
        format!("/transactions/?{}", query)
    };
    transport.get(&endpoint).await
}

pub async fn get(transport: &Transport, id: i64) -> Result<Transaction> {
    transport.get(&format!("/transactions/{}", id)).await
}

/// Record a transaction. Rejecting non-positive amounts is up to the caller.
pub async fn create(transport: &Transport, input: &NewTransaction) -> Result<Transaction> {
    transport.post("/transactions/", input).await
}

pub async fn delete(transport: &Transport, id: i64) -> Result<()> {
    transport.delete(&format!("/transactions/{}", id)).await
}

/// Distinct categories the service has seen for this user.
pub async fn list_categories(transport: &Transport) -> Result<Vec<String>> {
    transport.get("/transactions/categories/list").await
}
