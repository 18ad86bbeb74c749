// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "RUB";

pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Groceries",
    "Transport",
    "Entertainment",
    "Health",
    "Clothing",
    "Restaurants",
    "Communication",
    "Other",
];

pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Side job", "Gift", "Refund", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Suggested categories for input; the service accepts any label.
    pub fn suggested_categories(&self) -> &'static [&'static str] {
        match self {
            TransactionType::Income => &INCOME_CATEGORIES,
            TransactionType::Expense => &EXPENSE_CATEGORIES,
        }
    }

    pub fn default_category(&self) -> &'static str {
        self.suggested_categories()[0]
    }

    pub fn sign(&self) -> char {
        match self {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!(
                "Invalid transaction type '{}', expected income|expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub r#type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub transaction_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Record time in UTC. Unreadable values decode as `None`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_at: Option<NaiveDateTime>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(s) = raw.as_ref().and_then(serde_json::Value::as_str) else {
        return Ok(None);
    };
    Ok(s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())))
}

impl Transaction {
    /// Amount with the sign of its type, e.g. `-120.50` for an expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.r#type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Body of a create request. The service assigns `id` and, unless given,
/// `transaction_date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub r#type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<NaiveDate>,
}

impl NewTransaction {
    pub fn new(r#type: TransactionType, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            r#type,
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            category: category.into(),
            description: None,
            transaction_date: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Blank descriptions are sent as `null`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let d: String = description.into();
        self.description = if d.trim().is_empty() { None } else { Some(d) };
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.transaction_date = Some(date);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub count: u32,
}

/// Tolerance for the report invariants; the service sums floats.
pub const REPORT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    #[serde(default)]
    pub month: String, // YYYY-MM
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub savings: Decimal,
    pub expenses_by_category: Vec<CategorySummary>,
    #[serde(default)]
    pub income_by_category: Vec<CategorySummary>,
}

impl MonthlyReport {
    pub fn expense_category_sum(&self) -> Decimal {
        self.expenses_by_category.iter().map(|c| c.total).sum()
    }

    pub fn income_category_sum(&self) -> Decimal {
        self.income_by_category.iter().map(|c| c.total).sum()
    }

    /// Check the totals against each other without touching them.
    ///
    /// The income breakdown is only checked when the service sent one.
    pub fn is_consistent(&self) -> bool {
        let close = |a: Decimal, b: Decimal| (a - b).abs() <= REPORT_TOLERANCE;
        let income_ok = self.income_by_category.is_empty()
            || close(self.income_category_sum(), self.total_income);
        close(self.expense_category_sum(), self.total_expense)
            && close(self.savings, self.total_income - self.total_expense)
            && income_ok
    }
}
