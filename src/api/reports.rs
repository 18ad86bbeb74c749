// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::transport::Transport;
use crate::error::Result;
use crate::models::MonthlyReport;
use chrono::{Datelike, Local};

/// Fetch the service-computed summary for one calendar month.
///
/// `year` and `month` are passed through as given; the service validates
/// them. The report is returned as decoded, totals are never recomputed.
pub async fn monthly_report(transport: &Transport, year: i32, month: u32) -> Result<MonthlyReport> {
    transport
        .get(&format!(
            "/transactions/report/monthly?year={}&month={}",
            year, month
        ))
        .await
}

pub async fn current_month_report(transport: &Transport) -> Result<MonthlyReport> {
    let today = Local::now().date_naive();
    monthly_report(transport, today.year(), today.month()).await
}
