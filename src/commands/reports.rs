// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{Transport, reports};
use crate::models::{CategorySummary, MonthlyReport};
use crate::utils::{current_year_month, fmt_money, maybe_print_json, month_name, pretty_table};
use anyhow::Result;
use tracing::warn;

pub async fn handle(transport: &Transport, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(transport, sub).await?,
        _ => {}
    }
    Ok(())
}

/// Largest first. Display only; the report itself keeps the service's order.
pub fn sorted_breakdown(items: &[CategorySummary]) -> Vec<&CategorySummary> {
    let mut v: Vec<&CategorySummary> = items.iter().collect();
    v.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    v
}

pub fn summary_rows(report: &MonthlyReport) -> Vec<Vec<String>> {
    vec![
        vec!["Income".into(), fmt_money(&report.total_income)],
        vec!["Expense".into(), fmt_money(&report.total_expense)],
        vec!["Savings".into(), fmt_money(&report.savings)],
    ]
}

/// Fill a missing year or month from `today`, read once by the caller.
pub fn resolve_period(year: Option<i32>, month: Option<u32>, today: (i32, u32)) -> (i32, u32) {
    (year.unwrap_or(today.0), month.unwrap_or(today.1))
}

async fn monthly(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = resolve_period(
        sub.get_one::<i32>("year").copied(),
        sub.get_one::<u32>("month").copied(),
        current_year_month(),
    );
    let report = reports::monthly_report(transport, year, month).await?;
    if !report.is_consistent() {
        warn!(year, month, "report totals do not add up");
    }
    if maybe_print_json(sub.get_flag("json"), false, &report)? {
        return Ok(());
    }

    println!("{} {}", month_name(month), year);
    println!("{}", pretty_table(&["", "Amount"], summary_rows(&report)));
    if report.expenses_by_category.is_empty() {
        println!("No expenses this month.");
        return Ok(());
    }
    let rows = sorted_breakdown(&report.expenses_by_category)
        .into_iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.total), c.count.to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Count"], rows));
    Ok(())
}
