// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{Transport, TransactionFilter, transactions};
use crate::history::{group_by_date, sort_newest_first};
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::utils::{fmt_day, fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Context, Result, anyhow};

pub async fn handle(transport: &Transport, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(transport, sub).await?,
        Some(("list", sub)) => list(transport, sub).await?,
        Some(("show", sub)) => show(transport, sub).await?,
        Some(("rm", sub)) => rm(transport, sub).await?,
        Some(("history", sub)) => history(transport, sub).await?,
        _ => {}
    }
    Ok(())
}

fn parse_type(s: &str) -> Result<TransactionType> {
    s.parse::<TransactionType>().map_err(|e| anyhow!(e))
}

/// Validate the `tx add` arguments into a create request.
pub fn new_transaction(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let ty = parse_type(sub.get_one::<String>("type").context("--type is required")?)?;
    let amount = parse_amount(sub.get_one::<String>("amount").context("--amount is required")?)?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| ty.default_category().to_string());

    let mut input = NewTransaction::new(ty, amount, category);
    if let Some(ccy) = sub.get_one::<String>("currency") {
        input = input.with_currency(ccy.trim().to_uppercase());
    }
    if let Some(d) = sub.get_one::<String>("description") {
        input = input.with_description(d.as_str());
    }
    if let Some(d) = sub.get_one::<String>("date") {
        input = input.on_date(parse_date(d)?);
    }
    Ok(input)
}

/// Translate the `tx list` arguments into service filters.
pub fn filter(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    let mut f = TransactionFilter::new();
    if let Some(limit) = sub.get_one::<u32>("limit") {
        f = f.limit(*limit);
    }
    if let Some(skip) = sub.get_one::<u32>("skip") {
        f = f.skip(*skip);
    }
    if let Some(t) = sub.try_get_one::<String>("type").ok().flatten() {
        f = f.of_type(parse_type(t)?);
    }
    if let Some(c) = sub.try_get_one::<String>("category").ok().flatten() {
        f = f.category(c.as_str());
    }
    let from = match sub.try_get_one::<String>("from").ok().flatten() {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let to = match sub.try_get_one::<String>("to").ok().flatten() {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    Ok(f.between(from, to))
}

async fn add(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let input = new_transaction(sub)?;
    let tx = transactions::create(transport, &input).await?;
    println!(
        "Recorded #{} {}{} {} ({}) on {}",
        tx.id,
        tx.r#type.sign(),
        tx.amount,
        tx.currency,
        tx.category,
        tx.transaction_date
    );
    Ok(())
}

fn row(tx: &Transaction) -> Vec<String> {
    vec![
        tx.id.to_string(),
        tx.transaction_date.to_string(),
        tx.r#type.to_string(),
        format!("{}{}", tx.r#type.sign(), tx.amount),
        tx.currency.clone(),
        tx.category.clone(),
        tx.description.clone().unwrap_or_default(),
    ]
}

const HEADERS: [&str; 7] = ["ID", "Date", "Type", "Amount", "CCY", "Category", "Description"];

async fn list(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let data = transactions::list(transport, &filter(sub)?).await?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data.iter().map(row).collect();
        println!("{}", pretty_table(&HEADERS, rows));
    }
    Ok(())
}

async fn show(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    let tx = transactions::get(transport, id).await?;
    if !maybe_print_json(sub.get_flag("json"), false, &tx)? {
        println!("{}", pretty_table(&HEADERS, vec![row(&tx)]));
    }
    Ok(())
}

async fn rm(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    transactions::delete(transport, id)
        .await
        .with_context(|| format!("Could not delete transaction #{}", id))?;
    println!("Deleted transaction #{}", id);
    Ok(())
}

/// Render grouped history lines, one header per day.
pub fn history_lines(mut data: Vec<Transaction>) -> Vec<String> {
    sort_newest_first(&mut data);
    let grouped = group_by_date(data);
    let mut out = Vec::new();
    for group in &grouped {
        out.push(fmt_day(group.date));
        for tx in &group.transactions {
            let desc = match &tx.description {
                Some(d) => format!(" ({})", d),
                None => String::new(),
            };
            out.push(format!(
                "  #{} {}{}: {}{} {}",
                tx.id,
                tx.category,
                desc,
                tx.r#type.sign(),
                fmt_money(&tx.amount),
                tx.currency
            ));
        }
    }
    out
}

async fn history(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let limit = *sub.get_one::<u32>("limit").unwrap_or(&50);
    let data = transactions::list(transport, &TransactionFilter::new().limit(limit)).await?;
    if data.is_empty() {
        println!("No transactions yet. Add one with `finmini tx add`.");
        return Ok(());
    }
    for line in history_lines(data) {
        println!("{}", line);
    }
    Ok(())
}
