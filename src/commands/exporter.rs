// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{Transport, TransactionFilter, transactions};
use crate::models::Transaction;
use anyhow::{Result, bail};

pub async fn handle(transport: &Transport, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(transport, sub).await,
        _ => Ok(()),
    }
}

async fn export_transactions(transport: &Transport, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = sub
        .get_one::<String>("out")
        .ok_or_else(|| anyhow::anyhow!("--out is required"))?;
    let limit = *sub.get_one::<u32>("limit").unwrap_or(&100);

    let data = transactions::list(transport, &TransactionFilter::new().limit(limit)).await?;
    match fmt.as_str() {
        "csv" => write_csv(out, &data)?,
        "json" => std::fs::write(out, serde_json::to_string_pretty(&data)?)?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", data.len(), out);
    Ok(())
}

fn write_csv(out: &str, data: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "id",
        "date",
        "type",
        "amount",
        "currency",
        "category",
        "description",
    ])?;
    for tx in data {
        wtr.write_record([
            tx.id.to_string(),
            tx.transaction_date.to_string(),
            tx.r#type.to_string(),
            tx.amount.to_string(),
            tx.currency.clone(),
            tx.category.clone(),
            tx.description.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
