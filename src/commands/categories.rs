// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{Transport, transactions};
use crate::models::TransactionType;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};

pub async fn handle(transport: &Transport, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let cats = transactions::list_categories(transport).await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let data = cats.into_iter().map(|c| vec![c]).collect();
                println!("{}", pretty_table(&["Category"], data));
            }
        }
        Some(("suggest", sub)) => {
            let types = match sub.get_one::<String>("type") {
                Some(t) => vec![t.parse::<TransactionType>().map_err(|e| anyhow!(e))?],
                None => vec![TransactionType::Expense, TransactionType::Income],
            };
            let mut data = Vec::new();
            for t in types {
                for c in t.suggested_categories() {
                    data.push(vec![t.to_string(), c.to_string()]);
                }
            }
            println!("{}", pretty_table(&["Type", "Category"], data));
        }
        _ => {}
    }
    Ok(())
}
