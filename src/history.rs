// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// All transactions sharing one `transaction_date`, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

impl DateGroup {
    fn total_of(&self, t: TransactionType) -> Decimal {
        self.transactions
            .iter()
            .filter(|tx| tx.r#type == t)
            .map(|tx| tx.amount)
            .sum()
    }

    pub fn income(&self) -> Decimal {
        self.total_of(TransactionType::Income)
    }

    pub fn expense(&self) -> Decimal {
        self.total_of(TransactionType::Expense)
    }
}

/// Date buckets in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedHistory {
    groups: Vec<DateGroup>,
}

impl GroupedHistory {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[Transaction]> {
        self.groups
            .iter()
            .find(|g| g.date == date)
            .map(|g| g.transactions.as_slice())
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.groups.iter().map(|g| g.date).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateGroup> {
        self.groups.iter()
    }

    pub fn into_groups(self) -> Vec<DateGroup> {
        self.groups
    }
}

impl<'a> IntoIterator for &'a GroupedHistory {
    type Item = &'a DateGroup;
    type IntoIter = std::slice::Iter<'a, DateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition transactions by their date without reordering anything.
///
/// Buckets appear in the order their date first occurs in the input. Sort
/// with [`sort_newest_first`] beforehand for chronological buckets.
pub fn group_by_date<I>(transactions: I) -> GroupedHistory
where
    I: IntoIterator<Item = Transaction>,
{
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<DateGroup> = Vec::new();
    for tx in transactions {
        let slot = *index.entry(tx.transaction_date).or_insert_with(|| {
            groups.push(DateGroup {
                date: tx.transaction_date,
                transactions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].transactions.push(tx);
    }
    GroupedHistory { groups }
}

/// Stable sort by date, newest first, matching the service's list order.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
}
