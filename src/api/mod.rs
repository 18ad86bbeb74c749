// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod reports;
pub mod transactions;
pub mod transport;

pub use transactions::TransactionFilter;
pub use transport::{Method, Transport};
