//! Marketplace transaction service

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Badge, StatusBadge, Transaction, TransactionStatus};

use crate::store::DataStore;

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<DataStore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub badge: Badge,
}

/// Transactions plus the completed revenue among them
#[derive(Debug, Clone, Serialize)]
pub struct TransactionList {
    pub transactions: Vec<TransactionView>,
    pub completed_total: Decimal,
}

impl TransactionService {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Newest first, optionally restricted to one status
    pub fn list(&self, status: Option<TransactionStatus>) -> TransactionList {
        let mut transactions: Vec<TransactionView> = self
            .store
            .transactions()
            .iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .map(|t| TransactionView {
                badge: t.status.badge(),
                transaction: t.clone(),
            })
            .collect();
        transactions.sort_by(|a, b| b.transaction.timestamp.cmp(&a.transaction.timestamp));

        let completed_total = transactions
            .iter()
            .filter(|view| view.transaction.status == TransactionStatus::Completed)
            .map(|view| view.transaction.amount)
            .sum();

        TransactionList {
            transactions,
            completed_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = include_str!("../../../data/seed.json");

    #[test]
    fn test_list_is_newest_first_and_filtered() {
        let service = TransactionService::new(Arc::new(DataStore::from_json(SEED).unwrap()));

        let all = service.list(None);
        assert!(all
            .transactions
            .windows(2)
            .all(|pair| pair[0].transaction.timestamp >= pair[1].transaction.timestamp));

        let failed = service.list(Some(TransactionStatus::Failed));
        assert!(failed
            .transactions
            .iter()
            .all(|view| view.transaction.status == TransactionStatus::Failed));
        assert_eq!(failed.completed_total, Decimal::ZERO);
    }
}
