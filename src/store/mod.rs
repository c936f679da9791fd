use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::models::Transaction;
use crate::storage::{Storage, TRANSACTIONS_KEY};

/// Owns the canonical, insertion-ordered transaction list and mirrors it
/// to storage after every mutation.
pub(crate) struct TransactionStore<S: Storage> {
    storage: S,
    transactions: Vec<Transaction>,
}

impl<S: Storage> TransactionStore<S> {
    /// Rehydrate from `storage`.
    ///
    /// Absent or unparsable content yields an empty store. Only a failing
    /// storage backend is reported as an error.
    pub(crate) fn load(storage: S) -> Result<Self> {
        let raw = storage
            .read(TRANSACTIONS_KEY)
            .context("Failed to read stored transactions")?;

        let mut transactions = match raw {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, "stored transactions are corrupt, starting empty");
                    Vec::new()
                }
            },
        };

        let repaired = repair(&mut transactions);
        tracing::info!(count = transactions.len(), "loaded transactions");
        let mut store = Self {
            storage,
            transactions,
        };
        if repaired {
            store.persist()?;
        }
        Ok(store)
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == Some(id))
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Append `txn`, assigning a fresh id unless it carries an unused one.
    /// Returns the record as stored.
    pub(crate) fn add(&mut self, mut txn: Transaction) -> Result<Transaction> {
        let taken = txn.id.is_some_and(|id| self.get(id).is_some());
        if taken {
            tracing::warn!(id = ?txn.id, "duplicate id on add, assigning a new one");
        }
        if txn.id.is_none() || taken {
            txn.id = Some(self.next_id());
        }
        txn.reconcile_kind();

        let mut next = self.transactions.clone();
        next.push(txn.clone());
        self.commit(next)?;
        tracing::debug!(id = ?txn.id, name = %txn.name, "added transaction");
        Ok(txn)
    }

    /// Replace the record with `id` in place. Returns `false` if no such
    /// record exists, in which case nothing is written.
    pub(crate) fn update(&mut self, id: i64, mut txn: Transaction) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "update of unknown transaction ignored");
            return Ok(false);
        };
        txn.id = Some(id);
        txn.reconcile_kind();

        let mut next = self.transactions.clone();
        next[pos] = txn;
        self.commit(next)?;
        tracing::debug!(id, "updated transaction");
        Ok(true)
    }

    /// Delete the record with `id`. Returns `false` if it was not present.
    pub(crate) fn remove(&mut self, id: i64) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "remove of unknown transaction ignored");
            return Ok(false);
        };

        let mut next = self.transactions.clone();
        next.remove(pos);
        self.commit(next)?;
        tracing::debug!(id, "removed transaction");
        Ok(true)
    }

    /// Write the current list to storage.
    pub(crate) fn persist(&mut self) -> Result<()> {
        write_list(&mut self.storage, &self.transactions)
    }

    /// Persist `next` and only then make it the in-memory list.
    fn commit(&mut self, next: Vec<Transaction>) -> Result<()> {
        write_list(&mut self.storage, &next)?;
        self.transactions = next;
        Ok(())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == Some(id))
    }

    /// Millisecond timestamp, bumped past every id already in use.
    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let preferred = match max_id(&self.transactions) {
            Some(max) if max >= now => max.checked_add(1),
            _ => Some(now),
        };
        free_id(preferred, &ids(&self.transactions))
    }
}

fn write_list<S: Storage>(storage: &mut S, list: &[Transaction]) -> Result<()> {
    let json = serde_json::to_string(list).context("Failed to serialize transactions")?;
    storage
        .write(TRANSACTIONS_KEY, &json)
        .context("Failed to persist transactions")
}

fn max_id(transactions: &[Transaction]) -> Option<i64> {
    transactions.iter().filter_map(|t| t.id).max()
}

fn ids(transactions: &[Transaction]) -> HashSet<i64> {
    transactions.iter().filter_map(|t| t.id).collect()
}

/// `preferred` if it is unused, otherwise the lowest unused positive id.
fn free_id(preferred: Option<i64>, taken: &HashSet<i64>) -> i64 {
    match preferred {
        Some(id) if !taken.contains(&id) => id,
        _ => (1..=i64::MAX).find(|id| !taken.contains(id)).unwrap_or(0),
    }
}

/// Give id-less or duplicate records a fresh id and realign `kind` with
/// the amount sign. Returns whether any record changed.
fn repair(transactions: &mut [Transaction]) -> bool {
    let mut changed = false;
    let mut taken = ids(transactions);
    let mut seen = HashSet::new();
    let mut next = match max_id(transactions) {
        Some(max) => max.checked_add(1),
        None => Some(chrono::Utc::now().timestamp_millis()),
    };

    for txn in transactions.iter_mut() {
        let fresh = match txn.id {
            Some(id) => !seen.insert(id),
            None => true,
        };
        if fresh {
            let id = free_id(next, &taken);
            tracing::warn!(name = %txn.name, id, "stored transaction without a unique id, reassigned");
            txn.id = Some(id);
            taken.insert(id);
            seen.insert(id);
            next = id.checked_add(1);
            changed = true;
        }
        let kind = txn.kind;
        txn.reconcile_kind();
        changed |= kind != txn.kind;
    }
    changed
}
