use std::sync::Arc;

use tokio::sync::RwLock;

use crate::id::next_id;

/// A record that can live in a [`Store`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Ordered, process-lifetime collection of records of one resource type.
///
/// Cloning a `Store` clones the handle, not the records: every clone observes
/// and mutates the same collection.
#[derive(Debug)]
pub struct Store<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a store pre-populated with `records`, kept in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Returns a snapshot of every record in store order.
    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Returns the records matching `pred`, preserving store order.
    pub async fn filter<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    pub async fn find(&self, id: &str) -> Option<T> {
        self.records.read().await.iter().find(|r| r.id() == id).cloned()
    }

    /// Appends a record built around a freshly generated identifier.
    ///
    /// The identifier is drawn while the write lock is held and redrawn until it
    /// is unused, so it is unique within the store.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        let mut records = self.records.write().await;
        let mut id = next_id();
        while records.iter().any(|r| r.id() == id) {
            log::warn!("Identifier collision on {id}, drawing a new one");
            id = next_id();
        }
        let record = build(id);
        records.push(record.clone());
        record
    }

    /// Appends a record that already carries its identifier.
    ///
    /// Returns `false` and leaves the store untouched when the identifier is
    /// already taken.
    pub async fn insert(&self, record: T) -> bool {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return false;
        }
        records.push(record);
        true
    }

    /// Mutates the record with the given identifier in place and returns the
    /// updated copy, or `None` when no such record exists.
    ///
    /// The identifier observed before `apply` runs is restored afterwards if
    /// `apply` changed it.
    pub async fn update<F>(&self, id: &str, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id() == id)?;
        let before = record.clone();
        apply(record);
        if record.id() != before.id() {
            log::error!("Update attempted to change identifier {id}; change discarded");
            *record = before;
        }
        Some(record.clone())
    }

    /// Removes the record with the given identifier only if `check` accepts it.
    ///
    /// `check` runs under the write lock, so the record cannot change between
    /// the check and the removal. Returns `Ok(None)` when no such record exists
    /// and leaves the store untouched when `check` fails.
    pub async fn remove_where<E, F>(&self, id: &str, check: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        check(&records[index])?;
        Ok(Some(records.remove(index)))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
