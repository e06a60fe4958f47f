use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::Record;

struct Inner<R> {
    records: BTreeMap<u64, R>,
    sequence: u64,
}

/// Generic in-memory record store.
///
/// The map and the id sequence live behind one lock, so an id is taken and
/// its record inserted atomically. Ids start at 1 and only grow; iteration
/// follows id order, which is also insertion order.
/// Shared by handing out `Arc<MemoryStore<R>>`.
pub struct MemoryStore<R> {
    inner: RwLock<Inner<R>>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(Inner { records: BTreeMap::new(), sequence: 0 }),
        })
    }

    /// Assign the next id and insert. Any id already on the record is replaced.
    pub async fn save(&self, mut record: R) -> R {
        let mut inner = self.inner.write().await;
        inner.sequence += 1;
        let id = inner.sequence;
        record.assign_id(id);
        inner.records.insert(id, record.clone());
        debug!(entity = R::ENTITY, id, "record saved");
        record
    }

    /// Get a copy of the record with the given id.
    pub async fn find_by_id(&self, id: u64) -> Option<R> {
        let inner = self.inner.read().await;
        inner.records.get(&id).cloned()
    }

    /// Snapshot of all records in id order.
    pub async fn find_all(&self) -> Vec<R> {
        let inner = self.inner.read().await;
        inner.records.values().cloned().collect()
    }

    /// Replace every field except the id of an existing record.
    pub async fn update(&self, id: u64, mut record: R) -> Result<R, ServiceError> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .records
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found(R::ENTITY, id))?;
        record.assign_id(id);
        *slot = record.clone();
        debug!(entity = R::ENTITY, id, "record updated");
        Ok(record)
    }

    /// Remove every record. The id sequence keeps counting.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        let removed = inner.records.len();
        inner.records.clear();
        debug!(entity = R::ENTITY, removed, "store cleared");
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<u64>,
        text: String,
    }

    impl Note {
        fn new(text: &str) -> Self { Self { id: None, text: text.to_string() } }
    }

    impl Record for Note {
        const ENTITY: &'static str = "note";
        fn id(&self) -> Option<u64> { self.id }
        fn assign_id(&mut self, id: u64) { self.id = Some(id); }
    }

    #[tokio::test]
    async fn memory_store_crud() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Note>::new();

        // initially empty
        assert!(store.is_empty().await);

        let a = store.save(Note::new("a")).await;
        let b = store.save(Note::new("b")).await;
        assert_eq!(a.id(), Some(1));
        assert_eq!(b.id(), Some(2));
        assert_eq!(store.len().await, 2);

        assert_eq!(store.find_by_id(1).await, Some(a.clone()));
        assert_eq!(store.find_by_id(3).await, None);

        let updated = store.update(2, Note::new("b2")).await?;
        assert_eq!(updated, Note { id: Some(2), text: "b2".into() });
        assert_eq!(store.find_all().await, vec![a, updated]);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = MemoryStore::<Note>::new();
        store.save(Note::new("a")).await;

        let err = store.update(42, Note::new("x")).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound { entity: "note", id: 42 });
        // nothing was inserted as a side effect
        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_by_id(42).await, None);
    }

    #[tokio::test]
    async fn save_replaces_caller_supplied_id() {
        let store = MemoryStore::<Note>::new();
        let saved = store.save(Note { id: Some(99), text: "a".into() }).await;
        assert_eq!(saved.id, Some(1));
        assert_eq!(store.find_by_id(99).await, None);
    }

    #[tokio::test]
    async fn update_ignores_id_on_replacement() {
        let store = MemoryStore::<Note>::new();
        store.save(Note::new("a")).await;
        let updated = store.update(1, Note { id: Some(7), text: "z".into() }).await.unwrap();
        assert_eq!(updated.id, Some(1));
        assert_eq!(store.find_by_id(7).await, None);
    }

    #[tokio::test]
    async fn find_all_is_a_snapshot() {
        let store = MemoryStore::<Note>::new();
        store.save(Note::new("a")).await;
        let before = store.find_all().await;

        store.save(Note::new("b")).await;
        store.update(1, Note::new("a2")).await.unwrap();

        assert_eq!(before, vec![Note { id: Some(1), text: "a".into() }]);
    }

    #[tokio::test]
    async fn clear_keeps_sequence() {
        let store = MemoryStore::<Note>::new();
        store.save(Note::new("a")).await;
        store.save(Note::new("b")).await;

        store.clear().await;
        assert!(store.find_all().await.is_empty());

        let c = store.save(Note::new("c")).await;
        assert_eq!(c.id, Some(3));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_get_distinct_ids() {
        let store = MemoryStore::<Note>::new();
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.save(Note::new(&i.to_string())).await }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.unwrap().id.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=64).collect::<Vec<u64>>());
    }

    proptest! {
        #[test]
        fn ids_strictly_increase(texts in proptest::collection::vec(".{0,8}", 1..40)) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let ids = rt.block_on(async {
                let store = MemoryStore::<Note>::new();
                let mut ids = Vec::new();
                for t in &texts {
                    ids.push(store.save(Note::new(t)).await.id.unwrap());
                }
                ids
            });
            prop_assert_eq!(ids[0], 1);
            for w in ids.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
            prop_assert_eq!(ids.len(), texts.len());
        }
    }
}
