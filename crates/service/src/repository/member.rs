use std::sync::Arc;

use crate::domain::Member;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::storage::MemoryStore;

/// In-memory repository for `Member`.
#[derive(Clone)]
pub struct MemberRepository {
    store: Arc<MemoryStore<Member>>,
}

impl MemberRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { store: MemoryStore::new() })
    }

    pub async fn save(&self, member: Member) -> Member {
        self.store.save(member).await
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Member> {
        self.store.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Vec<Member> {
        self.store.find_all().await
    }

    pub async fn update(&self, id: u64, member: Member) -> Result<Member, ServiceError> {
        self.store.update(id, member).await
    }

    /// Drops all members; ids handed out later continue the sequence.
    pub async fn clear_store(&self) {
        self.store.clear().await
    }
}

#[async_trait::async_trait]
impl Repository<Member> for MemberRepository {
    async fn save(&self, record: Member) -> Member { self.save(record).await }
    async fn find_by_id(&self, id: u64) -> Option<Member> { self.find_by_id(id).await }
    async fn find_all(&self) -> Vec<Member> { self.find_all().await }
    async fn update(&self, id: u64, record: Member) -> Result<Member, ServiceError> { self.update(id, record).await }
    async fn clear_store(&self) { self.clear_store().await }
}
