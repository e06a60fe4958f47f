use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::storage::Record;

pub mod item;
pub mod member;

pub use item::ItemRepository;
pub use member::MemberRepository;

/// Trait abstraction for record repositories.
/// Handlers hold `Arc<dyn Repository<R>>`, so another backend can be swapped in.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn save(&self, record: R) -> R;
    /// `None` when no record has that id.
    async fn find_by_id(&self, id: u64) -> Option<R>;
    async fn find_all(&self) -> Vec<R>;
    /// Overwrite the non-id fields of an existing record.
    async fn update(&self, id: u64, record: R) -> Result<R, ServiceError>;
    async fn clear_store(&self);
}
