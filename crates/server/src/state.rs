use std::sync::Arc;

use service::domain::{Item, Member};
use service::repository::{ItemRepository, MemberRepository, Repository};

/// Shared handler state. Built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn Repository<Item>>,
    pub members: Arc<dyn Repository<Member>>,
}

impl AppState {
    pub fn new(items: Arc<dyn Repository<Item>>, members: Arc<dyn Repository<Member>>) -> Self {
        Self { items, members }
    }

    /// Fresh, empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(ItemRepository::new(), MemberRepository::new())
    }
}
