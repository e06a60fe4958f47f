//! Storage abstractions for service layer
//!
//! `MemoryStore` keeps records of one kind in process memory and hands out
//! identifiers from a per-store sequence.

pub mod memory_store;

pub use memory_store::MemoryStore;

/// A record that can be held by a `MemoryStore`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in errors and log fields.
    const ENTITY: &'static str;

    /// Identifier, `None` until the record has been saved.
    fn id(&self) -> Option<u64>;

    fn assign_id(&mut self, id: u64);
}
