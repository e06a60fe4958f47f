//! Records held by the in-memory stores.

pub mod item;
pub mod member;

pub use item::Item;
pub use member::Member;
