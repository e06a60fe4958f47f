use serde::{Deserialize, Serialize};

use crate::storage::Record;

/// A product offered by the shop.
///
/// `price` and `quantity` are nullable like the form fields they are bound
/// from; no range checks are applied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl Item {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            item_name: item_name.into(),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}

impl Record for Item {
    const ENTITY: &'static str = "item";

    fn id(&self) -> Option<u64> { self.id }

    fn assign_id(&mut self, id: u64) { self.id = Some(id); }
}
