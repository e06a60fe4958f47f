use serde::{Deserialize, Serialize};

use crate::storage::Record;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    pub age: i32,
}

impl Member {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self { id: None, username: username.into(), age }
    }
}

impl Record for Member {
    const ENTITY: &'static str = "member";

    fn id(&self) -> Option<u64> { self.id }

    fn assign_id(&mut self, id: u64) { self.id = Some(id); }
}
