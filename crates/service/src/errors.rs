use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: u64) -> Self { Self::NotFound { entity, id } }
}
