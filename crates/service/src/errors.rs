use thiserror::Error;

/// Unexpected failures surfaced by the store. Expected absence is not an error;
/// see [`crate::outcome::Outcome::Absent`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
