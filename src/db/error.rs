use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("username '{0}' already exists")]
    UsernameTaken(String),
    #[error("user #{0} does not exist")]
    UnknownUser(i64),
}
