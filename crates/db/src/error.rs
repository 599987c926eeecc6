/// Failure reported by a [`PersonStore`](crate::PersonStore).
///
/// Absence of a record is not an error; stores return `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Error raised by the PostgreSQL driver.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The backing store cannot serve requests.
    #[error("{0}")]
    Unavailable(String),
}
