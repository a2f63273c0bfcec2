use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsertError {
    #[error("connection failed: {0}")]
    Connection(sqlx::Error),
    #[error("statement prepare failed: {0}")]
    Prepare(sqlx::Error),
    #[error("insert failed: {0}")]
    Execution(sqlx::Error),
    #[error("host name unavailable: {0}")]
    Hostname(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, InsertError>;
