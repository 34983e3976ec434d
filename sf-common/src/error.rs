use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    ConfigError(String),

    #[error("sqlx error: {0}")]
    SqlxError(#[from] sqlx::Error),
}
