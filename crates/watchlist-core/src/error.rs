use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Insights error: {0}")]
    Insights(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
