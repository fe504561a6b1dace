use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Session error: {0}")]
    Session(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] rusqlite::Error),

    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PortfolioError> for String {
    fn from(err: PortfolioError) -> Self {
        err.to_string()
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
