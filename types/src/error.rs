use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),
}
