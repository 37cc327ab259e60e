use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("identifier must not be blank (got {0:?})")]
    BlankId(String),
    #[error("currency code must not be blank (got {0:?})")]
    BlankCurrency(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
