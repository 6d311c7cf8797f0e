use thiserror::Error;

/// Typed failures of the quote conversion usecase
#[derive(Debug, Error, PartialEq)]
pub enum ConvertQuoteError {
    #[error("invalid quote ID: {0}")]
    InvalidQuoteId(String),

    #[error("quote not found: {0}")]
    QuoteNotFound(String),
}
