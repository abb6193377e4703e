use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Engine failed with: {0}")]
    Engine(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
