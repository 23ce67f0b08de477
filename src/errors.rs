use thiserror::Error;

/// Error type covering every validation rejection in the bookkeeping core.
///
/// The original application swallowed these as ephemeral UI cues; here each
/// rejected operation surfaces a structured value instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BankError {
    #[error("invalid username or pin")]
    InvalidCredentials,
    #[error("no account with username `{0}`")]
    UnknownAccount(String),
    #[error("username `{0}` is already taken")]
    UsernameTaken(String),
    #[error("pin must be exactly four digits")]
    InvalidPin,
    #[error("owner name must not be empty")]
    InvalidOwnerName,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("cannot transfer to the same account")]
    SelfTransfer,
    #[error("insufficient funds: balance is {balance:.2}, requested {requested:.2}")]
    InsufficientFunds { balance: f64, requested: f64 },
    #[error("credit score too low for a loan")]
    CreditTooLow,
    #[error("balance must be positive to qualify for a loan")]
    NonPositiveBalance,
    #[error("loan exceeds the rating cap of {cap:.2}")]
    LoanCapExceeded { cap: f64 },
    #[error("loan pool exhausted: {available:.2} remaining")]
    LoanPoolExhausted { available: f64 },
}
