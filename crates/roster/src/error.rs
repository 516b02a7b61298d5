use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Unknown account scope '{0}' (expected all, evaluation or funded)")]
    InvalidScope(String),
}
