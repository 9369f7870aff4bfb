//! Typed error handling for the ledger contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(LedgerError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes that client tooling can branch on.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum LedgerError {
    /// Caller is not the identity the operation requires.
    Unauthorized(String),
    /// Referenced account, video, or order does not exist.
    NotFound(String),
    /// Duplicate primary key on create, publish, or purchase.
    AlreadyExists(String),
    /// Debit exceeds the available balance.
    InsufficientBalance(String),
    /// Invalid parameters or data from the caller.
    InvalidInput(String),
    /// Arithmetic would exceed the representable range.
    Overflow(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            Self::InsufficientBalance(msg) => write!(f, "Insufficient balance: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Overflow(msg) => write!(f, "Overflow: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl LedgerError {
    pub fn caller_mismatch(expected: &near_sdk::AccountId) -> Self {
        Self::Unauthorized(format!("Caller must be {}", expected))
    }
    pub fn account_not_found(account_id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("Account not found: {}", account_id))
    }
    pub fn video_not_found() -> Self {
        Self::NotFound("Video not found".into())
    }
    pub fn balance_too_low(account_id: &near_sdk::AccountId, amount: u64) -> Self {
        Self::InsufficientBalance(format!(
            "Balance of {} is below {}",
            account_id, amount
        ))
    }
    pub fn balance_overflow(account_id: &near_sdk::AccountId) -> Self {
        Self::Overflow(format!(
            "Balance of {} would exceed the representable range",
            account_id
        ))
    }
}
