use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U64;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

/// Node ids and content hashes must be shorter than this (exclusive bound).
pub const MAX_NODE_ID_BYTES: usize = 64;
pub const MAX_CONTENT_HASH_BYTES: usize = 64;
/// Redemption memos may be at most this long (inclusive bound).
pub const MAX_MEMO_BYTES: usize = 256;

// ── Persisted records ────────────────────────────────────────────────────────
// Primary keys live in the tables, not in the records: accounts are keyed by
// AccountId, videos and orders by their derived u64 id.

#[derive(Clone, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct Account {
    pub node_id: String,
    /// Token units. Never negative by construction; all mutation is checked.
    pub balance: u64,
    /// Cumulative receipts from sales.
    pub profit: u32,
    /// Cumulative spend on purchases.
    pub expense: u32,
    pub created_at: u64,
}

#[derive(Clone, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct Video {
    pub publisher: AccountId,
    pub content_hash: String,
    /// Immutable after publication.
    pub price: u32,
    /// Informational; immutable after publication.
    pub reward: u32,
    pub order_count: u32,
    pub created_at: u64,
}

#[derive(Clone, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct Order {
    pub video_id: u64,
    pub buyer: AccountId,
    pub created_at: u64,
}

// ── JSON views ───────────────────────────────────────────────────────────────

#[derive(Clone, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct AccountView {
    pub account_id: AccountId,
    pub node_id: String,
    pub balance: U64,
    pub profit: u32,
    pub expense: u32,
    pub created_at: U64,
}

#[derive(Clone, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct VideoView {
    pub id: U64,
    pub publisher: AccountId,
    pub content_hash: String,
    pub price: u32,
    pub reward: u32,
    pub order_count: u32,
    pub created_at: U64,
}

#[derive(Clone, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct OrderView {
    pub id: U64,
    pub video_id: U64,
    pub buyer: AccountId,
    pub created_at: U64,
}

/// Audit view of the authorization policy: each gated operation together with
/// the identity allowed to call it, plus the reserve account those operations
/// act on. The gateway identity and the reserve account are independent.
#[derive(Clone, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct PolicyView {
    pub mint_to_reserve: AccountId,
    pub transfer_from_reserve: AccountId,
    pub reserve_account: AccountId,
}
