//! Persisted contract state: the three primary tables, their secondary
//! indices, and the authorization policy for gateway operations.

use crate::errors::LedgerError;
use crate::types::{Account, Order, Video};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{AccountId, BorshStorageKey};

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Accounts,
    Videos,
    VideosByPublisher,
    Orders,
    OrdersByBuyer,
    OrdersByVideo,
}

/// Operations gated on a fixed identity rather than on the account they
/// mutate. The policy table below maps each to its required caller.
#[derive(Clone, Copy, Debug)]
pub enum GatedOp {
    MintToReserve,
    TransferFromReserve,
}

#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct LedgerState {
    /// From Cargo.toml.
    pub version: String,
    /// The only identity allowed to run the gated gateway operations.
    pub gateway_id: AccountId,
    /// Well-known account holding the issuance/redemption pool. An ordinary
    /// Account record; its owner creates it like anyone else.
    pub reserve_id: AccountId,
    /// Sum of all account balances. Only minting changes it: redemption moves
    /// value back to the reserve and is net zero.
    pub total_supply: u64,

    pub accounts: IterableMap<AccountId, Account>,
    pub videos: IterableMap<u64, Video>,
    pub videos_by_publisher: LookupMap<AccountId, Vec<u64>>,
    pub orders: IterableMap<u64, Order>,
    pub orders_by_buyer: LookupMap<AccountId, Vec<u64>>,
    pub orders_by_video: LookupMap<u64, Vec<u64>>,
}

impl LedgerState {
    pub fn new(gateway_id: AccountId, reserve_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            gateway_id,
            reserve_id,
            total_supply: 0,
            accounts: IterableMap::new(StorageKey::Accounts),
            videos: IterableMap::new(StorageKey::Videos),
            videos_by_publisher: LookupMap::new(StorageKey::VideosByPublisher),
            orders: IterableMap::new(StorageKey::Orders),
            orders_by_buyer: LookupMap::new(StorageKey::OrdersByBuyer),
            orders_by_video: LookupMap::new(StorageKey::OrdersByVideo),
        }
    }

    /// The authorization policy table: gated operation → required identity.
    /// Kept as an explicit mapping so the coupling is auditable instead of
    /// hard-coded inside each operation.
    pub fn required_caller(&self, op: GatedOp) -> &AccountId {
        match op {
            GatedOp::MintToReserve | GatedOp::TransferFromReserve => &self.gateway_id,
        }
    }

    pub(crate) fn account(&self, account_id: &AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    pub(crate) fn account_mut(
        &mut self,
        account_id: &AccountId,
    ) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    pub(crate) fn index_video(&mut self, publisher: &AccountId, video_id: u64) {
        match self.videos_by_publisher.get_mut(publisher) {
            Some(ids) => ids.push(video_id),
            None => {
                self.videos_by_publisher
                    .insert(publisher.clone(), vec![video_id]);
            }
        }
    }

    pub(crate) fn index_order(&mut self, buyer: &AccountId, video_id: u64, order_id: u64) {
        match self.orders_by_buyer.get_mut(buyer) {
            Some(ids) => ids.push(order_id),
            None => {
                self.orders_by_buyer.insert(buyer.clone(), vec![order_id]);
            }
        }
        match self.orders_by_video.get_mut(&video_id) {
            Some(ids) => ids.push(order_id),
            None => {
                self.orders_by_video.insert(video_id, vec![order_id]);
            }
        }
    }
}
