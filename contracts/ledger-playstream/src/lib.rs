//! Playstream ledger: a gateway-issued token with per-account bookkeeping,
//! a content-addressed video catalog, and one-time purchase orders.
//!
//! Every public mutation is a single transaction: it validates, applies a
//! bounded set of table writes, and either commits entirely or aborts with a
//! typed error and no visible effect.

use crate::errors::LedgerError;
use crate::state::LedgerState;
use crate::types::{AccountView, OrderView, PolicyView, VideoView};
use near_sdk::json_types::U64;
use near_sdk::{env, near, AccountId, PanicOnDefault};

mod catalog;
mod errors;
mod events;
mod gateway;
mod id;
mod ledger;
mod orders;
mod state;
mod types;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct LedgerContract {
    state: LedgerState,
}

#[near]
impl LedgerContract {
    /// `gateway_id` is the only identity allowed to mint and to move funds
    /// out of the reserve; `reserve_id` names the reserve account itself.
    /// The two are deliberately independent of each other.
    #[init]
    pub fn new(gateway_id: AccountId, reserve_id: AccountId) -> Self {
        Self {
            state: LedgerState::new(gateway_id, reserve_id),
        }
    }

    #[handle_result]
    pub fn create_account(&mut self, user: AccountId) -> Result<(), LedgerError> {
        ledger::create_account(&mut self.state, &env::predecessor_account_id(), &user)
    }

    #[handle_result]
    pub fn set_node_id(&mut self, user: AccountId, node_id: String) -> Result<(), LedgerError> {
        ledger::set_node_id(
            &mut self.state,
            &env::predecessor_account_id(),
            &user,
            node_id,
        )
    }

    #[handle_result]
    pub fn publish_video(
        &mut self,
        publisher: AccountId,
        content_hash: String,
        price: u32,
        reward: u32,
    ) -> Result<U64, LedgerError> {
        catalog::publish_video(
            &mut self.state,
            &env::predecessor_account_id(),
            &publisher,
            content_hash,
            price,
            reward,
        )
    }

    #[handle_result]
    pub fn purchase_video(
        &mut self,
        buyer: AccountId,
        content_hash: String,
    ) -> Result<U64, LedgerError> {
        orders::purchase_video(
            &mut self.state,
            &env::predecessor_account_id(),
            &buyer,
            content_hash,
        )
    }

    #[handle_result]
    pub fn mint_to_reserve(&mut self, amount: U64) -> Result<(), LedgerError> {
        gateway::mint_to_reserve(&mut self.state, &env::predecessor_account_id(), amount.0)
    }

    #[handle_result]
    pub fn transfer_from_reserve(
        &mut self,
        recipient: AccountId,
        amount: U64,
    ) -> Result<(), LedgerError> {
        gateway::transfer_from_reserve(
            &mut self.state,
            &env::predecessor_account_id(),
            &recipient,
            amount.0,
        )
    }

    #[handle_result]
    pub fn redeem_to_reserve(
        &mut self,
        user: AccountId,
        amount: U64,
        memo: String,
    ) -> Result<(), LedgerError> {
        gateway::redeem_to_reserve(
            &mut self.state,
            &env::predecessor_account_id(),
            &user,
            amount.0,
            memo,
        )
    }

    // --- Views ---

    pub fn get_account(&self, account_id: AccountId) -> Option<AccountView> {
        ledger::get_account(&self.state, &account_id)
    }

    pub fn get_video(&self, video_id: U64) -> Option<VideoView> {
        catalog::get_video(&self.state, video_id.0)
    }

    pub fn get_video_by_hash(&self, content_hash: String) -> Option<VideoView> {
        catalog::get_video_by_hash(&self.state, &content_hash)
    }

    pub fn get_videos_by_publisher(&self, publisher: AccountId) -> Vec<VideoView> {
        catalog::get_videos_by_publisher(&self.state, &publisher)
    }

    pub fn get_order(&self, order_id: U64) -> Option<OrderView> {
        orders::get_order(&self.state, order_id.0)
    }

    pub fn get_orders_by_buyer(&self, buyer: AccountId) -> Vec<OrderView> {
        orders::get_orders_by_buyer(&self.state, &buyer)
    }

    pub fn get_orders_by_video(&self, video_id: U64) -> Vec<OrderView> {
        orders::get_orders_by_video(&self.state, video_id.0)
    }

    pub fn get_policy(&self) -> PolicyView {
        gateway::get_policy(&self.state)
    }

    pub fn get_total_supply(&self) -> U64 {
        self.state.total_supply.into()
    }

    pub fn version(&self) -> String {
        self.state.version.clone()
    }
}
