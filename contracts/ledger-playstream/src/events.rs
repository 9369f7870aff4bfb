use near_sdk::json_types::U64;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum LedgerEvent {
    #[event_version("1.0.0")]
    AccountCreated { account_id: AccountId },
    #[event_version("1.0.0")]
    NodeIdSet {
        account_id: AccountId,
        node_id: String,
    },
    #[event_version("1.0.0")]
    VideoPublished {
        publisher: AccountId,
        video_id: U64,
        content_hash: String,
        price: u32,
        reward: u32,
    },
    #[event_version("1.0.0")]
    VideoPurchased {
        order_id: U64,
        video_id: U64,
        buyer: AccountId,
        publisher: AccountId,
        price: u32,
    },
    #[event_version("1.0.0")]
    ReserveMinted { amount: U64, total_supply: U64 },
    #[event_version("1.0.0")]
    ReserveTransferred { recipient: AccountId, amount: U64 },
    #[event_version("1.0.0")]
    TokensRedeemed {
        account_id: AccountId,
        amount: U64,
        memo: String,
    },
}
