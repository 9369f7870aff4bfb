//! One-time purchases: the order book and the balance-transfer protocol.

use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::state::LedgerState;
use crate::types::{Order, OrderView};
use crate::{id, ledger};
use near_sdk::json_types::U64;
use near_sdk::{env, log, AccountId};

/// Buys one-time access to a video. Moves the price from the buyer to the
/// publisher, bumps both bookkeeping counters and the video's order count,
/// and records the order under an id derived from (buyer, content hash) —
/// so a second purchase by the same buyer is rejected, not repeated.
///
/// Every precondition, including overflow headroom on all counters, is
/// checked before the first table write; a failure at any step leaves the
/// state untouched.
pub fn purchase_video(
    state: &mut LedgerState,
    caller: &AccountId,
    buyer: &AccountId,
    content_hash: String,
) -> Result<U64, LedgerError> {
    if caller != buyer {
        return Err(LedgerError::caller_mismatch(buyer));
    }

    let video_id = id::derive(content_hash.as_bytes());
    let order_id = id::derive(&id::order_seed(buyer, &content_hash));

    let (publisher, price) = {
        let video = state
            .videos
            .get(&video_id)
            .ok_or_else(LedgerError::video_not_found)?;
        (video.publisher.clone(), video.price)
    };
    if state.orders.contains_key(&order_id) {
        return Err(LedgerError::AlreadyExists(format!(
            "Video already ordered: {}",
            content_hash
        )));
    }

    let price_u64 = u64::from(price);
    {
        let buyer_account = state.account(buyer)?;
        if buyer_account.balance < price_u64 {
            return Err(LedgerError::balance_too_low(buyer, price_u64));
        }
        buyer_account.expense.checked_add(price).ok_or_else(|| {
            LedgerError::Overflow(format!("Expense counter of {} would wrap", buyer))
        })?;
    }
    {
        let publisher_account = state.account(&publisher)?;
        // A self-purchase debits and credits the same account, netting to
        // zero; only a distinct publisher needs balance headroom.
        if &publisher != buyer {
            publisher_account
                .balance
                .checked_add(price_u64)
                .ok_or_else(|| LedgerError::balance_overflow(&publisher))?;
        }
        publisher_account.profit.checked_add(price).ok_or_else(|| {
            LedgerError::Overflow(format!("Profit counter of {} would wrap", publisher))
        })?;
    }
    {
        // Existence confirmed above.
        let video = state.videos.get(&video_id).unwrap();
        video
            .order_count
            .checked_add(1)
            .ok_or_else(|| LedgerError::Overflow("Order count would wrap".into()))?;
    }

    // All checks passed; apply the whole transfer.
    state.orders.insert(
        order_id,
        Order {
            video_id,
            buyer: buyer.clone(),
            created_at: env::block_timestamp_ms(),
        },
    );
    state.index_order(buyer, video_id, order_id);
    state.videos.get_mut(&video_id).unwrap().order_count += 1;

    ledger::debit(state, buyer, price_u64)?;
    ledger::credit(state, &publisher, price_u64)?;
    state.accounts.get_mut(buyer).unwrap().expense += price;
    state.accounts.get_mut(&publisher).unwrap().profit += price;

    log!("Ordered video {} by {}, id={}", content_hash, buyer, order_id);
    LedgerEvent::VideoPurchased {
        order_id: order_id.into(),
        video_id: video_id.into(),
        buyer: buyer.clone(),
        publisher,
        price,
    }
    .emit();
    Ok(order_id.into())
}

pub fn get_order(state: &LedgerState, order_id: u64) -> Option<OrderView> {
    state
        .orders
        .get(&order_id)
        .map(|order| view(order_id, order))
}

pub fn get_orders_by_buyer(state: &LedgerState, buyer: &AccountId) -> Vec<OrderView> {
    collect(state, state.orders_by_buyer.get(buyer))
}

pub fn get_orders_by_video(state: &LedgerState, video_id: u64) -> Vec<OrderView> {
    collect(state, state.orders_by_video.get(&video_id))
}

fn collect(state: &LedgerState, ids: Option<&Vec<u64>>) -> Vec<OrderView> {
    ids.map(|ids| {
        ids.iter()
            .filter_map(|order_id| get_order(state, *order_id))
            .collect()
    })
    .unwrap_or_default()
}

fn view(order_id: u64, order: &Order) -> OrderView {
    OrderView {
        id: order_id.into(),
        video_id: order.video_id.into(),
        buyer: order.buyer.clone(),
        created_at: order.created_at.into(),
    }
}
