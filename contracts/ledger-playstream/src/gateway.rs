//! Gateway bridge: privileged minting and reserve transfers, plus
//! self-service redemption back into the reserve.
//!
//! Minting and reserve transfers are gated on the configured gateway
//! identity, not on the reserve account itself: one key moves funds in and
//! out of one designated reserve. Redemption is gated on the redeeming user.

use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::ledger;
use crate::state::{GatedOp, LedgerState};
use crate::types::{PolicyView, MAX_MEMO_BYTES};
use near_sdk::{log, AccountId};

/// Issues new tokens into the reserve account. The legacy bookkeeping never
/// guarded this addition; here both the reserve balance and the tracked
/// supply refuse to wrap.
pub fn mint_to_reserve(
    state: &mut LedgerState,
    caller: &AccountId,
    amount: u64,
) -> Result<(), LedgerError> {
    assert_gated(state, caller, GatedOp::MintToReserve)?;

    let reserve_id = state.reserve_id.clone();
    let reserve = state.account(&reserve_id)?;
    reserve
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::balance_overflow(&reserve_id))?;
    let new_supply = state
        .total_supply
        .checked_add(amount)
        .ok_or_else(|| LedgerError::Overflow("Total supply would wrap".into()))?;

    ledger::credit(state, &reserve_id, amount)?;
    state.total_supply = new_supply;

    log!("Minted {} tokens to reserve {}", amount, reserve_id);
    LedgerEvent::ReserveMinted {
        amount: amount.into(),
        total_supply: new_supply.into(),
    }
    .emit();
    Ok(())
}

/// Moves issued tokens from the reserve to a user account.
pub fn transfer_from_reserve(
    state: &mut LedgerState,
    caller: &AccountId,
    recipient: &AccountId,
    amount: u64,
) -> Result<(), LedgerError> {
    assert_gated(state, caller, GatedOp::TransferFromReserve)?;

    let reserve_id = state.reserve_id.clone();
    let reserve = state.account(&reserve_id)?;
    if reserve.balance < amount {
        return Err(LedgerError::balance_too_low(&reserve_id, amount));
    }
    let recipient_account = state.account(recipient)?;
    recipient_account
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::balance_overflow(recipient))?;

    ledger::debit(state, &reserve_id, amount)?;
    ledger::credit(state, recipient, amount)?;

    log!("Transferred {} tokens from reserve to {}", amount, recipient);
    LedgerEvent::ReserveTransferred {
        recipient: recipient.clone(),
        amount: amount.into(),
    }
    .emit();
    Ok(())
}

/// Burns tokens from circulation by returning them to the reserve. The memo
/// names the external destination (chain and address) and is passed through
/// opaquely; total supply is unchanged.
pub fn redeem_to_reserve(
    state: &mut LedgerState,
    caller: &AccountId,
    user: &AccountId,
    amount: u64,
    memo: String,
) -> Result<(), LedgerError> {
    if caller != user {
        return Err(LedgerError::caller_mismatch(user));
    }
    if memo.len() > MAX_MEMO_BYTES {
        return Err(LedgerError::InvalidInput(format!(
            "Memo has more than {} bytes",
            MAX_MEMO_BYTES
        )));
    }

    let reserve_id = state.reserve_id.clone();
    let user_account = state.account(user)?;
    if user_account.balance < amount {
        return Err(LedgerError::balance_too_low(user, amount));
    }
    let reserve = state.account(&reserve_id)?;
    reserve
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::balance_overflow(&reserve_id))?;

    ledger::debit(state, user, amount)?;
    ledger::credit(state, &reserve_id, amount)?;

    log!("Redeemed {} tokens from {} to reserve", amount, user);
    LedgerEvent::TokensRedeemed {
        account_id: user.clone(),
        amount: amount.into(),
        memo,
    }
    .emit();
    Ok(())
}

pub fn get_policy(state: &LedgerState) -> PolicyView {
    PolicyView {
        mint_to_reserve: state.required_caller(GatedOp::MintToReserve).clone(),
        transfer_from_reserve: state.required_caller(GatedOp::TransferFromReserve).clone(),
        reserve_account: state.reserve_id.clone(),
    }
}

fn assert_gated(
    state: &LedgerState,
    caller: &AccountId,
    op: GatedOp,
) -> Result<(), LedgerError> {
    let required = state.required_caller(op);
    if caller != required {
        return Err(LedgerError::caller_mismatch(required));
    }
    Ok(())
}
