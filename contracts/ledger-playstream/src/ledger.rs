//! Account records: creation, node id updates, and the balance mutation
//! primitives the other modules compose.

use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::state::LedgerState;
use crate::types::{Account, AccountView, MAX_NODE_ID_BYTES};
use near_sdk::{env, log, AccountId};

pub fn create_account(
    state: &mut LedgerState,
    caller: &AccountId,
    user: &AccountId,
) -> Result<(), LedgerError> {
    if caller != user {
        return Err(LedgerError::caller_mismatch(user));
    }
    if state.accounts.contains_key(user) {
        return Err(LedgerError::AlreadyExists(format!(
            "Account already exists: {}",
            user
        )));
    }

    state.accounts.insert(
        user.clone(),
        Account {
            node_id: String::new(),
            balance: 0,
            profit: 0,
            expense: 0,
            created_at: env::block_timestamp_ms(),
        },
    );

    log!("Created account {}", user);
    LedgerEvent::AccountCreated {
        account_id: user.clone(),
    }
    .emit();
    Ok(())
}

pub fn set_node_id(
    state: &mut LedgerState,
    caller: &AccountId,
    user: &AccountId,
    node_id: String,
) -> Result<(), LedgerError> {
    if caller != user {
        return Err(LedgerError::caller_mismatch(user));
    }
    if node_id.len() >= MAX_NODE_ID_BYTES {
        return Err(LedgerError::InvalidInput(format!(
            "Node id must be shorter than {} bytes",
            MAX_NODE_ID_BYTES
        )));
    }

    let account = state.account_mut(user)?;
    account.node_id = node_id.clone();

    LedgerEvent::NodeIdSet {
        account_id: user.clone(),
        node_id,
    }
    .emit();
    Ok(())
}

/// Subtracts from a balance. Internal primitive: operations composing several
/// debits and credits validate every precondition first, so a failure here
/// aborts the invocation before anything else has been touched.
pub(crate) fn debit(
    state: &mut LedgerState,
    account_id: &AccountId,
    amount: u64,
) -> Result<(), LedgerError> {
    let account = state.account_mut(account_id)?;
    if account.balance < amount {
        return Err(LedgerError::balance_too_low(account_id, amount));
    }
    account.balance -= amount;
    Ok(())
}

/// Adds to a balance, refusing to wrap.
pub(crate) fn credit(
    state: &mut LedgerState,
    account_id: &AccountId,
    amount: u64,
) -> Result<(), LedgerError> {
    let account = state.account_mut(account_id)?;
    account.balance = account
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::balance_overflow(account_id))?;
    Ok(())
}

pub fn get_account(state: &LedgerState, account_id: &AccountId) -> Option<AccountView> {
    state.accounts.get(account_id).map(|account| AccountView {
        account_id: account_id.clone(),
        node_id: account.node_id.clone(),
        balance: account.balance.into(),
        profit: account.profit,
        expense: account.expense,
        created_at: account.created_at.into(),
    })
}
