//! Token transfer primitives between external balances and contract custody.

use soroban_sdk::{token, Address, Env};

use crate::errors::VestingError;

/// Move `amount` of `mint` from `from` into contract custody.
///
/// The funder's balance is checked first so a short balance surfaces as a
/// typed `InsufficientFunds` before any state is written.
pub fn transfer_in(
    env: &Env,
    mint: &Address,
    from: &Address,
    amount: u64,
) -> Result<(), VestingError> {
    let client = token::Client::new(env, mint);
    let amount = amount as i128;
    if client.balance(from) < amount {
        return Err(VestingError::InsufficientFunds);
    }
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` of `mint` out of contract custody to `to`.
pub fn transfer_out(env: &Env, mint: &Address, to: &Address, amount: u64) {
    let client = token::Client::new(env, mint);
    client.transfer(&env.current_contract_address(), to, &(amount as i128));
}
