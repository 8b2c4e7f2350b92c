//! Contract events for the three state transitions.

use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn emit_vesting_initialized(
    env: &Env,
    vesting_id: &BytesN<32>,
    beneficiary: &Address,
    creator: &Address,
    mint: &Address,
    total_amount: u64,
) {
    env.events().publish(
        (symbol_short!("vest_init"), vesting_id.clone()),
        (
            beneficiary.clone(),
            creator.clone(),
            mint.clone(),
            total_amount,
        ),
    );
}

pub fn emit_vesting_claimed(
    env: &Env,
    vesting_id: &BytesN<32>,
    beneficiary: &Address,
    amount: u64,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("vest_clm"), vesting_id.clone()),
        (beneficiary.clone(), amount, timestamp),
    );
}

pub fn emit_vesting_revoked(
    env: &Env,
    vesting_id: &BytesN<32>,
    creator: &Address,
    returned: u64,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("vest_rvk"), vesting_id.clone()),
        (creator.clone(), returned, timestamp),
    );
}
