//! Vesting record state and persistent storage.
//!
//! One record per (beneficiary, mint, name) triple, keyed by the id derived in
//! `addressing`. The record is the account of truth for the schedule
//! parameters and the claimed-so-far total; `claimed_amount` never exceeds
//! `total_amount` and never decreases.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol};

const VESTING_KEY: Symbol = symbol_short!("vest");

/// Vesting schedule stored on-chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingRecord {
    /// Recipient of vested tokens; the only identity allowed to claim.
    pub beneficiary: Address,
    /// Funder; the only identity allowed to revoke.
    pub creator: Address,
    /// Token type held in escrow.
    pub mint: Address,
    /// Disambiguator allowing multiple schedules per (beneficiary, mint).
    pub name: String,
    pub total_amount: u64,
    pub claimed_amount: u64,
    /// Schedule start, also the cliff instant.
    pub start_time: u64,
    pub end_time: u64,
    /// Percent of `total_amount` unlocked the instant the schedule starts, 0-100.
    pub cliff_percentage: u32,
    /// Step size in seconds for linear release after the cliff, >= 1.
    pub payment_interval: u64,
    pub revocable: bool,
    /// Set exactly once by revoke; 0 means not revoked.
    pub revoked_at: u64,
    pub created_at: u64,
    /// 0 means never claimed.
    pub last_claimed_at: u64,
}

pub struct VestingStorage;

impl VestingStorage {
    fn key(id: &BytesN<32>) -> (Symbol, BytesN<32>) {
        (VESTING_KEY, id.clone())
    }

    pub fn store(env: &Env, id: &BytesN<32>, record: &VestingRecord) {
        env.storage().persistent().set(&Self::key(id), record);
    }

    pub fn get(env: &Env, id: &BytesN<32>) -> Option<VestingRecord> {
        env.storage().persistent().get(&Self::key(id))
    }

    pub fn update(env: &Env, id: &BytesN<32>, record: &VestingRecord) {
        env.storage().persistent().set(&Self::key(id), record);
    }

    pub fn has(env: &Env, id: &BytesN<32>) -> bool {
        env.storage().persistent().has(&Self::key(id))
    }
}
