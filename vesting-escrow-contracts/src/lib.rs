#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

pub mod addressing;
pub mod errors;
mod events;
mod lifecycle;
mod payments;
pub mod schedule;
mod vault;
pub mod vesting;

#[cfg(test)]
mod test_schedule;

use errors::VestingError;
use vault::VaultStorage;
use vesting::{VestingRecord, VestingStorage};

#[contract]
pub struct VestingEscrowContract;

#[contractimpl]
impl VestingEscrowContract {
    /// Lock `total_amount` of `mint` for `beneficiary` under a cliff-plus-linear
    /// schedule. Returns the derived vesting record id.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        creator: Address,
        beneficiary: Address,
        mint: Address,
        name: String,
        total_amount: u64,
        start_time: u64,
        end_time: u64,
        cliff_percentage: u32,
        payment_interval: u64,
        revocable: bool,
    ) -> Result<BytesN<32>, VestingError> {
        lifecycle::initialize(
            &env,
            &creator,
            &beneficiary,
            &mint,
            &name,
            total_amount,
            start_time,
            end_time,
            cliff_percentage,
            payment_interval,
            revocable,
        )
    }

    /// Claim everything vested since the last claim. Signer must be the
    /// record's beneficiary. Returns the amount transferred.
    pub fn claim(
        env: Env,
        signer: Address,
        beneficiary: Address,
        mint: Address,
        name: String,
    ) -> Result<u64, VestingError> {
        lifecycle::claim(&env, &signer, &beneficiary, &mint, &name)
    }

    /// Revoke the schedule, returning the vault's remaining balance to the
    /// creator. Signer must be the record's creator. Returns the amount
    /// returned.
    pub fn revoke(
        env: Env,
        signer: Address,
        beneficiary: Address,
        mint: Address,
        name: String,
    ) -> Result<u64, VestingError> {
        lifecycle::revoke(&env, &signer, &beneficiary, &mint, &name)
    }

    /// What a claim would pay out at `now`, without mutating anything.
    pub fn estimate_claimable(
        env: Env,
        beneficiary: Address,
        mint: Address,
        name: String,
        now: u64,
    ) -> Result<u64, VestingError> {
        lifecycle::estimate_claimable(&env, &beneficiary, &mint, &name, now)
    }

    /// Return the vesting record for (beneficiary, mint, name), if present.
    pub fn get_vesting(
        env: Env,
        beneficiary: Address,
        mint: Address,
        name: String,
    ) -> Option<VestingRecord> {
        let id = addressing::derive_vesting_id(&env, &beneficiary, &mint, &name).ok()?;
        VestingStorage::get(&env, &id)
    }

    /// Return the vault balance for (beneficiary, mint, name); `None` once the
    /// vault is closed by revoke (or if the record never existed).
    pub fn get_vault_balance(
        env: Env,
        beneficiary: Address,
        mint: Address,
        name: String,
    ) -> Option<u64> {
        let id = addressing::derive_vesting_id(&env, &beneficiary, &mint, &name).ok()?;
        let vault_id = addressing::derive_vault_id(&env, &id);
        VaultStorage::get(&env, &vault_id).map(|vault| vault.balance)
    }
}
