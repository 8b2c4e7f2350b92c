//! State transitions for a vesting record: initialize, claim, revoke, plus the
//! read-only claimable estimate.
//!
//! Each transition validates everything before touching funds or storage, so a
//! failed precondition leaves no partial state. Token movement happens before
//! the state writes within the same invocation; the host applies the whole
//! invocation atomically.

use soroban_sdk::{Address, BytesN, Env, String};

use crate::addressing::{derive_vault_id, derive_vesting_id};
use crate::errors::VestingError;
use crate::events::{emit_vesting_claimed, emit_vesting_initialized, emit_vesting_revoked};
use crate::payments::{transfer_in, transfer_out};
use crate::schedule;
use crate::vault::{Vault, VaultStorage};
use crate::vesting::{VestingRecord, VestingStorage};

/// Create a vesting record and its vault, locking `total_amount` of `mint`
/// from the creator's balance.
///
/// # Errors
/// * `InvalidSchedule` - `start_time >= end_time` or `cliff_percentage > 100`
/// * `NameTooLong` - name exceeds the addressing bound
/// * `RecordAlreadyExists` - a record for (beneficiary, mint, name) exists
/// * `InsufficientFunds` - creator holds less than `total_amount`
#[allow(clippy::too_many_arguments)]
pub fn initialize(
    env: &Env,
    creator: &Address,
    beneficiary: &Address,
    mint: &Address,
    name: &String,
    total_amount: u64,
    start_time: u64,
    end_time: u64,
    cliff_percentage: u32,
    payment_interval: u64,
    revocable: bool,
) -> Result<BytesN<32>, VestingError> {
    creator.require_auth();

    // Zero-length steps are disallowed; a caller-supplied 0 means "no
    // granularity preference" and is normalized to one-second steps.
    let payment_interval = payment_interval.max(1);

    if end_time <= start_time || cliff_percentage > 100 {
        return Err(VestingError::InvalidSchedule);
    }

    let vesting_id = derive_vesting_id(env, beneficiary, mint, name)?;
    if VestingStorage::has(env, &vesting_id) {
        return Err(VestingError::RecordAlreadyExists);
    }
    let vault_id = derive_vault_id(env, &vesting_id);

    // Move tokens into contract custody before any state is written.
    transfer_in(env, mint, creator, total_amount)?;

    let now = env.ledger().timestamp();
    let record = VestingRecord {
        beneficiary: beneficiary.clone(),
        creator: creator.clone(),
        mint: mint.clone(),
        name: name.clone(),
        total_amount,
        claimed_amount: 0,
        start_time,
        end_time,
        cliff_percentage,
        payment_interval,
        revocable,
        revoked_at: 0,
        created_at: now,
        last_claimed_at: 0,
    };
    VestingStorage::store(env, &vesting_id, &record);

    let vault = Vault {
        vault_id,
        vesting_id: vesting_id.clone(),
        token: mint.clone(),
        balance: total_amount,
    };
    VaultStorage::store(env, &vault);

    emit_vesting_initialized(env, &vesting_id, beneficiary, creator, mint, total_amount);

    Ok(vesting_id)
}

/// Release everything vested since the last claim to the beneficiary.
///
/// The record is located by (beneficiary, mint, name); the signer must be the
/// record's beneficiary, with no delegation.
///
/// # Errors
/// * `RecordNotFound`, `Unauthorized`, `AlreadyRevoked`, `NothingToClaim`
pub fn claim(
    env: &Env,
    signer: &Address,
    beneficiary: &Address,
    mint: &Address,
    name: &String,
) -> Result<u64, VestingError> {
    signer.require_auth();

    let vesting_id = derive_vesting_id(env, beneficiary, mint, name)?;
    let mut record =
        VestingStorage::get(env, &vesting_id).ok_or(VestingError::RecordNotFound)?;

    if &record.beneficiary != signer {
        return Err(VestingError::Unauthorized);
    }
    if record.revoked_at > 0 {
        return Err(VestingError::AlreadyRevoked);
    }

    let now = env.ledger().timestamp();
    let vested = schedule::vested_amount(&record, now)?;
    let claimable = vested.saturating_sub(record.claimed_amount);
    if claimable == 0 {
        return Err(VestingError::NothingToClaim);
    }

    let vault_id = derive_vault_id(env, &vesting_id);
    let mut vault = VaultStorage::get(env, &vault_id).ok_or(VestingError::RecordNotFound)?;
    vault.debit(claimable)?;

    transfer_out(env, &vault.token, &record.beneficiary, claimable);

    record.claimed_amount = vested;
    record.last_claimed_at = now;
    VestingStorage::update(env, &vesting_id, &record);
    VaultStorage::update(env, &vault);

    emit_vesting_claimed(env, &vesting_id, &record.beneficiary, claimable, now);

    Ok(claimable)
}

/// Return the vault's entire remaining balance to the creator and close the
/// vault. Vested-but-unclaimed tokens are forfeited along with the rest.
///
/// # Errors
/// * `RecordNotFound`, `Unauthorized`, `NotRevocable`, `AlreadyRevoked`
pub fn revoke(
    env: &Env,
    signer: &Address,
    beneficiary: &Address,
    mint: &Address,
    name: &String,
) -> Result<u64, VestingError> {
    signer.require_auth();

    let vesting_id = derive_vesting_id(env, beneficiary, mint, name)?;
    let mut record =
        VestingStorage::get(env, &vesting_id).ok_or(VestingError::RecordNotFound)?;

    if &record.creator != signer {
        return Err(VestingError::Unauthorized);
    }
    if !record.revocable {
        return Err(VestingError::NotRevocable);
    }
    if record.revoked_at > 0 {
        return Err(VestingError::AlreadyRevoked);
    }

    let vault_id = derive_vault_id(env, &vesting_id);
    let vault = VaultStorage::get(env, &vault_id).ok_or(VestingError::RecordNotFound)?;
    let returned = vault.balance;

    if returned > 0 {
        transfer_out(env, &vault.token, &record.creator, returned);
    }
    VaultStorage::remove(env, &vault_id);

    let now = env.ledger().timestamp();
    record.revoked_at = now;
    VestingStorage::update(env, &vesting_id, &record);

    emit_vesting_revoked(env, &vesting_id, &record.creator, returned, now);

    Ok(returned)
}

/// Read-only view: what a claim would pay out at `now`. No auth, no mutation.
/// Reports 0 for revoked records.
pub fn estimate_claimable(
    env: &Env,
    beneficiary: &Address,
    mint: &Address,
    name: &String,
    now: u64,
) -> Result<u64, VestingError> {
    let vesting_id = derive_vesting_id(env, beneficiary, mint, name)?;
    let record = VestingStorage::get(env, &vesting_id).ok_or(VestingError::RecordNotFound)?;
    schedule::claimable_amount(&record, now)
}
