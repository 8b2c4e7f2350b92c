//! Deterministic identity derivation for vesting records and their vaults.
//!
//! A record id is a function of (beneficiary, mint, name), so the same triple
//! always resolves to the same record and distinct names give independent
//! schedules for the same (beneficiary, mint) pair. The vault id is derived
//! from the record id alone, making the vault a strict sub-resource of its
//! record.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use crate::errors::VestingError;

/// Maximum length of a schedule name, in bytes.
pub const MAX_NAME_LEN: u32 = 32;

const VESTING_DOMAIN: &[u8] = b"vesting";
const VAULT_DOMAIN: &[u8] = b"vault";

/// Derive the storage id for the vesting record of (beneficiary, mint, name).
pub fn derive_vesting_id(
    env: &Env,
    beneficiary: &Address,
    mint: &Address,
    name: &String,
) -> Result<BytesN<32>, VestingError> {
    if name.len() > MAX_NAME_LEN {
        return Err(VestingError::NameTooLong);
    }

    let mut preimage = Bytes::from_slice(env, VESTING_DOMAIN);
    preimage.append(&beneficiary.clone().to_xdr(env));
    preimage.append(&mint.clone().to_xdr(env));
    preimage.append(&name.clone().to_xdr(env));

    Ok(env.crypto().sha256(&preimage).to_bytes())
}

/// Derive the vault id owned by the record at `vesting_id`.
pub fn derive_vault_id(env: &Env, vesting_id: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, VAULT_DOMAIN);
    preimage.append(&Bytes::from_array(env, &vesting_id.to_array()));

    env.crypto().sha256(&preimage).to_bytes()
}
