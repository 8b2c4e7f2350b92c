//! Escrow vault: the custody balance for one vesting record.
//!
//! The vault has no independent owner; its id derives from the record id and
//! only the lifecycle transitions move its balance. Outside revoke, the
//! recorded balance equals `total_amount - claimed_amount`; revoke drains and
//! removes the vault entirely.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::errors::VestingError;

const VAULT_KEY: Symbol = symbol_short!("vault");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vault {
    pub vault_id: BytesN<32>,
    pub vesting_id: BytesN<32>,
    pub token: Address,
    pub balance: u64,
}

impl Vault {
    /// Reduce the recorded balance; the matching token payout happens in the
    /// same transition.
    pub fn debit(&mut self, amount: u64) -> Result<(), VestingError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VestingError::InsufficientFunds)?;
        Ok(())
    }
}

pub struct VaultStorage;

impl VaultStorage {
    fn key(id: &BytesN<32>) -> (Symbol, BytesN<32>) {
        (VAULT_KEY, id.clone())
    }

    pub fn store(env: &Env, vault: &Vault) {
        env.storage().persistent().set(&Self::key(&vault.vault_id), vault);
    }

    pub fn get(env: &Env, id: &BytesN<32>) -> Option<Vault> {
        env.storage().persistent().get(&Self::key(id))
    }

    pub fn update(env: &Env, vault: &Vault) {
        env.storage().persistent().set(&Self::key(&vault.vault_id), vault);
    }

    /// Close the vault after revoke; the record keyed by it is terminal.
    pub fn remove(env: &Env, id: &BytesN<32>) {
        env.storage().persistent().remove(&Self::key(id));
    }
}
