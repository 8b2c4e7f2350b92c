#![cfg(test)]
//! Unit tests for the pure schedule evaluator.

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

use crate::schedule::{claimable_amount, vested_amount};
use crate::vesting::VestingRecord;

fn record(
    env: &Env,
    total: u64,
    claimed: u64,
    cliff: u32,
    start: u64,
    end: u64,
    interval: u64,
) -> VestingRecord {
    VestingRecord {
        beneficiary: Address::generate(env),
        creator: Address::generate(env),
        mint: Address::generate(env),
        name: String::from_str(env, "test"),
        total_amount: total,
        claimed_amount: claimed,
        start_time: start,
        end_time: end,
        cliff_percentage: cliff,
        payment_interval: interval,
        revocable: true,
        revoked_at: 0,
        created_at: 0,
        last_claimed_at: 0,
    }
}

#[test]
fn test_zero_before_start() {
    let env = Env::default();
    let rec = record(&env, 1_000, 0, 20, 1_000, 2_000, 1);
    assert_eq!(vested_amount(&rec, 900).unwrap(), 0);
    assert_eq!(vested_amount(&rec, 999).unwrap(), 0);
}

#[test]
fn test_cliff_exactly_at_start() {
    let env = Env::default();
    let rec = record(&env, 1_000, 0, 20, 1_000, 2_000, 1);
    assert_eq!(vested_amount(&rec, 1_000).unwrap(), 200);
}

#[test]
fn test_zero_cliff_at_start() {
    let env = Env::default();
    let rec = record(&env, 1_000, 0, 0, 1_000, 2_000, 1);
    assert_eq!(vested_amount(&rec, 1_000).unwrap(), 0);
}

#[test]
fn test_full_amount_at_and_after_end() {
    let env = Env::default();
    let rec = record(&env, 1_000, 0, 20, 1_000, 2_000, 1);
    assert_eq!(vested_amount(&rec, 2_000).unwrap(), 1_000);
    assert_eq!(vested_amount(&rec, 9_999).unwrap(), 1_000);
}

#[test]
fn test_step_release_mid_schedule() {
    let env = Env::default();
    // 10% cliff = 100, 900 over 10 steps of 100s -> 90 per step.
    let rec = record(&env, 1_000, 0, 10, 1_000, 2_000, 100);
    assert_eq!(vested_amount(&rec, 1_600).unwrap(), 100 + 90 * 6);
    // Partial step does not release anything extra.
    assert_eq!(vested_amount(&rec, 1_650).unwrap(), 100 + 90 * 6);
}

#[test]
fn test_interval_longer_than_duration() {
    let env = Env::default();
    // Only one effective step; nothing past the cliff until the end.
    let rec = record(&env, 1_000, 0, 0, 1_000, 1_100, 1_000);
    assert_eq!(vested_amount(&rec, 1_050).unwrap(), 0);
    assert_eq!(vested_amount(&rec, 1_100).unwrap(), 1_000);
}

#[test]
fn test_cliff_twenty_percent_two_second_steps() {
    let env = Env::default();
    let rec = record(&env, 1_000_000, 0, 20, 1_000, 1_010, 2);
    assert_eq!(vested_amount(&rec, 1_000).unwrap(), 200_000);
    assert_eq!(vested_amount(&rec, 1_010).unwrap(), 1_000_000);
}

#[test]
fn test_cliff_thirty_percent_delayed_start() {
    let env = Env::default();
    let rec = record(&env, 1_000_000, 0, 30, 1_003, 1_013, 2);
    // Before start nothing is vested.
    assert_eq!(vested_amount(&rec, 1_000).unwrap(), 0);
    // Two seconds past start: one step of floor(700_000 / 5).
    assert_eq!(vested_amount(&rec, 1_005).unwrap(), 300_000 + 140_000);
}

#[test]
fn test_rounding_remainder_released_at_end() {
    let env = Env::default();
    // 0% cliff, 1000 over 3 steps -> 333 per step; remainder 1 held back.
    let rec = record(&env, 1_000, 0, 0, 0, 300, 100);
    assert_eq!(vested_amount(&rec, 299).unwrap(), 666);
    assert_eq!(vested_amount(&rec, 300).unwrap(), 1_000);
}

#[test]
fn test_monotone_in_time() {
    let env = Env::default();
    let rec = record(&env, 1_000_003, 0, 17, 1_000, 2_000, 77);
    let mut prev = 0;
    for now in 900..2_100 {
        let vested = vested_amount(&rec, now).unwrap();
        assert!(vested >= prev, "vested decreased at t={}", now);
        assert!(vested <= rec.total_amount);
        prev = vested;
    }
    assert_eq!(prev, rec.total_amount);
}

#[test]
fn test_zero_total_amount() {
    let env = Env::default();
    let rec = record(&env, 0, 0, 20, 1_000, 2_000, 1);
    assert_eq!(vested_amount(&rec, 1_500).unwrap(), 0);
    assert_eq!(claimable_amount(&rec, 1_500).unwrap(), 0);
}

#[test]
fn test_claimable_subtracts_claimed() {
    let env = Env::default();
    // 20% cliff = 200, 800 over 10 steps of 100s -> 80 per step.
    let rec = record(&env, 1_000, 100, 20, 1_000, 2_000, 100);
    // Vested at 1500 = 200 + 5 * 80 = 600, minus 100 claimed.
    assert_eq!(claimable_amount(&rec, 1_500).unwrap(), 500);
}

#[test]
fn test_claimable_zero_when_overclaimed() {
    let env = Env::default();
    let mut rec = record(&env, 1_000, 800, 20, 1_000, 2_000, 1);
    assert_eq!(claimable_amount(&rec, 1_500).unwrap(), 0);
    rec.claimed_amount = 1_000;
    assert_eq!(claimable_amount(&rec, 2_500).unwrap(), 0);
}

#[test]
fn test_claimable_zero_once_revoked() {
    let env = Env::default();
    let mut rec = record(&env, 1_000, 0, 20, 1_000, 2_000, 1);
    rec.revoked_at = 1_400;
    assert_eq!(claimable_amount(&rec, 1_600).unwrap(), 0);
}
