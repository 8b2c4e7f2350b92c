//! Pure schedule evaluation: cliff-plus-linear release in fixed steps.

use crate::errors::VestingError;
use crate::vesting::VestingRecord;

/// Cumulative amount vested at `now`, independent of what has been claimed.
///
/// Floors at every stage, so a beneficiary never receives more than
/// mathematically vested; rounding remainders stay in the vault until
/// `now >= end_time`, at which point the full `total_amount` is released.
/// Monotone non-decreasing in `now` for fixed record parameters.
pub fn vested_amount(record: &VestingRecord, now: u64) -> Result<u64, VestingError> {
    if now < record.start_time {
        return Ok(0);
    }
    if now >= record.end_time {
        return Ok(record.total_amount);
    }

    // cliff_percentage <= 100, so the product fits in u128 and cliff <= total.
    let cliff_amount =
        ((record.total_amount as u128) * (record.cliff_percentage as u128) / 100) as u64;
    let remaining = record
        .total_amount
        .checked_sub(cliff_amount)
        .ok_or(VestingError::MathOverflow)?;

    let duration = record.end_time - record.start_time;
    let interval = record.payment_interval.max(1);
    // A duration shorter than one interval still counts as a single step.
    let total_steps = (duration / interval).max(1);
    let elapsed = now - record.start_time;
    let steps_elapsed = (elapsed / interval).min(total_steps);

    let per_step = remaining / total_steps;
    let linear = per_step
        .checked_mul(steps_elapsed)
        .ok_or(VestingError::MathOverflow)?;

    cliff_amount
        .checked_add(linear)
        .ok_or(VestingError::MathOverflow)
}

/// Amount claimable at `now`: vested minus already claimed, 0 once revoked.
pub fn claimable_amount(record: &VestingRecord, now: u64) -> Result<u64, VestingError> {
    if record.revoked_at > 0 {
        return Ok(0);
    }
    let vested = vested_amount(record, now)?;
    Ok(vested.saturating_sub(record.claimed_amount))
}
