//! Linear vesting against the global term.
//! - rate = floor(reward_cap / term), per second
//! - earned = min(rate * elapsed, reward_cap), elapsed = now - reward_start_ts (>= 0)
//! - the term is read at query time, so a term change re-prices all elapsed time
//! - a removed record is frozen: earned == total_paid

use crate::error::RewardError;
use crate::state::BeneficiaryRecord;

pub fn release_rate(reward_cap: u64, term: u64) -> Result<u64, RewardError> {
    if term == 0 {
        return Err(RewardError::InvalidTerm);
    }
    Ok(reward_cap / term)
}

/// Seconds since `start_ts`, clamped at zero.
pub fn elapsed(start_ts: i64, now_ts: i64) -> u64 {
    now_ts.saturating_sub(start_ts).max(0) as u64
}

pub fn gross_earned(
    reward_cap: u64,
    term: u64,
    start_ts: i64,
    now_ts: i64,
) -> Result<u64, RewardError> {
    let rate = release_rate(reward_cap, term)? as u128;
    let vested = rate
        .checked_mul(elapsed(start_ts, now_ts) as u128)
        .ok_or(RewardError::MathOverflow)?;
    let capped = vested.min(reward_cap as u128);
    u64::try_from(capped).map_err(|_| RewardError::MathOverflow)
}

pub fn earned(record: &BeneficiaryRecord, term: u64, now_ts: i64) -> Result<u64, RewardError> {
    if !record.active {
        return Ok(record.total_paid);
    }
    gross_earned(record.reward_cap, term, record.reward_start_ts, now_ts)
}

/// Earned but not yet paid. Zero when a term increase pushed `earned` below `total_paid`.
pub fn claimable(record: &BeneficiaryRecord, term: u64, now_ts: i64) -> Result<u64, RewardError> {
    Ok(earned(record, term, now_ts)?.saturating_sub(record.total_paid))
}
