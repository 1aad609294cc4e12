//! Administrative mutations: whitelist management and the global term.
//! Counters on `RewardConfig` are computed up front and committed only after
//! the record-level change succeeded.

use anchor_lang::prelude::Pubkey;

use crate::constants::MIN_TERM;
use crate::error::RewardError;
use crate::state::{BeneficiaryRecord, RewardConfig};
use crate::utils::ledger;

/// Signer must be the config's admin.
pub fn ensure_admin(config: &RewardConfig, signer: &Pubkey) -> Result<(), RewardError> {
    if *signer != config.admin {
        return Err(RewardError::Unauthorized);
    }
    Ok(())
}

pub fn validate_term(term: u64) -> Result<u64, RewardError> {
    if term < MIN_TERM {
        return Err(RewardError::InvalidTerm);
    }
    Ok(term)
}

/// Replace the global term. Returns the previous term.
pub fn set_term(config: &mut RewardConfig, term: u64) -> Result<u64, RewardError> {
    let term = validate_term(term)?;
    let old = config.term;
    config.term = term;
    Ok(old)
}

pub fn add_beneficiary(
    config: &mut RewardConfig,
    record: &mut BeneficiaryRecord,
    config_key: Pubkey,
    wallet: Pubkey,
    reward_cap: u64,
    now_ts: i64,
    bump: u8,
) -> Result<(), RewardError> {
    if ledger::contains(record) {
        return Err(RewardError::AlreadyExists);
    }
    let total_rewards = config
        .total_rewards
        .checked_add(reward_cap)
        .ok_or(RewardError::InvalidCap)?;
    let beneficiary_count = config
        .beneficiary_count
        .checked_add(1)
        .ok_or(RewardError::MathOverflow)?;

    ledger::insert(record, config_key, wallet, reward_cap, now_ts, bump)?;

    config.total_rewards = total_rewards;
    config.beneficiary_count = beneficiary_count;
    Ok(())
}

/// Returns the previous cap.
pub fn update_reward_cap(
    config: &mut RewardConfig,
    record: &mut BeneficiaryRecord,
    new_cap: u64,
) -> Result<u64, RewardError> {
    ledger::check_recap(record, new_cap)?;
    let total_rewards = config
        .total_rewards
        .checked_sub(record.reward_cap)
        .ok_or(RewardError::MathOverflow)?
        .checked_add(new_cap)
        .ok_or(RewardError::InvalidCap)?;

    let old = ledger::recap(record, new_cap)?;
    config.total_rewards = total_rewards;
    Ok(old)
}

/// Freeze `record`. Returns the cap it held while active.
pub fn remove_beneficiary(
    config: &mut RewardConfig,
    record: &mut BeneficiaryRecord,
) -> Result<u64, RewardError> {
    if !ledger::contains(record) {
        return Err(RewardError::NotFound);
    }
    let total_rewards = config
        .total_rewards
        .checked_sub(record.reward_cap)
        .ok_or(RewardError::MathOverflow)?;
    let beneficiary_count = config
        .beneficiary_count
        .checked_sub(1)
        .ok_or(RewardError::MathOverflow)?;

    let old = ledger::remove(record)?;
    config.total_rewards = total_rewards;
    config.beneficiary_count = beneficiary_count;
    Ok(old)
}
