use anchor_lang::prelude::*;

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED};
use crate::error::RewardError;
use crate::state::{BeneficiaryRecord, RewardConfig};
use crate::utils::{ledger, vesting};

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitRewardQuote<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, RewardConfig>,

    #[account(
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), wallet.as_ref()],
        bump = beneficiary.bump
    )]
    pub beneficiary: Account<'info, BeneficiaryRecord>,
}

impl<'info> EmitRewardQuote<'info> {
    /// Read-only snapshot of a wallet's vesting at the current clock.
    pub fn emit_reward_quote(&self, wallet: Pubkey) -> Result<()> {
        let st = &self.config;
        let record = ledger::get(&self.beneficiary).ok_or(RewardError::NotFound)?;
        let now = Clock::get()?.unix_timestamp;

        let earned = vesting::earned(record, st.term, now)?;
        let claimable = vesting::claimable(record, st.term, now)?;

        emit!(RewardQuote {
            wallet,
            whitelisted: record.is_whitelisted(),
            term: st.term,
            reward_cap: record.rewards_of(),
            reward_start_ts: record.reward_starts_at(),
            earned,
            claimable,
            total_paid: record.total_paid,
            payment_count: record.payment_count,
            total_payouts: st.total_payouts,
            total_rewards: st.total_rewards,
        });

        Ok(())
    }
}

#[event]
pub struct RewardQuote {
    pub wallet: Pubkey,
    pub whitelisted: bool,
    pub term: u64,
    pub reward_cap: u64,
    pub reward_start_ts: i64,
    pub earned: u64,
    pub claimable: u64,
    pub total_paid: u64,
    pub payment_count: u32,
    pub total_payouts: u64,
    pub total_rewards: u64,
}
