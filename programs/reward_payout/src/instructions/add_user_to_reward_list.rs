use anchor_lang::prelude::*;

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED};
use crate::state::{BeneficiaryRecord, RewardConfig};
use crate::utils::admin;

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct AddUserToRewardList<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, RewardConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + BeneficiaryRecord::INIT_SPACE,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub beneficiary: Account<'info, BeneficiaryRecord>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddUserToRewardList<'info> {
    /// Whitelist `wallet` with a capped reward vesting from now. A previously
    /// removed wallet starts over with a fresh lifecycle on its existing record.
    pub fn add_user_to_reward_list(
        &mut self,
        wallet: Pubkey,
        amount: u64,
        bumps: &AddUserToRewardListBumps,
    ) -> Result<()> {
        admin::ensure_admin(&self.config, &self.admin.key())?;

        let now = Clock::get()?.unix_timestamp;
        let config_key = self.config.key();

        let st = &mut self.config;
        let record = &mut self.beneficiary;
        admin::add_beneficiary(st, record, config_key, wallet, amount, now, bumps.beneficiary)?;

        emit!(BeneficiaryAdded {
            wallet,
            reward_cap: amount,
            reward_start_ts: now,
            lifecycle: record.lifecycle,
            total_rewards: st.total_rewards,
        });
        Ok(())
    }
}

#[event]
pub struct BeneficiaryAdded {
    pub wallet: Pubkey,
    pub reward_cap: u64,
    pub reward_start_ts: i64,
    pub lifecycle: u32,
    pub total_rewards: u64,
}
