use anchor_lang::prelude::*;

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED};
use crate::state::{BeneficiaryRecord, RewardConfig};
use crate::utils::admin;

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct UpdateRewardAmount<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, RewardConfig>,

    #[account(
        mut,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), wallet.as_ref()],
        bump = beneficiary.bump
    )]
    pub beneficiary: Account<'info, BeneficiaryRecord>,

    pub admin: Signer<'info>,
}

impl<'info> UpdateRewardAmount<'info> {
    pub fn update_reward_amount(&mut self, wallet: Pubkey, amount: u64) -> Result<()> {
        let st = &mut self.config;
        admin::ensure_admin(st, &self.admin.key())?;

        let record = &mut self.beneficiary;
        let old_cap = admin::update_reward_cap(st, record, amount)?;

        emit!(RewardAmountUpdated {
            wallet,
            old_cap,
            new_cap: amount,
            total_paid: record.total_paid,
            total_rewards: st.total_rewards,
        });
        Ok(())
    }
}

#[event]
pub struct RewardAmountUpdated {
    pub wallet: Pubkey,
    pub old_cap: u64,
    pub new_cap: u64,
    pub total_paid: u64,
    pub total_rewards: u64,
}
