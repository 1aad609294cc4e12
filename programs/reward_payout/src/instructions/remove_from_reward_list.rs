use anchor_lang::prelude::*;

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED};
use crate::state::{BeneficiaryRecord, RewardConfig};
use crate::utils::admin;

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RemoveFromRewardList<'info> {
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

impl<'info> RemoveFromRewardList<'info> {
    /// Freeze the wallet at what it has been paid. The record account is kept.
    pub fn remove_from_reward_list(&mut self, wallet: Pubkey) -> Result<()> {
        let st = &mut self.config;
        admin::ensure_admin(st, &self.admin.key())?;

        let record = &mut self.beneficiary;
        let released_cap = admin::remove_beneficiary(st, record)?;

        msg!(
            "removed {} frozen at {} of {}",
            wallet,
            record.total_paid,
            released_cap
        );
        emit!(BeneficiaryRemoved {
            admin: st.admin,
            wallet,
            frozen_at: record.total_paid,
            released_cap,
        });
        Ok(())
    }
}

#[event]
pub struct BeneficiaryRemoved {
    pub admin: Pubkey,
    pub wallet: Pubkey,
    pub frozen_at: u64,
    pub released_cap: u64,
}
