use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::RewardConfig;
use crate::utils::admin;

#[derive(Accounts)]
pub struct SetTerm<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, RewardConfig>,

    pub admin: Signer<'info>,
}

impl<'info> SetTerm<'info> {
    /// Applies to every beneficiary's whole elapsed time from the next query on.
    pub fn set_term(&mut self, term: u64) -> Result<()> {
        let st = &mut self.config;
        admin::ensure_admin(st, &self.admin.key())?;
        let old_term = admin::set_term(st, term)?;

        msg!("term changed {} -> {}", old_term, term);
        emit!(TermChanged {
            admin: st.admin,
            old_term,
            new_term: term,
        });
        Ok(())
    }
}

#[event]
pub struct TermChanged {
    pub admin: Pubkey,
    pub old_term: u64,
    pub new_term: u64,
}
