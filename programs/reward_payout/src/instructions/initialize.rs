use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::state::RewardConfig;
use crate::utils::admin;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RewardConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, RewardConfig>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, term: u64, bumps: &InitializeBumps) -> Result<()> {
        let term = admin::validate_term(term)?;

        let admin_key = self.admin.key();
        let mint_key = self.mint.key();
        let vault_key = self.vault.key();

        self.config.set_inner(RewardConfig {
            admin: admin_key,
            mint: mint_key,
            vault: vault_key,
            term,
            total_payouts: 0,
            total_rewards: 0,
            beneficiary_count: 0,
            bump: bumps.config,
            vault_bump: bumps.vault,
        });

        emit!(RewardListInitialized {
            admin: admin_key,
            mint: mint_key,
            vault: vault_key,
            term,
        });

        Ok(())
    }
}

#[event]
pub struct RewardListInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub term: u64,
}
