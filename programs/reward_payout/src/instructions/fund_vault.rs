use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::RewardError;
use crate::state::RewardConfig;

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, RewardConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump = config.vault_bump,
        constraint = vault.key() == config.vault @ RewardError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Any token account of the reward mint; the SPL program checks `funder` owns it.
    #[account(
        mut,
        constraint = source.mint == config.mint @ RewardError::InvalidTokenMint,
    )]
    pub source: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> FundVault<'info> {
    /// Top up the reward vault. Anyone may fund it; claims fail with
    /// `TransferFailure` while it is short.
    pub fn fund_vault(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, RewardError::InvalidAmount);

        let cpi = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.source.to_account_info(),
                to: self.vault.to_account_info(),
                authority: self.funder.to_account_info(),
            },
        );
        token::transfer(cpi, amount)?;
        self.vault.reload()?;

        emit!(VaultFunded {
            funder: self.funder.key(),
            amount,
            vault_balance: self.vault.amount,
        });
        Ok(())
    }
}

#[event]
pub struct VaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
