use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED, PAYMENT_SEED, VAULT_SEED};
use crate::error::RewardError;
use crate::state::{BeneficiaryRecord, PaymentEntry, RewardConfig};
use crate::utils::payout::{self, ValueTransfer, VaultTransfer};

#[derive(Accounts)]
pub struct GetReward<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, RewardConfig>,

    #[account(
        mut,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), beneficiary.key().as_ref()],
        bump = beneficiary_record.bump,
    )]
    pub beneficiary_record: Account<'info, BeneficiaryRecord>,

    #[account(
        init,
        payer = beneficiary,
        space = 8 + PaymentEntry::INIT_SPACE,
        seeds = [
            PAYMENT_SEED,
            beneficiary_record.key().as_ref(),
            &beneficiary_record.lifecycle.to_le_bytes(),
            &beneficiary_record.payment_count.to_le_bytes(),
        ],
        bump
    )]
    pub payment: Account<'info, PaymentEntry>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump = config.vault_bump,
        constraint = vault.mint == config.mint @ RewardError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Must be the beneficiary's associated token account for the reward mint.
    #[account(
        mut,
        constraint = beneficiary_ata.mint == config.mint @ RewardError::InvalidTokenMint,
        constraint = beneficiary_ata.owner == beneficiary.key() @ RewardError::InvalidTokenAccount,
    )]
    pub beneficiary_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> GetReward<'info> {
    /// Pay the signing beneficiary everything vested and unpaid, and append the
    /// payment to its history.
    pub fn get_reward(&mut self, bumps: &GetRewardBumps) -> Result<()> {
        let signer = self.beneficiary.key();
        payout::ensure_beneficiary(&self.beneficiary_record, &signer)?;
        require_keys_eq!(
            self.beneficiary_ata.key(),
            payout::expected_ata_address(&signer, &self.config.mint),
            RewardError::InvalidRecipientAta
        );

        let now = Clock::get()?.unix_timestamp;

        // Capture AccountInfos before taking mutable borrows of the typed accounts.
        let config_ai = self.config.to_account_info();
        let record_key = self.beneficiary_record.key();
        let mut bank = VaultTransfer {
            token_program: self.token_program.to_account_info(),
            vault: self.vault.to_account_info(),
            authority: config_ai.clone(),
            authority_bump: self.config.bump,
            destination: self.beneficiary_ata.to_account_info(),
            destination_owner: self.beneficiary_ata.owner,
            vault_balance: self.vault.amount,
            destination_balance: self.beneficiary_ata.amount,
        };

        let st = &mut self.config;
        let record = &mut self.beneficiary_record;
        let payment = payout::claim(st, record, now, &mut bank)?;

        self.payment.set_inner(PaymentEntry {
            record: record_key,
            wallet: record.wallet,
            lifecycle: payment.lifecycle,
            index: payment.index,
            amount: payment.amount,
            paid_at: payment.paid_at,
            digest: payment.digest,
            bump: bumps.payment,
        });

        emit!(RewardPaid {
            wallet: record.wallet,
            amount: payment.amount,
            paid_at: now,
            total_paid: record.total_paid,
            reward_cap: record.reward_cap,
            payment_index: payment.index,
            history_digest: payment.digest,
            total_payouts: st.total_payouts,
            vault_balance: bank.balance_of(config_ai.key),
        });

        Ok(())
    }
}

#[event]
pub struct RewardPaid {
    pub wallet: Pubkey,
    pub amount: u64,
    pub paid_at: i64,
    pub total_paid: u64,
    pub reward_cap: u64,
    pub payment_index: u32,
    pub history_digest: [u8; 32],
    pub total_payouts: u64,
    pub vault_balance: u64,
}
