use anchor_lang::prelude::*;

/// Singleton reward list state PDA.
#[account]
#[derive(InitSpace, Debug)]
pub struct RewardConfig {
    /// Authority allowed to manage the reward list and the term.
    pub admin: Pubkey,
    /// Reward token mint.
    pub mint: Pubkey,
    /// Vault token account every reward is paid from.
    pub vault: Pubkey,
    /// Release period in seconds (`reward_cap / term` vests per second). Always > 0.
    pub term: u64,
    /// Total ever transferred to beneficiaries, across all lifecycles.
    pub total_payouts: u64,
    /// Sum of `reward_cap` over active beneficiaries.
    pub total_rewards: u64,
    /// Active beneficiary count.
    pub beneficiary_count: u32,
    pub bump: u8,
    pub vault_bump: u8,
}

impl RewardConfig {
    pub fn term(&self) -> u64 {
        self.term
    }

    pub fn total_payouts(&self) -> u64 {
        self.total_payouts
    }

    pub fn total_rewards(&self) -> u64 {
        self.total_rewards
    }

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[crate::constants::CONFIG_SEED], &crate::ID)
    }
}
