use anchor_lang::prelude::*;

use crate::constants::BENEFICIARY_SEED;
use crate::state::PaymentEntry;

/// Per-wallet reward record PDA.
///
/// The account outlives removal: a removed wallet keeps its record with
/// `active == false` and `reward_cap == total_paid`, so its accounting stays
/// queryable. Re-adding the wallet starts a new lifecycle on the same account.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct BeneficiaryRecord {
    pub config: Pubkey,
    pub wallet: Pubkey,
    /// Total this lifecycle may ever receive.
    pub reward_cap: u64,
    /// Unix seconds at which the current lifecycle was added. Never rewritten within a lifecycle.
    pub reward_start_ts: i64,
    /// Paid during the current lifecycle.
    pub total_paid: u64,
    /// Paid during earlier lifecycles of this wallet.
    pub prior_paid: u64,
    /// Whitelisted flag; false once removed.
    pub active: bool,
    /// 1 for the first add, incremented on every re-add.
    pub lifecycle: u32,
    /// Number of `PaymentEntry` accounts in the current lifecycle.
    pub payment_count: u32,
    pub last_payment_ts: i64,
    /// Head of the payment hash chain of the current lifecycle.
    pub history_digest: [u8; 32],
    pub bump: u8,
}

impl BeneficiaryRecord {
    pub fn address(config: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[BENEFICIARY_SEED, config.as_ref(), wallet.as_ref()],
            &crate::ID,
        )
    }

    pub fn is_whitelisted(&self) -> bool {
        self.active
    }

    pub fn rewards_of(&self) -> u64 {
        self.reward_cap
    }

    pub fn reward_starts_at(&self) -> i64 {
        self.reward_start_ts
    }

    /// Paid across every lifecycle of this wallet.
    pub fn lifetime_paid(&self) -> u64 {
        self.total_paid.saturating_add(self.prior_paid)
    }

    /// Ordered `PaymentEntry` addresses of the current lifecycle (oldest first).
    pub fn payment_addresses(&self, record: &Pubkey) -> Vec<Pubkey> {
        (0..self.payment_count)
            .map(|index| PaymentEntry::address(record, self.lifecycle, index).0)
            .collect()
    }
}
