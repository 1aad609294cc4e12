use anchor_lang::prelude::*;

use crate::constants::PAYMENT_SEED;

/// One successful claim. Created once by `get_reward`, never written again.
#[account]
#[derive(InitSpace, Debug)]
pub struct PaymentEntry {
    pub record: Pubkey,
    pub wallet: Pubkey,
    pub lifecycle: u32,
    pub index: u32,
    pub amount: u64,
    pub paid_at: i64,
    /// Hash chain head after this payment.
    pub digest: [u8; 32],
    pub bump: u8,
}

impl PaymentEntry {
    pub fn address(record: &Pubkey, lifecycle: u32, index: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                PAYMENT_SEED,
                record.as_ref(),
                &lifecycle.to_le_bytes(),
                &index.to_le_bytes(),
            ],
            &crate::ID,
        )
    }
}
