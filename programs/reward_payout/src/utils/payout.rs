//! Claim coordination: vest, transfer, then commit.
//!
//! Every fallible step of a claim (vesting math, counter overflow, history
//! chaining) runs before the transfer is requested. Once the transfer has
//! succeeded the commit is plain assignment and cannot fail, and a declined
//! transfer leaves the ledger exactly as it was.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Transfer};

use crate::constants::CONFIG_SEED;
use crate::error::RewardError;
use crate::state::{BeneficiaryRecord, RewardConfig};
use crate::utils::history::{self, Payment};
use crate::utils::vesting;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferError {
    InsufficientFunds { available: u64, requested: u64 },
    WrongRecipient,
    Rejected,
}

/// Value movement out of the funded reward balance.
pub trait ValueTransfer {
    fn balance_of(&self, owner: &Pubkey) -> u64;
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> std::result::Result<(), TransferError>;
}

/// A beneficiary may only claim against its own record.
pub fn ensure_beneficiary(
    record: &BeneficiaryRecord,
    signer: &Pubkey,
) -> std::result::Result<(), RewardError> {
    if *signer != record.wallet {
        return Err(RewardError::Unauthorized);
    }
    Ok(())
}

/// Rewards are only paid into the wallet's canonical associated token account.
pub fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Pay `record` everything it has vested and not yet received.
pub fn claim<T: ValueTransfer>(
    config: &mut RewardConfig,
    record: &mut BeneficiaryRecord,
    now_ts: i64,
    bank: &mut T,
) -> std::result::Result<Payment, RewardError> {
    if !record.active {
        return Err(RewardError::NotFound);
    }

    let amount = vesting::claimable(record, config.term, now_ts)?;
    if amount == 0 {
        return Err(RewardError::NothingDue);
    }

    let total_paid = record
        .total_paid
        .checked_add(amount)
        .ok_or(RewardError::MathOverflow)?;
    let total_payouts = config
        .total_payouts
        .checked_add(amount)
        .ok_or(RewardError::MathOverflow)?;
    let payment_count = record
        .payment_count
        .checked_add(1)
        .ok_or(RewardError::MathOverflow)?;
    let payment = history::next_payment(record, amount, now_ts);

    bank.transfer(&record.wallet, amount).map_err(|e| {
        msg!("reward transfer of {} declined: {:?}", amount, e);
        RewardError::TransferFailure
    })?;

    record.total_paid = total_paid;
    record.payment_count = payment_count;
    record.last_payment_ts = now_ts;
    record.history_digest = payment.digest;
    config.total_payouts = total_payouts;

    Ok(payment)
}

/// PDA-signed SPL transfer out of the reward vault.
pub struct VaultTransfer<'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    /// Vault authority (the config PDA).
    pub authority: AccountInfo<'info>,
    pub authority_bump: u8,
    pub destination: AccountInfo<'info>,
    pub destination_owner: Pubkey,
    pub vault_balance: u64,
    pub destination_balance: u64,
}

impl<'info> ValueTransfer for VaultTransfer<'info> {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        if owner == self.authority.key {
            self.vault_balance
        } else if *owner == self.destination_owner {
            self.destination_balance
        } else {
            0
        }
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> std::result::Result<(), TransferError> {
        if *to != self.destination_owner {
            return Err(TransferError::WrongRecipient);
        }
        if self.vault_balance < amount {
            return Err(TransferError::InsufficientFunds {
                available: self.vault_balance,
                requested: amount,
            });
        }

        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[CONFIG_SEED, &bump];
        let signer_seeds = &[seeds];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
        .map_err(|e| {
            msg!("vault transfer failed: {:?}", e);
            TransferError::Rejected
        })?;

        self.vault_balance -= amount;
        self.destination_balance = self.destination_balance.saturating_add(amount);
        Ok(())
    }
}
