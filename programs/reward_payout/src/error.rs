use anchor_lang::prelude::*;

/// Custom error codes for the reward payout program.
#[error_code]
pub enum RewardError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("term must be greater than 0")]
    InvalidTerm,

    #[msg("User already exists")]
    AlreadyExists,

    #[msg("User is not on the reward list")]
    NotFound,

    #[msg("New amount cannot be lower than current payouts")]
    CapBelowPaid,

    #[msg("payout amount is 0")]
    NothingDue,

    #[msg("Reward transfer was declined by the vault")]
    TransferFailure,

    #[msg("Reward cap cannot be tracked in total rewards")]
    InvalidCap,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for beneficiary")]
    InvalidRecipientAta,

    #[msg("Math overflow")]
    MathOverflow,
}
