#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("8CdQ3mV5nRwiZtbhgxq4uFUeBrjXC9FGqvsg7gdtnJ1X");

#[program]
pub mod reward_payout {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, term: u64) -> Result<()> {
        ctx.accounts.initialize(term, &ctx.bumps)
    }

    pub fn set_term(ctx: Context<SetTerm>, term: u64) -> Result<()> {
        ctx.accounts.set_term(term)
    }

    pub fn add_user_to_reward_list(
        ctx: Context<AddUserToRewardList>,
        wallet: Pubkey,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.add_user_to_reward_list(wallet, amount, &ctx.bumps)
    }

    pub fn update_reward_amount(
        ctx: Context<UpdateRewardAmount>,
        wallet: Pubkey,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.update_reward_amount(wallet, amount)
    }

    pub fn remove_from_reward_list(ctx: Context<RemoveFromRewardList>, wallet: Pubkey) -> Result<()> {
        ctx.accounts.remove_from_reward_list(wallet)
    }

    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        ctx.accounts.fund_vault(amount)
    }

    pub fn get_reward(ctx: Context<GetReward>) -> Result<()> {
        ctx.accounts.get_reward(&ctx.bumps)
    }

    pub fn emit_reward_quote(ctx: Context<EmitRewardQuote>, wallet: Pubkey) -> Result<()> {
        ctx.accounts.emit_reward_quote(wallet)
    }
}
