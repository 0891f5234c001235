use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod outcome;
pub mod state;

pub use instructions::*;
pub use events::AttemptResolved;
pub use state::PayoutConfig;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod random_winner {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, owner: Pubkey) -> Result<()> {
        process_initialize_pool(ctx, owner)
    }

    pub fn add_funds(ctx: Context<AddFunds>, amount: u64) -> Result<()> {
        process_add_funds(ctx, amount)
    }

    pub fn configure(
        ctx: Context<Configure>,
        min_amount: u64,
        odds_numerator: u64,
        odds_denominator: u64,
    ) -> Result<()> {
        process_configure(ctx, min_amount, odds_numerator, odds_denominator)
    }

    pub fn attempt(ctx: Context<Attempt>, bet_amount: u64) -> Result<()> {
        process_attempt(ctx, bet_amount)
    }

    pub fn settle_attempt(ctx: Context<SettleAttempt>) -> Result<AttemptResolved> {
        process_settle_attempt(ctx)
    }

    pub fn get_total_amount(ctx: Context<ViewPool>) -> Result<u64> {
        process_get_total_amount(ctx)
    }

    pub fn get_win_amount(ctx: Context<ViewPool>, bet_amount: u64) -> Result<u64> {
        process_get_win_amount(ctx, bet_amount)
    }

    pub fn get_config(ctx: Context<ViewPool>) -> Result<PayoutConfig> {
        process_get_config(ctx)
    }
}
