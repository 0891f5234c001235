use anchor_lang::prelude::*;

use crate::state::{PayoutConfig, WagerPool};

/// Read-only access to a pool for the getter instructions.
#[derive(Accounts)]
pub struct ViewPool<'info> {
    pub wager_pool: Account<'info, WagerPool>,
}

pub fn process_get_total_amount(ctx: Context<ViewPool>) -> Result<u64> {
    Ok(ctx.accounts.wager_pool.total_amount)
}

pub fn process_get_win_amount(ctx: Context<ViewPool>, bet_amount: u64) -> Result<u64> {
    Ok(ctx.accounts.wager_pool.win_amount(bet_amount))
}

pub fn process_get_config(ctx: Context<ViewPool>) -> Result<PayoutConfig> {
    Ok(ctx.accounts.wager_pool.config)
}
