use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::WAGER_POOL_SEED;
use crate::events::{FundsAdded, PoolConfigured, PoolInitialized};
use crate::state::{PayoutConfig, WagerPool};

/// Accounts required to create a wager pool for `owner`.
/// The pool starts empty with the default payout configuration.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct InitializePool<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + WagerPool::INIT_SPACE,
        seeds = [WAGER_POOL_SEED, owner.as_ref()],
        bump
    )]
    pub wager_pool: Account<'info, WagerPool>,

    pub system_program: Program<'info, System>,
}

/// Accounts required for the owner to deposit into the pool.
#[derive(Accounts)]
pub struct AddFunds<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [WAGER_POOL_SEED, wager_pool.owner.as_ref()],
        bump = wager_pool.bump,
    )]
    pub wager_pool: Account<'info, WagerPool>,

    pub system_program: Program<'info, System>,
}

/// Accounts required for the owner to replace the payout configuration.
#[derive(Accounts)]
pub struct Configure<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [WAGER_POOL_SEED, wager_pool.owner.as_ref()],
        bump = wager_pool.bump,
    )]
    pub wager_pool: Account<'info, WagerPool>,
}

pub fn process_initialize_pool(ctx: Context<InitializePool>, owner: Pubkey) -> Result<()> {
    let wager_pool = &mut ctx.accounts.wager_pool;
    wager_pool.set_inner(WagerPool::new(owner, ctx.bumps.wager_pool));

    msg!("Wager pool created for owner {}", owner);
    emit!(PoolInitialized {
        pool: wager_pool.key(),
        owner,
    });

    Ok(())
}

/// Deposits `amount` lamports from the owner into the pool.
///
/// The owner check and the zero-amount check run before any lamports move.
pub fn process_add_funds(ctx: Context<AddFunds>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let total_amount = ctx.accounts.wager_pool.add_funds(&owner, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.wager_pool.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Added {} lamports, pool total: {}", amount, total_amount);
    emit!(FundsAdded {
        owner,
        amount,
        total_amount,
    });

    Ok(())
}

pub fn process_configure(
    ctx: Context<Configure>,
    min_amount: u64,
    odds_numerator: u64,
    odds_denominator: u64,
) -> Result<()> {
    let config = PayoutConfig {
        min_amount,
        odds_numerator,
        odds_denominator,
    };
    ctx.accounts
        .wager_pool
        .configure(&ctx.accounts.owner.key(), config)?;

    msg!(
        "Pool configured: min amount {}, odds {}/{}",
        min_amount,
        odds_numerator,
        odds_denominator
    );
    emit!(PoolConfigured {
        min_amount,
        odds_numerator,
        odds_denominator,
    });

    Ok(())
}
