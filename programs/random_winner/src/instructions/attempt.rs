use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{PENDING_ATTEMPT_SEED, WAGER_POOL_SEED};
use crate::error::WagerError;
use crate::events::{AttemptPlaced, AttemptResolved};
use crate::outcome::{Outcome, RandomnessCommit, RevealedRandomness};
use crate::state::{check_payout_covered, PendingAttempt, WagerPool};

// =============================================================
//  TX 1 — PLACE: take the stake + record Switchboard commit
// =============================================================
//  Client bundles: [ Switchboard commitIx, attempt IX ]

/// Accounts required to place a bet against committed randomness.
#[derive(Accounts)]
pub struct Attempt<'info> {
    /// The account staking the bet.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Receives the payout on a win.
    pub player: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [WAGER_POOL_SEED, wager_pool.owner.as_ref()],
        bump = wager_pool.bump,
    )]
    pub wager_pool: Account<'info, WagerPool>,

    /// One open attempt per payer and pool.
    #[account(
        init,
        payer = payer,
        space = 8 + PendingAttempt::INIT_SPACE,
        seeds = [PENDING_ATTEMPT_SEED, wager_pool.key().as_ref(), payer.key().as_ref()],
        bump
    )]
    pub pending_attempt: Account<'info, PendingAttempt>,

    /// Switchboard on-demand randomness account.
    /// CHECK: Owner and data are validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Stakes `bet_amount` lamports and fixes everything the payout depends on.
///
/// The randomness must be committed in the previous slot and still hidden,
/// so nobody knows the outcome when the stake goes in.
pub fn process_attempt(ctx: Context<Attempt>, bet_amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    let commit = RandomnessCommit::load(
        &ctx.accounts.randomness_account_data.to_account_info(),
        &clock,
    )?;

    let wager_pool = &mut ctx.accounts.wager_pool;
    let win_amount = wager_pool.open_attempt(bet_amount)?;
    let config = wager_pool.config;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.wager_pool.to_account_info(),
            },
        ),
        bet_amount,
    )?;

    let pending = PendingAttempt {
        bump: ctx.bumps.pending_attempt,
        pool: ctx.accounts.wager_pool.key(),
        payer: ctx.accounts.payer.key(),
        player: ctx.accounts.player.key(),
        bet_amount,
        win_amount,
        odds_numerator: config.odds_numerator,
        odds_denominator: config.odds_denominator,
        randomness_account: ctx.accounts.randomness_account_data.key(),
        seed_slot: commit.seed_slot,
    };
    ctx.accounts.pending_attempt.set_inner(pending);

    msg!(
        "Attempt placed by {}: bet {}, reserved {}, seed slot {}",
        ctx.accounts.player.key(),
        bet_amount,
        win_amount,
        commit.seed_slot
    );
    emit!(AttemptPlaced {
        pending_attempt: ctx.accounts.pending_attempt.key(),
        player: ctx.accounts.player.key(),
        bet_amount,
        win_amount,
        randomness_account: ctx.accounts.randomness_account_data.key(),
        seed_slot: commit.seed_slot,
    });

    Ok(())
}

// =============================================================
//  TX 2 — SETTLE: reveal randomness + pay out or keep the stake
// =============================================================
//  Client bundles: [ Switchboard revealIx, settle_attempt IX ]

/// Accounts required to settle a placed bet. Anyone may settle, so a
/// losing bettor cannot leave the payout reserved forever.
#[derive(Accounts)]
pub struct SettleAttempt<'info> {
    pub settler: Signer<'info>,

    #[account(
        mut,
        seeds = [WAGER_POOL_SEED, wager_pool.owner.as_ref()],
        bump = wager_pool.bump,
    )]
    pub wager_pool: Account<'info, WagerPool>,

    #[account(
        mut,
        close = payer,
        seeds = [PENDING_ATTEMPT_SEED, wager_pool.key().as_ref(), pending_attempt.payer.as_ref()],
        bump = pending_attempt.bump,
        constraint = pending_attempt.pool == wager_pool.key() @ WagerError::PoolMismatch,
    )]
    pub pending_attempt: Account<'info, PendingAttempt>,

    /// Gets the pending attempt's rent back.
    #[account(mut, address = pending_attempt.payer)]
    pub payer: SystemAccount<'info>,

    #[account(mut, address = pending_attempt.player)]
    pub player: SystemAccount<'info>,

    /// CHECK: Must be the committed account; owner and data are validated
    /// manually within the handler.
    #[account(address = pending_attempt.randomness_account @ WagerError::RandomnessMismatch)]
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Draws the outcome once from the revealed randomness and settles.
pub fn process_settle_attempt(ctx: Context<SettleAttempt>) -> Result<AttemptResolved> {
    let clock = Clock::get()?;
    let pending = &ctx.accounts.pending_attempt;

    let randomness = RevealedRandomness::load(
        &ctx.accounts.randomness_account_data.to_account_info(),
        &clock,
        pending.seed_slot,
    )?;
    let settlement = ctx.accounts.wager_pool.settle(pending, &randomness)?;

    if settlement.win_amount > 0 {
        let pool_info = ctx.accounts.wager_pool.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(pool_info.data_len());
        check_payout_covered(pool_info.lamports(), rent_floor, settlement.win_amount)?;

        **pool_info.try_borrow_mut_lamports()? -= settlement.win_amount;
        **ctx.accounts.player.try_borrow_mut_lamports()? += settlement.win_amount;
    }

    let wager_pool = &mut ctx.accounts.wager_pool;
    wager_pool.apply(&settlement)?;

    let result = AttemptResolved {
        player: ctx.accounts.player.key(),
        bet_amount: settlement.bet_amount,
        win_amount: settlement.win_amount,
        won: settlement.outcome == Outcome::Win,
        total_amount: wager_pool.total_amount,
    };

    msg!(
        "Attempt by {}: bet {}, {}, paid {}, pool total {}",
        result.player,
        result.bet_amount,
        if result.won { "won" } else { "lost" },
        result.win_amount,
        result.total_amount
    );
    emit!(result.clone());

    Ok(result)
}
