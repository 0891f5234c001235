use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::WagerError;
use crate::outcome::{Outcome, OutcomeSource};

/// Owner-controlled payout parameters, always replaced as a whole.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PayoutConfig {
    /// Subtracted from the payout ceiling so the pool keeps a reserve.
    pub min_amount: u64,

    /// Win probability is `odds_numerator / odds_denominator`.
    pub odds_numerator: u64,
    pub odds_denominator: u64,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            min_amount: DEFAULT_MIN_AMOUNT,
            odds_numerator: DEFAULT_ODDS_NUMERATOR,
            odds_denominator: DEFAULT_ODDS_DENOMINATOR,
        }
    }
}

impl PayoutConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.odds_denominator > 0, WagerError::InvalidConfig);
        require!(self.odds_numerator > 0, WagerError::InvalidConfig);
        require!(
            self.odds_numerator <= self.odds_denominator,
            WagerError::InvalidConfig
        );
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct WagerPool {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only key allowed to fund or configure the pool.
    pub owner: Pubkey,

    /// Lamports the pool has accounted for and can pay out from.
    /// Rent and reserved payouts are not part of it.
    pub total_amount: u64,

    /// Payouts held back for attempts that are placed but not settled.
    pub reserved_amount: u64,

    pub config: PayoutConfig,

    pub open_attempts: u64,
    pub total_attempts: u64,
    pub total_wins: u64,
    pub total_paid_out: u64,
}

/// A placed bet waiting for its committed randomness to be revealed.
///
/// Everything that decides the payout is fixed here when the bet is placed,
/// before anyone can know the random value.
#[account]
#[derive(InitSpace)]
pub struct PendingAttempt {
    pub bump: u8,
    pub pool: Pubkey,

    /// Staked the bet; gets the account rent back on settlement.
    pub payer: Pubkey,

    /// Receives the payout on a win.
    pub player: Pubkey,

    pub bet_amount: u64,
    pub win_amount: u64,
    pub odds_numerator: u64,
    pub odds_denominator: u64,

    pub randomness_account: Pubkey,
    pub seed_slot: u64,
}

/// Balance effect of settling one attempt, computed before anything moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub bet_amount: u64,
    /// Lamports owed to the player; zero on a loss.
    pub win_amount: u64,
    pub new_total_amount: u64,
    pub new_reserved_amount: u64,
}

impl WagerPool {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            owner,
            total_amount: 0,
            reserved_amount: 0,
            config: PayoutConfig::default(),
            open_attempts: 0,
            total_attempts: 0,
            total_wins: 0,
            total_paid_out: 0,
        }
    }

    pub fn add_funds(&mut self, caller: &Pubkey, amount: u64) -> Result<u64> {
        require_keys_eq!(*caller, self.owner, WagerError::Unauthorized);
        require!(amount > 0, WagerError::InvalidAmount);

        self.total_amount = self
            .total_amount
            .checked_add(amount)
            .ok_or(WagerError::MathOverflow)?;
        Ok(self.total_amount)
    }

    pub fn configure(&mut self, caller: &Pubkey, config: PayoutConfig) -> Result<()> {
        require_keys_eq!(*caller, self.owner, WagerError::Unauthorized);
        config.validate()?;

        self.config = config;
        Ok(())
    }

    /// `min(2 * bet, total + bet - min_amount)`, floored at zero.
    pub fn win_amount(&self, bet_amount: u64) -> u64 {
        let doubled = i128::from(bet_amount) * i128::from(MAX_PAYOUT_MULTIPLIER);
        let ceiling = i128::from(self.total_amount) + i128::from(bet_amount)
            - i128::from(self.config.min_amount);

        // Both terms are bounded by 2 * u64::MAX, so only the upper side can
        // fail to fit; a ceiling of that size is never the minimum.
        u64::try_from(doubled.min(ceiling).max(0)).unwrap_or(u64::MAX)
    }

    /// Rejects attempts the pool could not pay back at least the stake on.
    pub fn check_bet(&self, bet_amount: u64) -> Result<()> {
        require!(bet_amount > 0, WagerError::InvalidAmount);
        require!(
            self.win_amount(bet_amount) >= bet_amount,
            WagerError::PayoutBelowStake
        );
        Ok(())
    }

    /// Takes in the stake and reserves the payout a win would need.
    /// Returns the reserved win amount.
    pub fn open_attempt(&mut self, bet_amount: u64) -> Result<u64> {
        self.check_bet(bet_amount)?;
        let win_amount = self.win_amount(bet_amount);

        // win_amount <= total + bet - min_amount, so this cannot underflow.
        let total_amount = self
            .total_amount
            .checked_add(bet_amount)
            .and_then(|amount| amount.checked_sub(win_amount))
            .ok_or(WagerError::MathOverflow)?;
        let reserved_amount = self
            .reserved_amount
            .checked_add(win_amount)
            .ok_or(WagerError::MathOverflow)?;
        let open_attempts = self
            .open_attempts
            .checked_add(1)
            .ok_or(WagerError::MathOverflow)?;

        self.total_amount = total_amount;
        self.reserved_amount = reserved_amount;
        self.open_attempts = open_attempts;
        Ok(win_amount)
    }

    /// Draws the outcome of `pending` exactly once and computes the balance
    /// change without touching state.
    pub fn settle<S: OutcomeSource>(&self, pending: &PendingAttempt, source: &S) -> Result<Settlement> {
        let outcome = source.draw(pending.odds_numerator, pending.odds_denominator)?;

        let new_reserved_amount = self
            .reserved_amount
            .checked_sub(pending.win_amount)
            .ok_or(WagerError::MathOverflow)?;

        let (win_amount, new_total_amount) = match outcome {
            Outcome::Win => (pending.win_amount, self.total_amount),
            Outcome::Lose => (
                0,
                self.total_amount
                    .checked_add(pending.win_amount)
                    .ok_or(WagerError::MathOverflow)?,
            ),
        };

        Ok(Settlement {
            outcome,
            bet_amount: pending.bet_amount,
            win_amount,
            new_total_amount,
            new_reserved_amount,
        })
    }

    /// Commits a settlement once its payout has been delivered.
    pub fn apply(&mut self, settlement: &Settlement) -> Result<()> {
        let open_attempts = self
            .open_attempts
            .checked_sub(1)
            .ok_or(WagerError::MathOverflow)?;
        let total_attempts = self
            .total_attempts
            .checked_add(1)
            .ok_or(WagerError::MathOverflow)?;

        if settlement.outcome == Outcome::Win {
            self.total_wins = self
                .total_wins
                .checked_add(1)
                .ok_or(WagerError::MathOverflow)?;
            self.total_paid_out = self
                .total_paid_out
                .checked_add(settlement.win_amount)
                .ok_or(WagerError::MathOverflow)?;
        }

        self.open_attempts = open_attempts;
        self.total_attempts = total_attempts;
        self.total_amount = settlement.new_total_amount;
        self.reserved_amount = settlement.new_reserved_amount;
        Ok(())
    }
}

/// A program-owned account may only pay out lamports above its rent-exempt
/// minimum.
pub fn check_payout_covered(account_lamports: u64, rent_floor: u64, amount: u64) -> Result<()> {
    let spendable = account_lamports.saturating_sub(rent_floor);
    require!(amount <= spendable, WagerError::AttemptFailed);
    Ok(())
}
