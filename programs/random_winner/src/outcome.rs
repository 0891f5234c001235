use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::SWITCHBOARD_PROGRAM_ID;
use crate::error::WagerError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Source of the single win/lose draw made when an attempt settles.
pub trait OutcomeSource {
    /// Draws once. `Win` must come up with probability
    /// `odds_numerator / odds_denominator`.
    fn draw(&self, odds_numerator: u64, odds_denominator: u64) -> Result<Outcome>;
}

/// Maps the first 8 random bytes onto `[0, odds_denominator)` by
/// multiply-shift and wins when the sample falls below the numerator.
pub fn outcome_from_bytes(random: &[u8; 32], odds_numerator: u64, odds_denominator: u64) -> Outcome {
    let mut word = [0u8; 8];
    word.copy_from_slice(&random[..8]);
    let sample = (u128::from(u64::from_le_bytes(word)) * u128::from(odds_denominator)) >> 64;

    if sample < u128::from(odds_numerator) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Only accounts written by the Switchboard program carry real randomness.
pub fn check_randomness_owner(owner: &Pubkey) -> Result<()> {
    require_keys_eq!(
        *owner,
        SWITCHBOARD_PROGRAM_ID,
        WagerError::InvalidRandomnessAccount
    );
    Ok(())
}

/// A commit is usable only in the slot right after it was made, and only
/// while its value is still hidden from everyone, the bettor included.
pub fn check_fresh_commit(seed_slot: u64, current_slot: u64, revealed: bool) -> Result<()> {
    require!(
        seed_slot == current_slot.saturating_sub(1),
        WagerError::RandomnessExpired
    );
    require!(!revealed, WagerError::RandomnessAlreadyRevealed);
    Ok(())
}

/// Switchboard randomness committed but not yet revealed.
pub struct RandomnessCommit {
    pub seed_slot: u64,
}

impl RandomnessCommit {
    pub fn load(randomness_account: &AccountInfo, clock: &Clock) -> Result<Self> {
        check_randomness_owner(randomness_account.owner)?;

        let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
            .map_err(|_| WagerError::InvalidRandomnessAccount)?;

        check_fresh_commit(
            randomness_data.seed_slot,
            clock.slot,
            randomness_data.get_value(clock).is_ok(),
        )?;

        Ok(Self {
            seed_slot: randomness_data.seed_slot,
        })
    }
}

/// Switchboard randomness revealed in the current slot for a recorded commit.
pub struct RevealedRandomness {
    pub value: [u8; 32],
}

impl RevealedRandomness {
    pub fn load(randomness_account: &AccountInfo, clock: &Clock, committed_slot: u64) -> Result<Self> {
        check_randomness_owner(randomness_account.owner)?;

        let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
            .map_err(|_| WagerError::InvalidRandomnessAccount)?;

        require!(
            randomness_data.seed_slot == committed_slot,
            WagerError::RandomnessExpired
        );

        let value = randomness_data
            .get_value(clock)
            .map_err(|_| WagerError::RandomnessNotResolved)?;

        Ok(Self { value })
    }
}

impl OutcomeSource for RevealedRandomness {
    fn draw(&self, odds_numerator: u64, odds_denominator: u64) -> Result<Outcome> {
        Ok(outcome_from_bytes(&self.value, odds_numerator, odds_denominator))
    }
}
