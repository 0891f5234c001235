use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct FundsAdded {
    pub owner: Pubkey,
    pub amount: u64,
    pub total_amount: u64,
}

#[event]
pub struct PoolConfigured {
    pub min_amount: u64,
    pub odds_numerator: u64,
    pub odds_denominator: u64,
}

#[event]
pub struct AttemptPlaced {
    pub pending_attempt: Pubkey,
    pub player: Pubkey,
    pub bet_amount: u64,
    pub win_amount: u64,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
}

/// Result of a settled attempt. Also returned to the caller.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptResolved {
    pub player: Pubkey,
    pub bet_amount: u64,
    pub win_amount: u64,
    pub won: bool,
    pub total_amount: u64,
}
