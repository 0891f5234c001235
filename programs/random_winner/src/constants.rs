use anchor_lang::prelude::*;

/// Seed prefix of the wager pool PDA. The owner's key completes the seeds.
pub const WAGER_POOL_SEED: &[u8] = b"wager_pool";

/// Seed prefix of a pending attempt PDA, followed by the pool and payer keys.
pub const PENDING_ATTEMPT_SEED: &[u8] = b"pending_attempt";

/// Payout threshold applied to a freshly initialized pool.
pub const DEFAULT_MIN_AMOUNT: u64 = 0;

/// Default win probability of 1/2.
pub const DEFAULT_ODDS_NUMERATOR: u64 = 1;
pub const DEFAULT_ODDS_DENOMINATOR: u64 = 2;

/// A winning bet never pays more than this multiple of the stake.
pub const MAX_PAYOUT_MULTIPLIER: u64 = 2;

/// Program that owns Switchboard on-demand randomness accounts.
#[cfg(not(feature = "devnet"))]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey =
    anchor_lang::pubkey!("SBondMDrcV3K4kxZR1HNVT7osZxAHVHgYXL5Ze1oMUv");
#[cfg(feature = "devnet")]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey =
    anchor_lang::pubkey!("Aio4gaXjXzJNVLtzwtNVmSqGKpANtXhybbkhtAC94ji2");
