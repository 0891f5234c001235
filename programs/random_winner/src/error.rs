use anchor_lang::prelude::*;

#[error_code]
pub enum WagerError {
    // --- access ---
    #[msg("Caller is not the owner")]
    Unauthorized,

    // --- input ---
    #[msg("Amount must be greater than 0")]
    InvalidAmount,
    #[msg("Odds must satisfy 0 < numerator <= denominator")]
    InvalidConfig,
    #[msg("Math operation overflow")]
    MathOverflow,

    // --- attempt ---
    #[msg("Pool cannot cover a payout of at least the stake")]
    PayoutBelowStake,
    #[msg("Attempt failed: pool could not transfer the payout")]
    AttemptFailed,
    #[msg("Pending attempt does not belong to this pool")]
    PoolMismatch,

    // --- randomness ---
    #[msg("Invalid or empty randomness account")]
    InvalidRandomnessAccount,
    #[msg("Randomness account does not match the committed one")]
    RandomnessMismatch,
    #[msg("Randomness must be committed in the previous slot")]
    RandomnessExpired,
    #[msg("Randomness was revealed before the attempt was placed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been revealed in this slot")]
    RandomnessNotResolved,
}
