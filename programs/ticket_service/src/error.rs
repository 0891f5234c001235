use anchor_lang::prelude::*;

#[error_code]
pub enum TicketError {
    #[msg("Caller is not the owner")]
    Unauthorized,
    #[msg("Ticket does not exist")]
    TicketNotFound,
    #[msg("Ticket already exists")]
    DuplicateTicket,
    #[msg("Ticket is already sold")]
    TicketAlreadySold,
    #[msg("Payment must equal the ticket cost")]
    InsufficientPayment,
    #[msg("Ticket id must be 1-16 bytes")]
    InvalidTicketId,
    #[msg("Ticket catalog is full")]
    CatalogFull,
    #[msg("Amount must be greater than 0")]
    InvalidAmount,
    #[msg("Withdrawal exceeds collected proceeds")]
    InsufficientProceeds,
    #[msg("Math operation overflow")]
    MathOverflow,
}
