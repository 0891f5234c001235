use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::Ticket;

declare_id!("BzhhkCNvB4LG47SG8rVDzzvAUPMyjP7v1RWvj8D88pzm");

#[program]
pub mod ticket_service {
    use super::*;

    pub fn initialize_inventory(ctx: Context<InitializeInventory>, owner: Pubkey) -> Result<()> {
        process_initialize_inventory(ctx, owner)
    }

    pub fn add_ticket(ctx: Context<AddTicket>, ticket: Ticket) -> Result<()> {
        process_add_ticket(ctx, ticket)
    }

    pub fn buy_ticket(
        ctx: Context<BuyTicket>,
        buyer: Pubkey,
        ticket_id: String,
        payment: u64,
    ) -> Result<()> {
        process_buy_ticket(ctx, buyer, ticket_id, payment)
    }

    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, amount: u64) -> Result<()> {
        process_withdraw_proceeds(ctx, amount)
    }

    pub fn get_available_tickets(ctx: Context<ViewInventory>) -> Result<Vec<Ticket>> {
        process_get_available_tickets(ctx)
    }

    pub fn check_if_available(ctx: Context<ViewInventory>, ticket_id: String) -> Result<bool> {
        process_check_if_available(ctx, ticket_id)
    }

    pub fn check_owner_ticket(
        ctx: Context<ViewInventory>,
        identity: Pubkey,
        ticket_id: String,
    ) -> Result<bool> {
        process_check_owner_ticket(ctx, identity, ticket_id)
    }

    pub fn get_owner_tickets(ctx: Context<ViewInventory>, identity: Pubkey) -> Result<Vec<Ticket>> {
        process_get_owner_tickets(ctx, identity)
    }
}
