use anchor_lang::prelude::*;

use crate::state::{Ticket, TicketInventory};

#[derive(Accounts)]
pub struct ViewInventory<'info> {
    pub ticket_inventory: Box<Account<'info, TicketInventory>>,
}

pub fn process_get_available_tickets(ctx: Context<ViewInventory>) -> Result<Vec<Ticket>> {
    Ok(ctx.accounts.ticket_inventory.available_tickets())
}

pub fn process_check_if_available(ctx: Context<ViewInventory>, ticket_id: String) -> Result<bool> {
    ctx.accounts.ticket_inventory.check_if_available(&ticket_id)
}

pub fn process_check_owner_ticket(
    ctx: Context<ViewInventory>,
    identity: Pubkey,
    ticket_id: String,
) -> Result<bool> {
    ctx.accounts
        .ticket_inventory
        .check_owner_ticket(&identity, &ticket_id)
}

// Large holdings can exceed the 1024-byte return data limit; read the
// inventory account directly in that case.
pub fn process_get_owner_tickets(ctx: Context<ViewInventory>, identity: Pubkey) -> Result<Vec<Ticket>> {
    Ok(ctx.accounts.ticket_inventory.owner_tickets(&identity))
}
