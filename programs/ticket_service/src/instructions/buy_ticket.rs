use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::TICKET_INVENTORY_SEED;
use crate::events::TicketPurchased;
use crate::state::TicketInventory;

/// Accounts required to buy a ticket.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the ticket.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_INVENTORY_SEED, ticket_inventory.owner.as_ref()],
        bump = ticket_inventory.bump,
    )]
    pub ticket_inventory: Box<Account<'info, TicketInventory>>,

    pub system_program: Program<'info, System>,
}

/// Buys `ticket_id` on behalf of `buyer`.
///
/// Steps performed:
/// 1. Check the ticket exists, is unsold, and `payment` equals its cost.
/// 2. Record `buyer` as the owner.
/// 3. Transfer `payment` from the payer into the inventory account.
///
/// A failed transfer aborts the transaction, so the ownership change in
/// step 2 never persists on its own.
pub fn process_buy_ticket(
    ctx: Context<BuyTicket>,
    buyer: Pubkey,
    ticket_id: String,
    payment: u64,
) -> Result<()> {
    let ticket = ctx
        .accounts
        .ticket_inventory
        .buy_ticket(&buyer, &ticket_id, payment)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.ticket_inventory.to_account_info(),
            },
        ),
        payment,
    )?;

    msg!("Ticket {} sold to {} for {}", ticket.ticket_id, buyer, ticket.cost);
    emit!(TicketPurchased {
        ticket_id: ticket.ticket_id,
        buyer,
        payer: ctx.accounts.payer.key(),
        cost: ticket.cost,
    });

    Ok(())
}
