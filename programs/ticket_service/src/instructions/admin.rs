use anchor_lang::prelude::*;

use crate::constants::TICKET_INVENTORY_SEED;
use crate::events::{InventoryInitialized, ProceedsWithdrawn, TicketAdded};
use crate::state::{Ticket, TicketInventory};

/// Accounts required to create a ticket inventory seeded with the default catalog.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct InitializeInventory<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + TicketInventory::INIT_SPACE,
        seeds = [TICKET_INVENTORY_SEED, owner.as_ref()],
        bump
    )]
    pub ticket_inventory: Box<Account<'info, TicketInventory>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AddTicket<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_INVENTORY_SEED, ticket_inventory.owner.as_ref()],
        bump = ticket_inventory.bump,
    )]
    pub ticket_inventory: Box<Account<'info, TicketInventory>>,
}

/// Accounts required for the owner to collect sale proceeds.
#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_INVENTORY_SEED, ticket_inventory.owner.as_ref()],
        bump = ticket_inventory.bump,
    )]
    pub ticket_inventory: Box<Account<'info, TicketInventory>>,
}

pub fn process_initialize_inventory(ctx: Context<InitializeInventory>, owner: Pubkey) -> Result<()> {
    let inventory = TicketInventory::new(owner, ctx.bumps.ticket_inventory);
    let ticket_count = inventory.tickets.len() as u32;
    ctx.accounts.ticket_inventory.set_inner(inventory);

    msg!("Ticket inventory created with {} tickets", ticket_count);
    emit!(InventoryInitialized {
        inventory: ctx.accounts.ticket_inventory.key(),
        owner,
        ticket_count,
    });

    Ok(())
}

pub fn process_add_ticket(ctx: Context<AddTicket>, ticket: Ticket) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let added = ctx.accounts.ticket_inventory.add_ticket(&owner, ticket)?;

    msg!("Ticket {} added at cost {}", added.ticket_id, added.cost);
    emit!(TicketAdded {
        ticket_id: added.ticket_id.clone(),
        cost: added.cost,
    });

    Ok(())
}

/// Moves `amount` lamports of collected proceeds to the owner.
///
/// The inventory account is program-owned, so lamports are debited directly.
pub fn process_withdraw_proceeds(ctx: Context<WithdrawProceeds>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let remaining = ctx
        .accounts
        .ticket_inventory
        .withdraw_proceeds(&owner, amount)?;

    **ctx
        .accounts
        .ticket_inventory
        .to_account_info()
        .try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.owner.try_borrow_mut_lamports()? += amount;

    msg!("Withdrew {} lamports, {} remaining", amount, remaining);
    emit!(ProceedsWithdrawn {
        owner,
        amount,
        remaining,
    });

    Ok(())
}
