use anchor_lang::prelude::*;

#[event]
pub struct InventoryInitialized {
    pub inventory: Pubkey,
    pub owner: Pubkey,
    pub ticket_count: u32,
}

#[event]
pub struct TicketAdded {
    pub ticket_id: String,
    pub cost: u64,
}

#[event]
pub struct TicketPurchased {
    pub ticket_id: String,
    pub buyer: Pubkey,
    pub payer: Pubkey,
    pub cost: u64,
}

#[event]
pub struct ProceedsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
