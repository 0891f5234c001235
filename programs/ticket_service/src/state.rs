use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::TicketError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Ticket {
    /// Unique, permanent key within the catalog (at most `MAX_TICKET_ID_LEN` bytes).
    #[max_len(MAX_TICKET_ID_LEN)]
    pub ticket_id: String,

    /// Exact price in lamports.
    pub cost: u64,

    /// `None` until the ticket is bought; set exactly once.
    pub owner: Option<Pubkey>,
}

impl Ticket {
    pub fn new(ticket_id: impl Into<String>, cost: u64) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            cost,
            owner: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_owned_by(&self, identity: &Pubkey) -> bool {
        self.owner.as_ref() == Some(identity)
    }
}

#[account]
#[derive(InitSpace)]
pub struct TicketInventory {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The authority allowed to add tickets and withdraw proceeds.
    pub owner: Pubkey,

    /// Lamports received from sales that have not been withdrawn yet.
    pub proceeds: u64,

    pub tickets_sold: u64,

    /// The catalog is the only record of ownership. Availability and
    /// per-owner listings are projections of it, computed on read.
    #[max_len(MAX_TICKETS)]
    pub tickets: Vec<Ticket>,
}

impl TicketInventory {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            owner,
            proceeds: 0,
            tickets_sold: 0,
            tickets: Self::default_catalog(),
        }
    }

    pub fn default_catalog() -> Vec<Ticket> {
        DEFAULT_CATALOG
            .iter()
            .map(|(ticket_id, cost)| Ticket::new(*ticket_id, *cost))
            .collect()
    }

    fn position(&self, ticket_id: &str) -> Result<usize> {
        self.tickets
            .iter()
            .position(|ticket| ticket.ticket_id == ticket_id)
            .ok_or_else(|| TicketError::TicketNotFound.into())
    }

    pub fn ticket(&self, ticket_id: &str) -> Result<&Ticket> {
        let index = self.position(ticket_id)?;
        Ok(&self.tickets[index])
    }

    /// Unowned tickets in catalog order.
    pub fn available_tickets(&self) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| ticket.is_available())
            .cloned()
            .collect()
    }

    /// Tickets owned by `identity` in catalog order.
    pub fn owner_tickets(&self, identity: &Pubkey) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| ticket.is_owned_by(identity))
            .cloned()
            .collect()
    }

    pub fn check_if_available(&self, ticket_id: &str) -> Result<bool> {
        Ok(self.ticket(ticket_id)?.is_available())
    }

    pub fn check_owner_ticket(&self, identity: &Pubkey, ticket_id: &str) -> Result<bool> {
        Ok(self.ticket(ticket_id)?.is_owned_by(identity))
    }

    /// Appends `ticket` as unowned. Any owner on the input is discarded.
    pub fn add_ticket(&mut self, caller: &Pubkey, ticket: Ticket) -> Result<&Ticket> {
        require_keys_eq!(*caller, self.owner, TicketError::Unauthorized);
        require!(
            !ticket.ticket_id.is_empty() && ticket.ticket_id.len() <= MAX_TICKET_ID_LEN,
            TicketError::InvalidTicketId
        );
        require!(
            self.position(&ticket.ticket_id).is_err(),
            TicketError::DuplicateTicket
        );
        require!(self.tickets.len() < MAX_TICKETS, TicketError::CatalogFull);

        self.tickets.push(Ticket {
            owner: None,
            ..ticket
        });
        Ok(&self.tickets[self.tickets.len() - 1])
    }

    /// Transfers ownership of an unowned ticket to `buyer` for exactly its cost.
    pub fn buy_ticket(&mut self, buyer: &Pubkey, ticket_id: &str, payment: u64) -> Result<Ticket> {
        let index = self.position(ticket_id)?;
        let ticket = &self.tickets[index];

        require!(ticket.is_available(), TicketError::TicketAlreadySold);
        require!(payment == ticket.cost, TicketError::InsufficientPayment);

        let proceeds = self
            .proceeds
            .checked_add(payment)
            .ok_or(TicketError::MathOverflow)?;
        let tickets_sold = self
            .tickets_sold
            .checked_add(1)
            .ok_or(TicketError::MathOverflow)?;

        self.tickets[index].owner = Some(*buyer);
        self.proceeds = proceeds;
        self.tickets_sold = tickets_sold;

        Ok(self.tickets[index].clone())
    }

    pub fn withdraw_proceeds(&mut self, caller: &Pubkey, amount: u64) -> Result<u64> {
        require_keys_eq!(*caller, self.owner, TicketError::Unauthorized);
        require!(amount > 0, TicketError::InvalidAmount);
        require!(amount <= self.proceeds, TicketError::InsufficientProceeds);

        self.proceeds -= amount;
        Ok(self.proceeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_err<T: std::fmt::Debug>(result: Result<T>, expected: TicketError) {
        assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
    }

    fn inventory() -> (TicketInventory, Pubkey) {
        let owner = Pubkey::new_unique();
        (TicketInventory::new(owner, 255), owner)
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|ticket| ticket.ticket_id.as_str()).collect()
    }

    #[test]
    fn starts_with_twelve_available_tickets() {
        let (inventory, _) = inventory();
        let available = inventory.available_tickets();

        assert_eq!(available.len(), 12);
        assert!(available.iter().all(|ticket| ticket.owner.is_none()));
        assert_eq!(inventory.ticket("a1").unwrap().cost, 100_000);
        assert_eq!(inventory.ticket("b1").unwrap().cost, 200_000);
        assert_eq!(inventory.ticket("c4").unwrap().cost, 300_000);
    }

    #[test]
    fn default_ticket_ids_are_unique() {
        let mut catalog = ids(&TicketInventory::default_catalog())
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        catalog.sort();
        catalog.dedup();
        assert_eq!(catalog.len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn owner_adds_ticket_as_unowned() {
        let (mut inventory, owner) = inventory();
        let supplied = Ticket {
            ticket_id: "d1".to_string(),
            cost: 400_000,
            owner: Some(Pubkey::new_unique()),
        };

        inventory.add_ticket(&owner, supplied).unwrap();

        let available = inventory.available_tickets();
        assert_eq!(available.len(), 13);
        let added = available
            .iter()
            .find(|ticket| ticket.ticket_id == "d1")
            .unwrap();
        assert_eq!(added.cost, 400_000);
        assert_eq!(added.owner, None);
    }

    #[test]
    fn non_owner_cannot_add_ticket() {
        let (mut inventory, _) = inventory();
        expect_err(
            inventory.add_ticket(&Pubkey::new_unique(), Ticket::new("d1", 1)),
            TicketError::Unauthorized,
        );
        assert_eq!(inventory.tickets.len(), 12);
    }

    #[test]
    fn duplicate_ticket_is_rejected() {
        let (mut inventory, owner) = inventory();
        expect_err(
            inventory.add_ticket(&owner, Ticket::new("a1", 999)),
            TicketError::DuplicateTicket,
        );
        assert_eq!(inventory.ticket("a1").unwrap().cost, 100_000);
    }

    #[test]
    fn ticket_id_length_is_bounded() {
        let (mut inventory, owner) = inventory();
        expect_err(
            inventory.add_ticket(&owner, Ticket::new("", 1)),
            TicketError::InvalidTicketId,
        );
        expect_err(
            inventory.add_ticket(&owner, Ticket::new("x".repeat(MAX_TICKET_ID_LEN + 1), 1)),
            TicketError::InvalidTicketId,
        );
        assert!(inventory
            .add_ticket(&owner, Ticket::new("x".repeat(MAX_TICKET_ID_LEN), 1))
            .is_ok());
    }

    #[test]
    fn catalog_stops_at_capacity() {
        let (mut inventory, owner) = inventory();
        for i in inventory.tickets.len()..MAX_TICKETS {
            inventory
                .add_ticket(&owner, Ticket::new(format!("e{i}"), 1))
                .unwrap();
        }
        expect_err(
            inventory.add_ticket(&owner, Ticket::new("overflow", 1)),
            TicketError::CatalogFull,
        );
    }

    #[test]
    fn buying_transfers_ownership() {
        let (mut inventory, _) = inventory();
        let buyer = Pubkey::new_unique();

        assert!(inventory.check_if_available("a1").unwrap());
        let bought = inventory.buy_ticket(&buyer, "a1", 100_000).unwrap();

        assert_eq!(bought.owner, Some(buyer));
        assert!(!inventory.check_if_available("a1").unwrap());
        assert!(inventory.check_owner_ticket(&buyer, "a1").unwrap());
        assert_eq!(inventory.available_tickets().len(), 11);
        assert_eq!(inventory.proceeds, 100_000);
        assert_eq!(inventory.tickets_sold, 1);
    }

    #[test]
    fn sold_ticket_cannot_be_bought_again() {
        let (mut inventory, _) = inventory();
        let buyer1 = Pubkey::new_unique();
        let buyer2 = Pubkey::new_unique();
        inventory.buy_ticket(&buyer1, "a1", 100_000).unwrap();

        let err = inventory.buy_ticket(&buyer2, "a1", 100_000).unwrap_err();
        assert!(err.to_string().contains("Ticket is already sold"));
        expect_err(
            inventory.buy_ticket(&buyer1, "a1", 100_000),
            TicketError::TicketAlreadySold,
        );

        assert!(inventory.check_owner_ticket(&buyer1, "a1").unwrap());
        assert!(!inventory.check_owner_ticket(&buyer2, "a1").unwrap());
        assert_eq!(inventory.proceeds, 100_000);
        assert_eq!(inventory.tickets_sold, 1);
    }

    #[test]
    fn payment_must_match_cost_exactly() {
        let (mut inventory, _) = inventory();
        let buyer = Pubkey::new_unique();

        expect_err(
            inventory.buy_ticket(&buyer, "b1", 199_999),
            TicketError::InsufficientPayment,
        );
        expect_err(
            inventory.buy_ticket(&buyer, "b1", 200_001),
            TicketError::InsufficientPayment,
        );
        assert!(inventory.check_if_available("b1").unwrap());
        assert_eq!(inventory.proceeds, 0);
    }

    #[test]
    fn unknown_ticket_is_an_error_not_a_default() {
        let (mut inventory, _) = inventory();
        let someone = Pubkey::new_unique();

        let err = inventory.check_if_available("non-existent").unwrap_err();
        assert!(err.to_string().contains("Ticket does not exist"));
        expect_err(
            inventory.check_owner_ticket(&someone, "non-existent"),
            TicketError::TicketNotFound,
        );
        expect_err(
            inventory.buy_ticket(&someone, "non-existent", 100_000),
            TicketError::TicketNotFound,
        );
    }

    #[test]
    fn owner_tickets_lists_exactly_what_each_buyer_owns() {
        let (mut inventory, _) = inventory();
        let buyer1 = Pubkey::new_unique();
        let buyer2 = Pubkey::new_unique();

        inventory.buy_ticket(&buyer1, "a1", 100_000).unwrap();
        inventory.buy_ticket(&buyer1, "b1", 200_000).unwrap();
        inventory.buy_ticket(&buyer2, "c1", 300_000).unwrap();

        let first_read = inventory.owner_tickets(&buyer1);
        assert_eq!(ids(&first_read), vec!["a1", "b1"]);
        assert_eq!(inventory.owner_tickets(&buyer1), first_read);
        assert_eq!(ids(&inventory.owner_tickets(&buyer2)), vec!["c1"]);
        assert!(inventory.owner_tickets(&Pubkey::new_unique()).is_empty());
        assert_eq!(inventory.available_tickets().len(), 9);
    }

    #[test]
    fn owner_withdraws_up_to_proceeds() {
        let (mut inventory, owner) = inventory();
        inventory
            .buy_ticket(&Pubkey::new_unique(), "c2", 300_000)
            .unwrap();

        expect_err(
            inventory.withdraw_proceeds(&Pubkey::new_unique(), 1),
            TicketError::Unauthorized,
        );
        expect_err(
            inventory.withdraw_proceeds(&owner, 300_001),
            TicketError::InsufficientProceeds,
        );
        expect_err(inventory.withdraw_proceeds(&owner, 0), TicketError::InvalidAmount);

        assert_eq!(inventory.withdraw_proceeds(&owner, 100_000).unwrap(), 200_000);
        assert_eq!(inventory.proceeds, 200_000);
    }

    #[test]
    fn account_space_follows_catalog_limits() {
        assert_eq!(Ticket::INIT_SPACE, 4 + MAX_TICKET_ID_LEN + 8 + 1 + 32);
        assert_eq!(
            TicketInventory::INIT_SPACE,
            1 + 32 + 8 + 8 + 4 + MAX_TICKETS * Ticket::INIT_SPACE
        );
    }

    #[test]
    fn full_catalog_fits_in_allocated_space() {
        let (mut inventory, owner) = inventory();
        for i in inventory.tickets.len()..MAX_TICKETS {
            let ticket_id = format!("{i:0>width$}", width = MAX_TICKET_ID_LEN);
            inventory
                .add_ticket(&owner, Ticket::new(ticket_id, u64::MAX))
                .unwrap();
        }
        for ticket in inventory.tickets.iter_mut() {
            ticket.owner = Some(Pubkey::new_unique());
        }

        let encoded = inventory.try_to_vec().unwrap();
        assert!(encoded.len() <= TicketInventory::INIT_SPACE);
    }

    #[test]
    fn full_unowned_catalog_fits_in_return_data() {
        let (mut inventory, owner) = inventory();
        inventory.tickets.clear();
        for i in 0..MAX_TICKETS {
            let ticket_id = format!("{i:0>width$}", width = MAX_TICKET_ID_LEN);
            inventory
                .add_ticket(&owner, Ticket::new(ticket_id, u64::MAX))
                .unwrap();
        }

        let encoded = inventory.available_tickets().try_to_vec().unwrap();
        assert!(encoded.len() <= 1024, "encoded = {}", encoded.len());
    }
}
