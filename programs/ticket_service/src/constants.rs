/// Seed prefix of the ticket inventory PDA. The owner's key completes the seeds.
pub const TICKET_INVENTORY_SEED: &[u8] = b"ticket_inventory";

/// Capacity of the catalog. A full catalog of unowned tickets still fits in
/// the 1024 bytes of return data `get_available_tickets` can hand back.
pub const MAX_TICKETS: usize = 32;

/// Longest accepted ticket id, in bytes.
pub const MAX_TICKET_ID_LEN: usize = 16;

/// Tickets every inventory starts with: three tiers of four.
pub const DEFAULT_CATALOG: [(&str, u64); 12] = [
    ("a1", 100_000),
    ("a2", 100_000),
    ("a3", 100_000),
    ("a4", 100_000),
    ("b1", 200_000),
    ("b2", 200_000),
    ("b3", 200_000),
    ("b4", 200_000),
    ("c1", 300_000),
    ("c2", 300_000),
    ("c3", 300_000),
    ("c4", 300_000),
];
