pub mod admin;
pub mod buy_ticket;
pub mod view;

pub use admin::*;
pub use buy_ticket::*;
pub use view::*;
