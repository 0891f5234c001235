pub mod admin;
pub mod attempt;
pub mod view;

pub use admin::*;
pub use attempt::*;
pub use view::*;
