pub mod activities;
pub mod tickets;
pub mod timestamp;

pub use activities::{ActivityType, Model as Activity};
pub use tickets::{Category, Model as Ticket, Priority, TicketStatus};
