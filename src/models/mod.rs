pub mod event;
pub mod registration;
pub mod ticket;
pub mod user;
pub mod venue;

pub use event::{Event, EventStatus};
pub use registration::{PaymentStatus, Registration};
pub use ticket::TicketInventory;
pub use user::{User, UserRole};
pub use venue::Venue;
