pub mod events;
pub mod registrations;
pub mod tickets;
pub mod users;
pub mod venues;
