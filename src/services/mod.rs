pub mod access;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod invoice;
pub mod registrations;
pub mod users;
pub mod venues;
