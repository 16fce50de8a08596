//! Data models shared across database access and API handlers.

pub mod button;
pub mod identity;
pub mod press;
pub mod session;
pub mod user;
