pub mod cookies;
pub mod time;
