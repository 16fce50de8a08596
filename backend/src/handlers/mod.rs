//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod buttons;
pub mod press;
pub mod stats;
