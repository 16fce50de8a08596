pub mod id;

pub use id::{ButtonId, IdentityId, PressId, UserId};
