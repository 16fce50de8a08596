//! Data access layer.
//!
//! Each entity gets a repository trait so handlers depend on behavior, not
//! on the database driver, and tests can substitute in-memory or mock
//! implementations. The `Pg*` types are the production implementations.

pub mod button;
pub mod press;
pub mod session;
pub mod user;

pub use button::{ButtonRepository, PgButtonRepository};
pub use press::{PgPressRepository, PressRepository};
pub use session::{PgSessionRepository, SessionRepository};
pub use user::{PgUserRepository, UserRepository};
