//! Data models
//!
//! Shared between frontdash-server and clients (via API).
//! DB row types derive `sqlx::FromRow`; ids are `i64` (SQLite INTEGER PRIMARY KEY).
//! Wire format is camelCase JSON.

pub mod address;
pub mod auth;
pub mod driver;
pub mod hours;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod staff;

// Re-exports
pub use address::*;
pub use auth::*;
pub use driver::*;
pub use hours::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use staff::*;
