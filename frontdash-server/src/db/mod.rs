//! Database access layer
//!
//! Free functions over the SQLite pool, one module per aggregate.
//! Functions return `sqlx::Error`; business-rule mapping happens in handlers.

pub mod drivers;
pub mod hours;
pub mod menu;
pub mod orders;
pub mod restaurants;
pub mod staff;
