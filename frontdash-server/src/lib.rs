//! FrontDash backend library
//!
//! - **API** (`api`): RESTful routes for admin, restaurant, auth, orders
//! - **Database** (`db`): SQLite persistence via sqlx
//! - **Pricing** (`pricing`): order totals with half-up cent rounding
//! - **Config** (`config`): environment-driven configuration

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod pricing;
pub mod state;
pub mod util;

pub use config::Config;
pub use state::AppState;
