pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod middleware;

pub use handlers::{app, AppState};
