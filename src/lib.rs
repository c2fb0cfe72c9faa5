pub mod api;
pub mod config;
pub mod errors;
pub mod format;
pub mod models;
pub mod notify;
pub mod payments;
pub mod session;
pub mod state;
pub mod views;
