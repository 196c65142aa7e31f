#![warn(missing_docs)]

//! DashTools HTTP API
//!
//! Serves the plugin catalogue and theme defaults to dashboard front ends.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use server::ApiServer;
pub use state::AppState;
