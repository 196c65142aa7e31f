//! API route handlers

pub mod health;
pub mod plugins;
pub mod themes;
