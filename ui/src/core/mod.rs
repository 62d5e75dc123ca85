//! Platform-agnostic state and data shared by every screen.

pub mod config;
pub mod password;
pub mod sample;
pub mod session;
