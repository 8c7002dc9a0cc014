//! CLI command handlers
//!
//! This module bridges the clap argument parsing in `main.rs` with the
//! service, storage, and display layers.

pub mod session;
pub mod template;

pub use session::{ConnectOptions, Session};
pub use template::{handle_check, handle_compute, handle_create, handle_show};
