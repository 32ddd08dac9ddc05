//! Logging utilities.
//!
//! Centralizes logger initialization on top of the standard `log` facade.

mod init;

pub use init::{init_logging, LogTarget, LoggingConfig};
