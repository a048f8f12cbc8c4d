//! Logging utilities.
//!
//! Centralizes logger initialization over the `log` facade; the backend is
//! `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
