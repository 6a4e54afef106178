//! Output handling for the CLI.
//!
//! This module provides:
//! - Output format selection (text, JSON)
//! - The JSON envelope shared by every command
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{EntityType, Envelope, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
