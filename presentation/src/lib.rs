//! Presentation layer for roi-simulator
//!
//! This crate contains CLI definitions, console output formatting
//! and the HTTP API.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{CalculateArgs, Cli, Command, OutputFormat};
pub use http::{ApiError, ApiResponse, AppState, RateLimiter, create_router, serve};
pub use output::console::ConsoleFormatter;
