// GitBrowse - Literate Browsing for Git Objects
// Copyright (C) 2025 GitBrowse Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! GitBrowse Observability
//!
//! Structured logging for the GitBrowse crates.
//!
//! - **Output formats**: pretty, compact and JSON
//! - **Filtering**: explicit level, else `RUST_LOG`, else `info`
//! - **Stderr by default**, so rendered output on stdout stays clean
//!
//! # Example
//!
//! ```ignore
//! use gitbrowse_observability::{init_tracing, LogFormat};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(LogFormat::Compact, Some("debug"))?;
//!     tracing::info!("Browser started");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod initialization;

pub use config::{LogConfig, LogError, LogFormat, LogOutput};
pub use initialization::{init_tracing, init_tracing_with_config};

/// Tracing re-exports for convenience
pub use tracing::{debug, error, info, trace, warn, Level};
