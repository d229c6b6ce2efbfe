//! Structured logging for tables.
//!
//! Every pipeline stage and handled event runs inside a `tracing` span with
//! structured fields (row counts, column ids, page numbers). Nothing is
//! printed unless the host installs a subscriber, either its own or the one
//! from [`init_tracing`].
//!
//! # Configuration
//!
//! The level filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`TableConfig`](crate::TableConfig)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use gridline::observability::init_tracing;
//! use gridline::TableConfig;
//!
//! let config = TableConfig {
//!     trace_level: "gridline=debug".to_string(),
//!     ..TableConfig::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("table logging active");
//! ```

mod init;

pub use init::init_tracing;
