//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured field-style records for machine parsing
//! - Log level resolved from the environment first, config second
//! - Logging never changes an evaluation verdict

pub mod logging;
