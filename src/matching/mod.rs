//! Matching subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request text
//!     → rule.rs (evaluate one match condition: verb, route, cookie)
//!     → handler.rs (apply rule, propagate sticky rejection)
//!     → chain.rs (walk handlers front to back)
//!     → Return: accepted request or explicit rejection
//!
//! Chain Compilation (at startup):
//!     RuleConfig[]
//!     → Compile one handler per rule, in config order
//!     → Freeze as immutable Chain
//! ```
//!
//! # Design Decisions
//! - Chains compiled once, immutable at runtime (thread-safe without locks)
//! - No regex in the hot path (single forward scans only)
//! - Deterministic: same chain and input always yield the same verdict
//! - Rejection is sticky: once a stage rejects, later stages are no-ops

pub mod chain;
pub mod handler;
pub mod rule;
