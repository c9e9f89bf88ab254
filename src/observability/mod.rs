//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON)
//!     → Whatever recorder the host installs for the metrics facade
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - API name, route key and mode are fields, never interpolated text
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
