//! Sharemetrics Core - Shared Metric Registries
//!
//! This crate keeps metric registries addressable by name across a process:
//! - Shared: name → registry cache with a set-once default registry
//! - Global: the process-wide cache and its free-function facade
//! - Metrics: counters, gauges, histograms and the registry grouping them
//! - Config: startup configuration (default registry, preloaded names)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod global;
pub mod metrics;
pub mod shared;

pub use config::{SharedRegistriesConfig, ENV_DEFAULT_REGISTRY};
pub use error::{Error, Result, UserFriendlyError};
pub use metrics::{Counter, Gauge, Histogram, MetricRegistry, Timer};
pub use shared::SharedRegistries;
