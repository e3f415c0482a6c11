//! The process-wide registry cache
//!
//! Thin free-function facade over one lazily created [`SharedRegistries`].
//! Code that wants an isolated cache (tests, embedded runtimes) should build
//! its own `SharedRegistries` instead.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::metrics::MetricRegistry;
use crate::shared::SharedRegistries;

static SHARED: OnceLock<SharedRegistries> = OnceLock::new();

/// Get the global registry cache
pub fn shared() -> &'static SharedRegistries {
    SHARED.get_or_init(SharedRegistries::new)
}

/// See [`SharedRegistries::get_or_create`]
pub fn get_or_create(name: &str) -> Arc<MetricRegistry> {
    shared().get_or_create(name)
}

/// See [`SharedRegistries::names`]
pub fn names() -> BTreeSet<String> {
    shared().names()
}

/// See [`SharedRegistries::add`]
pub fn add(name: &str, registry: Arc<MetricRegistry>) -> Option<Arc<MetricRegistry>> {
    shared().add(name, registry)
}

/// See [`SharedRegistries::remove`]
pub fn remove(name: &str) {
    shared().remove(name);
}

/// See [`SharedRegistries::clear`]
pub fn clear() {
    shared().clear();
}

/// See [`SharedRegistries::set_default`]
pub fn set_default(name: &str) -> Result<Arc<MetricRegistry>> {
    shared().set_default(name)
}

/// See [`SharedRegistries::set_default_with`]
pub fn set_default_with(
    name: &str,
    registry: Arc<MetricRegistry>,
) -> Result<Arc<MetricRegistry>> {
    shared().set_default_with(name, registry)
}

/// See [`SharedRegistries::get_default`]
pub fn get_default() -> Result<Arc<MetricRegistry>> {
    shared().get_default()
}

/// See [`SharedRegistries::try_get_default`]
pub fn try_get_default() -> Option<Arc<MetricRegistry>> {
    shared().try_get_default()
}

/// See [`SharedRegistries::reset_all`]
pub fn reset_all() {
    shared().reset_all();
}
