//! Name-keyed cache of metric registries
//!
//! [`SharedRegistries`] memoizes registries by name so every lookup for a name
//! yields the same `Arc`, and holds a set-once "default" slot naming the
//! registry the process treats as its primary one.
//!
//! ```
//! use std::sync::Arc;
//! use sharemetrics_core::SharedRegistries;
//!
//! let shared: SharedRegistries = SharedRegistries::new();
//! let app = shared.set_default("app")?;
//! app.counter("started").inc();
//!
//! assert!(Arc::ptr_eq(&app, &shared.get_default()?));
//! assert!(shared.set_default("other").is_err());
//! # Ok::<(), sharemetrics_core::Error>(())
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::config::SharedRegistriesConfig;
use crate::error::{Error, Result};
use crate::metrics::MetricRegistry;

/// Process-wide registry cache with a set-once default name.
///
/// Registry creation per name goes through a single map entry, so concurrent
/// callers racing on the same name all receive the winner's instance.
///
/// Writers that touch the default slot (`set_default*`, `reset_all`) hold its
/// write lock across their map update. Nothing takes the slot lock while
/// holding a map shard, so the order is always slot then map.
pub struct SharedRegistries<R = MetricRegistry> {
    registries: DashMap<String, Arc<R>>,
    default_name: RwLock<Option<String>>,
}

impl<R> Default for SharedRegistries<R> {
    fn default() -> Self {
        Self {
            registries: DashMap::new(),
            default_name: RwLock::new(None),
        }
    }
}

impl<R> fmt::Debug for SharedRegistries<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRegistries")
            .field("names", &self.names())
            .field("default_name", &self.default_name())
            .finish()
    }
}

impl<R> SharedRegistries<R> {
    /// Create an empty cache with no default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the cached names
    #[must_use]
    pub fn names(&self) -> BTreeSet<String> {
        self.registries.iter().map(|e| e.key().clone()).collect()
    }

    /// Whether a registry is cached under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.registries.contains_key(name)
    }

    /// Number of cached registries
    #[must_use]
    pub fn len(&self) -> usize {
        self.registries.len()
    }

    /// Whether the cache holds no registries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    /// Insert `registry` under `name` unless one is already cached.
    ///
    /// Returns the existing registry when the name was taken (and drops the
    /// supplied one), or `None` when `registry` was installed.
    pub fn add(&self, name: &str, registry: Arc<R>) -> Option<Arc<R>> {
        match self.registries.entry(name.to_string()) {
            Entry::Occupied(existing) => Some(existing.get().clone()),
            Entry::Vacant(slot) => {
                slot.insert(registry);
                debug!(registry = %name, "Added shared metric registry");
                None
            }
        }
    }

    /// Evict `name`. Absent names are ignored.
    ///
    /// The default slot is left alone even when `name` is the default, so a
    /// later [`get_default`](Self::get_default) builds a fresh registry.
    pub fn remove(&self, name: &str) {
        if self.registries.remove(name).is_some() {
            debug!(registry = %name, "Removed shared metric registry");
        }
    }

    /// Evict every registry. The default slot is left alone.
    pub fn clear(&self) {
        let evicted = self.registries.len();
        self.registries.clear();
        info!(evicted, "Cleared shared metric registries");
    }

    /// The configured default name, if any
    #[must_use]
    pub fn default_name(&self) -> Option<String> {
        self.default_name
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Evict every registry and unset the default
    pub fn reset_all(&self) {
        let mut slot = self.default_name.write().unwrap_or_else(|e| e.into_inner());
        slot.take();
        self.registries.clear();
        drop(slot);
        info!("Reset shared metric registries");
    }

    /// Make `name` the default and cache `registry` under it.
    ///
    /// Unlike [`add`](Self::add), this replaces whatever was cached under `name`.
    pub fn set_default_with(&self, name: &str, registry: Arc<R>) -> Result<Arc<R>> {
        let _slot = self.claim_default(name)?;
        self.registries.insert(name.to_string(), registry.clone());
        Ok(registry)
    }

    /// Flip the default slot from unset to `name`, exactly once.
    ///
    /// The returned guard keeps readers of the slot out until the caller has
    /// cached the default registry.
    fn claim_default(&self, name: &str) -> Result<RwLockWriteGuard<'_, Option<String>>> {
        let mut slot = self.default_name.write().unwrap_or_else(|e| e.into_inner());
        if let Some(current) = slot.as_deref() {
            warn!(registry = %name, current = %current, "Default metric registry already set");
            return Err(Error::DefaultAlreadySet);
        }
        *slot = Some(name.to_string());
        info!(registry = %name, "Default metric registry set");
        Ok(slot)
    }
}

impl<R: Default> SharedRegistries<R> {
    /// Build a cache from startup config.
    ///
    /// Preloaded registries are created first; the default registry then
    /// reuses one of them if the names match.
    pub fn from_config(config: &SharedRegistriesConfig) -> Result<Self> {
        config.validate()?;

        let shared = Self::new();
        for name in &config.preload {
            shared.get_or_create(name);
        }
        if let Some(name) = &config.default_registry {
            shared.set_default(name)?;
        }
        Ok(shared)
    }

    /// Return the registry cached under `name`, creating it if needed.
    ///
    /// Creation is atomic per name: concurrent callers get one instance.
    pub fn get_or_create(&self, name: &str) -> Arc<R> {
        if let Some(existing) = self.registries.get(name) {
            return existing.value().clone();
        }

        self.registries
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(registry = %name, "Created shared metric registry");
                Arc::new(R::default())
            })
            .value()
            .clone()
    }

    /// Make `name` the default and return its registry, creating it if needed
    pub fn set_default(&self, name: &str) -> Result<Arc<R>> {
        let _slot = self.claim_default(name)?;
        Ok(self.get_or_create(name))
    }

    /// The default registry.
    ///
    /// Goes through [`get_or_create`](Self::get_or_create), so an evicted
    /// default comes back as a new, empty registry.
    pub fn get_default(&self) -> Result<Arc<R>> {
        match self.default_name() {
            Some(name) => Ok(self.get_or_create(&name)),
            None => {
                warn!("Default metric registry requested before it was set");
                Err(Error::DefaultNotSet)
            }
        }
    }

    /// The default registry, or `None` if no default is set
    pub fn try_get_default(&self) -> Option<Arc<R>> {
        self.default_name().map(|name| self.get_or_create(&name))
    }
}
