// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The live catalog: one `Arc<CatalogIndex>` behind a lock that is only
//! ever held long enough to clone or replace the pointer.
//!
//! Rebuilding happens outside the lock. A query that grabbed the old index
//! finishes against the old index; the next one sees the new one. There is no
//! moment where a reader can observe a half-built catalog.

use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use super::{CatalogProvider, CatalogSnapshot};
use crate::error::Result;
use crate::index::{CatalogIndex, IndexStats};

/// Shared, swappable reference to the current catalog index.
///
/// Cloning the handle shares the same slot.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<CatalogIndex>>>,
}

impl CatalogHandle {
    pub fn new(index: CatalogIndex) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Fetch once from `provider` and build the first index.
    pub fn load(provider: &dyn CatalogProvider) -> Result<Self> {
        let snapshot = provider.fetch()?;
        Ok(Self::from_snapshot(&snapshot))
    }

    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        Self::new(CatalogIndex::build(snapshot))
    }

    /// The index queries should run against right now.
    pub fn current(&self) -> Arc<CatalogIndex> {
        Arc::clone(&self.current.read())
    }

    /// Replace the current index. Returns the stats of the new one.
    pub fn replace(&self, index: CatalogIndex) -> IndexStats {
        let stats = index.stats();
        *self.current.write() = Arc::new(index);
        stats
    }

    /// Re-fetch from `provider`, rebuild, and swap.
    ///
    /// On a provider error the current index stays in place.
    pub fn refresh(&self, provider: &dyn CatalogProvider) -> Result<IndexStats> {
        let snapshot = provider.fetch()?;
        let stats = self.replace(CatalogIndex::build(&snapshot));
        info!("catalog refreshed: {} products", stats.products);
        Ok(stats)
    }
}
