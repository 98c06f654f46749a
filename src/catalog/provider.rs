// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog providers: the seam to whatever owns the catalog.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::CatalogSnapshot;
use crate::error::{Error, Result};

/// Returns the full hierarchical catalog as one snapshot.
///
/// No filtering or paging: the engine treats whatever comes back as the
/// complete catalog at that moment.
pub trait CatalogProvider {
    fn fetch(&self) -> Result<CatalogSnapshot>;
}

/// Reads a `GetCatalog()` JSON dump from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileProvider {
    fn fetch(&self) -> Result<CatalogSnapshot> {
        let raw = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot = CatalogSnapshot::from_json(&raw)?;
        debug!(
            "read {} categories from {}",
            snapshot.categories.len(),
            self.path.display()
        );
        Ok(snapshot)
    }
}

/// Serves a snapshot already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    snapshot: CatalogSnapshot,
}

impl StaticProvider {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

impl CatalogProvider for StaticProvider {
    fn fetch(&self) -> Result<CatalogSnapshot> {
        Ok(self.snapshot.clone())
    }
}
