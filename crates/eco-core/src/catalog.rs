//! Product catalog discovery.
//!
//! Walks the configured catalog directories for `*.yml` / `*.yaml` product
//! files, parses each into a [`ProductSpec`], and rejects duplicate ids.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::product::ProductSpec;
use crate::product_id::ProductId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A discovered product and the file it came from.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// The parsed product spec
    pub spec: ProductSpec,

    /// Path of the YAML file the spec was loaded from
    pub path: PathBuf,
}

/// All products discovered from the configured catalog paths.
#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, CatalogEntry>,
}

impl Catalog {
    /// Discover products from the catalog paths in `config`, relative to
    /// the project root.
    ///
    /// Missing catalog directories are skipped with a warning so a fresh
    /// project without products still loads.
    pub fn load(root: &Path, config: &Config) -> CoreResult<Self> {
        let mut catalog = Catalog::default();
        for dir in config.catalog_paths_absolute(root) {
            if !dir.is_dir() {
                log::warn!("catalog path does not exist: {}", dir.display());
                continue;
            }
            catalog.load_dir(&dir)?;
        }
        Ok(catalog)
    }

    /// Recursively load every product file under `dir`.
    fn load_dir(&mut self, dir: &Path) -> CoreResult<()> {
        let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if is_yaml(&path) {
                let spec = ProductSpec::from_yaml_file(&path)?;
                self.insert(spec, path)?;
            }
        }
        Ok(())
    }

    /// Add a product, rejecting duplicate ids.
    fn insert(&mut self, spec: ProductSpec, path: PathBuf) -> CoreResult<()> {
        if let Some(existing) = self.products.get(&spec.id) {
            return Err(CoreError::DuplicateProduct {
                id: spec.id.to_string(),
                path1: existing.path.display().to_string(),
                path2: path.display().to_string(),
            });
        }
        self.products.insert(spec.id.clone(), CatalogEntry { spec, path });
        Ok(())
    }

    /// Look up a product spec by id.
    pub fn get(&self, id: &str) -> Option<&ProductSpec> {
        self.products.get(id).map(|entry| &entry.spec)
    }

    /// Look up a product spec by id, erroring when absent.
    pub fn require(&self, id: &str) -> CoreResult<&ProductSpec> {
        self.get(id).ok_or_else(|| CoreError::ProductNotFound {
            id: id.to_string(),
        })
    }

    /// All entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.products.values()
    }

    /// All product ids in sorted order.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.products.keys()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
