//! Candidate Catalog — source of the institutions the engine ranks.
//!
//! Default: `StaticCatalog` over the bundled seed list, or over a JSON array
//! file when `CATALOG_PATH` is set. A network-backed catalog would implement
//! the same trait.
//!
//! `AppState` holds an `Arc<dyn CandidateCatalog>`, chosen at startup via config.

pub mod seed;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::Candidate;

#[async_trait]
pub trait CandidateCatalog: Send + Sync {
    /// All candidates in catalog order. Order matters: it breaks ranking ties.
    async fn list(&self) -> Result<Vec<Candidate>, AppError>;

    async fn get(&self, id: &str) -> Result<Option<Candidate>, AppError>;
}

/// In-memory catalog. Candidate ids are unique.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    candidates: Vec<Candidate>,
}

impl StaticCatalog {
    pub fn new(candidates: Vec<Candidate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if candidate.id.trim().is_empty() {
                bail!("Catalog entry '{}' has an empty id", candidate.name);
            }
            if !seen.insert(candidate.id.as_str()) {
                bail!("Duplicate candidate id '{}' in catalog", candidate.id);
            }
        }
        Ok(Self { candidates })
    }

    pub fn seeded() -> Self {
        Self {
            candidates: seed::seed_candidates(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[async_trait]
impl CandidateCatalog for StaticCatalog {
    async fn list(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.candidates.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Candidate>, AppError> {
        Ok(self.candidates.iter().find(|c| c.id == id).cloned())
    }
}

/// Reads a JSON array of candidates from disk.
pub async fn load_catalog_file(path: &Path) -> Result<StaticCatalog> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let candidates: Vec<Candidate> = serde_json::from_str(&raw)
        .with_context(|| format!("Catalog file {} is not a JSON candidate list", path.display()))?;
    let catalog = StaticCatalog::new(candidates)?;
    if catalog.is_empty() {
        warn!("Catalog file {} has no candidates; every ranking will be empty", path.display());
    }
    info!(
        "Loaded {} candidates from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Catalog from `CATALOG_PATH` when configured, otherwise the bundled seed list.
pub async fn build_catalog(path: Option<&Path>) -> Result<StaticCatalog> {
    match path {
        Some(path) => load_catalog_file(path).await,
        None => {
            let catalog = StaticCatalog::seeded();
            info!("Using bundled catalog ({} candidates)", catalog.len());
            Ok(catalog)
        }
    }
}
