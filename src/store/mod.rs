pub mod knowledge;
pub mod sqlite;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

/// Handle to the on-disk store. Holds only the file path; every caller
/// gets its own short-lived connection from `connect`.
#[derive(Debug, Clone)]
pub struct Store {
    pub path: PathBuf,
}

impl Store {
    pub fn init(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let db = sqlite::SqliteStore::open(path)?;
        db.migrate()?;

        let seeded = db.seed_if_empty(knowledge::SEED)?;
        if seeded > 0 {
            tracing::info!("seeded knowledge base with {} entries", seeded);
        } else {
            tracing::debug!("knowledge base already populated");
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Open a connection for one unit of work. Dropping the returned
    /// store closes it.
    pub fn connect(&self) -> Result<sqlite::SqliteStore> {
        sqlite::SqliteStore::open(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_parent_dirs_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chat.db");

        let store = Store::init(&path).unwrap();
        assert!(path.exists());

        let db = store.connect().unwrap();
        assert_eq!(db.knowledge_count().unwrap(), knowledge::SEED.len());
    }

    #[test]
    fn init_twice_keeps_seed_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.db");

        Store::init(&path).unwrap();
        let store = Store::init(&path).unwrap();

        let db = store.connect().unwrap();
        assert_eq!(db.knowledge_count().unwrap(), knowledge::SEED.len());
    }
}
