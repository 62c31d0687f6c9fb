// Once-only loading of the table pair.
//
// The store owns the outcome of the first load, successful or not. Later
// calls return the same tables (or the same error) without touching disk.

use crate::config::DataPaths;
use crate::data::loader::load_tables;
use crate::data::records::Tables;
use crate::error::LoadError;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::error;

type LoadOutcome = Result<Tables, Arc<LoadError>>;

/// Holds the loaded tables for the lifetime of the process.
///
/// Concurrent first callers block on the same initialization; the CSV files
/// are read at most once per store.
#[derive(Debug)]
pub struct DataStore {
    paths: DataPaths,
    cell: OnceCell<LoadOutcome>,
}

impl DataStore {
    pub fn new(paths: DataPaths) -> Self {
        DataStore {
            paths,
            cell: OnceCell::new(),
        }
    }

    /// True once a load has been attempted, whatever its outcome.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the loaded tables, loading them on first use.
    ///
    /// A failed load is terminal: the same error is returned on every call.
    pub fn tables(&self) -> Result<&Tables, Arc<LoadError>> {
        let outcome = self.cell.get_or_init(|| match load_tables(&self.paths) {
            Ok(tables) => Ok(tables),
            Err(e) => {
                error!("Data unavailable: {}", e);
                Err(Arc::new(e))
            }
        });
        match outcome {
            Ok(tables) => Ok(tables),
            Err(e) => Err(Arc::clone(e)),
        }
    }
}
