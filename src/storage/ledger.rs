//! Ledger persistence
//!
//! The whole ledger lives in a single JSON file that is rewritten in full on
//! every save. There is no append format and no journal.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

const CORRUPT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result of a load that is never allowed to fail
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and parsed
    Loaded(Ledger),
    /// No file exists yet; start with an empty ledger
    Missing,
    /// The file exists but could not be used; start with an empty ledger
    Recovered {
        error: BudgetError,
        /// Where the unreadable file was copied, if that succeeded
        preserved: Option<PathBuf>,
    },
}

impl LoadOutcome {
    /// The ledger to work with; empty unless the load succeeded
    pub fn into_ledger(self) -> Ledger {
        match self {
            LoadOutcome::Loaded(ledger) => ledger,
            LoadOutcome::Missing | LoadOutcome::Recovered { .. } => Ledger::new(),
        }
    }

    /// The load problem to report, if any
    pub fn error(&self) -> Option<&BudgetError> {
        match self {
            LoadOutcome::Recovered { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Reads and writes the persisted ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// A missing file is an empty ledger, not an error. Amounts are coerced
    /// from numbers or numeric strings; anything unparseable fails the whole
    /// load with [`BudgetError::LoadFailure`]. Records already on disk are
    /// not re-validated.
    pub fn load(&self) -> BudgetResult<Ledger> {
        match read_json::<Ledger, _>(&self.path)? {
            Some(ledger) => {
                info!(
                    path = %self.path.display(),
                    income = ledger.income().len(),
                    expenses = ledger.expenses().len(),
                    "Loaded ledger"
                );
                Ok(ledger)
            }
            None => {
                debug!(path = %self.path.display(), "No ledger file, starting empty");
                Ok(Ledger::new())
            }
        }
    }

    /// Load the ledger, substituting an empty one on any failure
    ///
    /// An unreadable file is copied aside before the empty ledger is handed
    /// back, so the next autosave cannot destroy the only copy.
    pub fn load_or_empty(&self) -> LoadOutcome {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No ledger file, starting empty");
            return LoadOutcome::Missing;
        }

        match self.load() {
            Ok(ledger) => LoadOutcome::Loaded(ledger),
            Err(error) => {
                warn!(error = %error, "Ledger could not be loaded, starting empty");
                let preserved = self.preserve_corrupt();
                LoadOutcome::Recovered { error, preserved }
            }
        }
    }

    /// Overwrite the persisted ledger with the full in-memory ledger
    pub fn save(&self, ledger: &Ledger) -> BudgetResult<()> {
        write_json_atomic(&self.path, ledger)?;
        info!(
            path = %self.path.display(),
            records = ledger.len(),
            "Saved ledger"
        );
        Ok(())
    }

    fn preserve_corrupt(&self) -> Option<PathBuf> {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(
            ".corrupt-{}",
            Local::now().format(CORRUPT_TIMESTAMP_FORMAT)
        ));
        let target = self.path.with_file_name(name);

        match fs::copy(&self.path, &target) {
            Ok(_) => {
                info!(copy = %target.display(), "Preserved unreadable ledger file");
                Some(target)
            }
            Err(e) => {
                warn!(error = %e, "Could not preserve unreadable ledger file");
                None
            }
        }
    }
}
