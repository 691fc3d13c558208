//! Working session
//!
//! Owns the in-memory ledger together with the store it came from and the
//! user's settings. Every command handler receives the session explicitly.

use std::io::Write;

use tracing::warn;

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::models::Ledger;
use crate::storage::{LedgerStore, LoadOutcome};

pub struct Session {
    store: LedgerStore,
    settings: Settings,
    ledger: Ledger,
}

impl Session {
    pub fn new(store: LedgerStore, settings: Settings, ledger: Ledger) -> Self {
        Self {
            store,
            settings,
            ledger,
        }
    }

    /// Open the ledger under `paths`, reporting any recovery to `out`
    ///
    /// Never fails on bad data: an unreadable settings file falls back to
    /// defaults and an unreadable ledger to an empty one. Only writing the
    /// report itself can fail.
    pub fn open<W: Write>(paths: &BudgetPaths, out: &mut W) -> BudgetResult<Self> {
        let settings = match Settings::load_or_create(paths) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Using default settings");
                writeln!(out, "Warning: {}. Using default settings.", e)?;
                Settings::default()
            }
        };

        let store = LedgerStore::new(paths.ledger_file());
        let outcome = store.load_or_empty();
        if let LoadOutcome::Recovered { error, preserved } = &outcome {
            writeln!(out, "Error loading data: {}", error)?;
            if let Some(copy) = preserved {
                writeln!(out, "The unreadable file was copied to {}", copy.display())?;
            }
            writeln!(out, "Starting with an empty ledger.")?;
        }

        Ok(Self::new(store, settings, outcome.into_ledger()))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Currency symbol for display
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Persist the whole ledger, returning any save failure
    pub fn save(&self) -> BudgetResult<()> {
        self.store.save(&self.ledger)
    }

    /// Persist the whole ledger and tell the user how it went
    ///
    /// A failed save is reported, not returned: the session keeps running on
    /// the in-memory ledger. Returns whether the save succeeded.
    pub fn autosave<W: Write>(&self, out: &mut W) -> BudgetResult<bool> {
        match self.save() {
            Ok(()) => {
                writeln!(out, "✓ Data saved.")?;
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "Autosave failed");
                writeln!(out, "Error saving data: {}", e)?;
                writeln!(out, "Your entries are kept in memory for this session.")?;
                Ok(false)
            }
        }
    }
}
