//! Remote game database
//!
//! A handful of YAML tables published in a git repository and fetched over
//! HTTP once per run. The database is optional: a table that cannot be
//! fetched is replaced by an empty one.

mod operations;
mod types;

pub use types::{DatabaseSource, Tables};

use crate::error::{Error, Result};
use crate::metadata::CandidateGroup;

pub struct Database {
    source: DatabaseSource,
    tables: Option<Tables>,
}

impl Database {
    pub fn new(source: DatabaseSource) -> Self {
        Self { source, tables: None }
    }

    /// Already initialized with the given tables
    #[cfg(test)]
    pub fn with_tables(source: DatabaseSource, tables: Tables) -> Self {
        Self {
            source,
            tables: Some(tables),
        }
    }

    /// Fetch every table. Does nothing when already initialized.
    pub fn init(&mut self) -> Result<()> {
        if self.tables.is_some() {
            return Ok(());
        }

        let client = crate::util::http_client()?;
        self.tables = Some(operations::fetch_tables(&client, &self.source));
        Ok(())
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.tables.is_some()
    }

    pub fn tables(&self) -> Result<&Tables> {
        self.tables.as_ref().ok_or(Error::DatabaseNotInitialized)
    }

    /// Candidate groups derived from the executable mappings, or None when the
    /// database has no mappings
    pub fn candidate_groups(&self) -> Result<Option<Vec<CandidateGroup>>> {
        let tables = self.tables()?;
        if tables.executable_to_metadata.elements.is_empty() {
            return Ok(None);
        }
        Ok(Some(vec![tables.candidate_group()?]))
    }
}
