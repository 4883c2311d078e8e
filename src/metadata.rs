//! Game variant detection
//!
//! Identifies edition, version, distribution, language and DRM of an
//! installation by probing for known executables.
//!
//! ## Module Structure
//! - `types.rs`: value enums, GameMetadata, Candidate, Conflict
//! - `pure/`: field table, diff/merge, executable names, built-in candidates
//! - `operations/`: apply a single candidate against the file system
//! - `pipelines/`: full reconciliation pass over all candidate groups

mod operations;
mod pipelines;
mod pure;
mod types;

pub use types::{Candidate, CandidateGroup, Conflict, FieldValue, GameMetadata, MetadataField};
#[cfg(test)]
pub use types::{Distribution, Drm, Edition, Language, Version};

pub use pipelines::reconcile;
pub use pure::builtin_candidate_groups;

use crate::error::{Error, Result};
use std::path::PathBuf;

impl GameMetadata {
    /// `{edition}_{version}_{distribution}_{language}`
    pub fn identifier(&self) -> Result<String> {
        let edition = self.edition.ok_or(Error::IncompleteMetadata(MetadataField::Edition))?;
        let version = self.version.ok_or(Error::IncompleteMetadata(MetadataField::Version))?;
        let distribution = self
            .distribution
            .ok_or(Error::IncompleteMetadata(MetadataField::Distribution))?;
        let language = self.language.ok_or(Error::IncompleteMetadata(MetadataField::Language))?;

        Ok(format!("{}_{}_{}_{}", edition, version, distribution, language))
    }

    /// Main executable, relative to the game directory
    pub fn executable_path(&self) -> Result<PathBuf> {
        let edition = self.edition.ok_or(Error::EditionUnset)?;
        Ok(PathBuf::from(pure::executable_pair(edition, self.language).0))
    }

    /// Translation-layer executable, relative to the game directory
    pub fn tl_executable_path(&self) -> Result<PathBuf> {
        let edition = self.edition.ok_or(Error::EditionUnset)?;
        Ok(PathBuf::from(pure::executable_pair(edition, self.language).1))
    }

    pub fn diff(&self, incoming: &GameMetadata) -> Vec<Conflict> {
        pure::diff(self, incoming)
    }

    pub fn merge(&mut self, incoming: &GameMetadata, decisions: &[FieldValue]) -> Result<()> {
        pure::merge(self, incoming, decisions)
    }

    /// Current value of every field, in declaration order
    pub fn fields(&self) -> Vec<(MetadataField, Option<FieldValue>)> {
        pure::FIELDS
            .iter()
            .map(|access| (access.field, (access.get)(self)))
            .collect()
    }
}
