//! Apply a single candidate file to accumulated metadata

use crate::error::Result;
use crate::interaction::Interaction;
use crate::metadata::types::{Candidate, Conflict, FieldValue, GameMetadata};

use std::path::Path;

/// Ask the user about every conflict and return the chosen values
pub fn resolve_conflicts(conflicts: &[Conflict], interaction: &mut dyn Interaction) -> Result<Vec<FieldValue>> {
    let mut decisions = Vec::with_capacity(conflicts.len());

    for conflict in conflicts {
        let adopt = interaction.ask_yes_no(
            &format!(
                "Change {} from {} to {}?",
                conflict.field, conflict.current, conflict.incoming
            ),
            true,
        )?;
        decisions.push(if adopt { conflict.incoming } else { conflict.current });
    }

    Ok(decisions)
}

/// Merge the candidate's metadata into `current` if its file exists under
/// `base_dir`.
///
/// Returns whether the candidate matched. Missing files have no side effect.
pub fn apply_candidate(
    current: &mut GameMetadata,
    candidate: &Candidate,
    base_dir: &Path,
    interaction: &mut dyn Interaction,
) -> Result<bool> {
    if !base_dir.join(&candidate.path).exists() {
        return Ok(false);
    }
    if let Some(companion) = &candidate.companion
        && !base_dir.join(companion).exists()
    {
        return Ok(false);
    }

    log::debug!("Found candidate {}", candidate.path.display());

    let conflicts = current.diff(&candidate.metadata);
    let decisions = resolve_conflicts(&conflicts, interaction)?;
    current.merge(&candidate.metadata, &decisions)?;

    Ok(true)
}
