//! Full reconciliation pass over all candidate groups

use crate::error::Result;
use crate::interaction::Interaction;
use crate::metadata::operations::apply_candidate;
use crate::metadata::types::{CandidateGroup, GameMetadata};

use std::path::Path;

/// Rebuild game metadata from scratch by replaying every candidate group, in
/// order, against the files under `game_path`.
pub fn reconcile(
    groups: &[CandidateGroup],
    game_path: &Path,
    interaction: &mut dyn Interaction,
) -> Result<GameMetadata> {
    let mut metadata = GameMetadata::default();

    for group in groups {
        let mut matched = 0;
        for candidate in &group.candidates {
            if apply_candidate(&mut metadata, candidate, game_path, interaction)? {
                matched += 1;
            }
        }
        log::debug!("Candidate group {}: {} match(es)", group.name, matched);
    }

    log::info!("Detected game metadata: {:?}", metadata);
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::testing::ScriptedInteraction;
    use crate::metadata::pure::builtin_candidate_groups;
    use crate::metadata::types::{Candidate, Drm, Edition, Language, Version};
    use std::fs;
    use tempfile::TempDir;

    fn game_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            fs::write(dir.path().join(file), b"MZ").unwrap();
        }
        dir
    }

    #[test]
    fn test_empty_directory_yields_empty_metadata() {
        let dir = game_dir(&[]);
        let mut interaction = ScriptedInteraction::default();
        let metadata = reconcile(&builtin_candidate_groups(), dir.path(), &mut interaction).unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_german_gold_install() {
        let dir = game_dir(&["GildeGold.exe", "GildeGold_TL.exe"]);
        let mut interaction = ScriptedInteraction::default();

        let metadata = reconcile(&builtin_candidate_groups(), dir.path(), &mut interaction).unwrap();

        assert_eq!(metadata.edition, Some(Edition::Gold));
        assert_eq!(metadata.language, Some(Language::German));
        assert!(interaction.questions.is_empty());
        assert_eq!(metadata.executable_path().unwrap().to_str(), Some("GildeGold.exe"));
    }

    #[test]
    fn test_translation_layer_group_cannot_overwrite_without_prompt() {
        // Standard primary executable next to a gold translation layer
        let dir = game_dir(&["Europa1400.exe", "Europa1400Gold_TL.exe"]);
        let mut interaction = ScriptedInteraction::with_confirms(&[false]);

        let metadata = reconcile(&builtin_candidate_groups(), dir.path(), &mut interaction).unwrap();

        assert_eq!(metadata.edition, Some(Edition::Standard));
        assert_eq!(interaction.questions, vec!["Change edition from standard to gold?".to_string()]);
    }

    #[test]
    fn test_translation_layer_group_adds_language() {
        let dir = game_dir(&["Europa1400.exe", "Gilde_TL.exe"]);
        let mut interaction = ScriptedInteraction::default();

        let metadata = reconcile(&builtin_candidate_groups(), dir.path(), &mut interaction).unwrap();

        assert_eq!(metadata.edition, Some(Edition::Standard));
        assert_eq!(metadata.language, Some(Language::German));
        assert!(interaction.questions.is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let dir = game_dir(&["Gilde.exe", "GildeGold.exe", "Gilde_TL.exe"]);
        let groups = builtin_candidate_groups();

        // Adopt gold from GildeGold.exe, then keep it against Gilde_TL.exe
        let mut first = ScriptedInteraction::with_confirms(&[true, false]);
        let mut second = ScriptedInteraction::with_confirms(&[true, false]);
        let a = reconcile(&groups, dir.path(), &mut first).unwrap();
        let b = reconcile(&groups, dir.path(), &mut second).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.questions, second.questions);
        assert_eq!(first.questions.len(), 2);
        assert_eq!(a.edition, Some(Edition::Gold));
        assert_eq!(a.language, Some(Language::German));
    }

    #[test]
    fn test_later_candidates_refine_unset_fields() {
        let dir = game_dir(&["a.exe", "b.exe"]);
        let groups = vec![CandidateGroup {
            name: "custom".to_string(),
            candidates: vec![
                Candidate::new(
                    "a.exe",
                    GameMetadata {
                        edition: Some(Edition::Gold),
                        ..Default::default()
                    },
                ),
                Candidate::new(
                    "b.exe",
                    GameMetadata {
                        version: Some(Version::V2_06),
                        drm: Some(Drm::Steam),
                        ..Default::default()
                    },
                ),
            ],
        }];
        let mut interaction = ScriptedInteraction::default();

        let metadata = reconcile(&groups, dir.path(), &mut interaction).unwrap();
        assert_eq!(metadata.edition, Some(Edition::Gold));
        assert_eq!(metadata.version, Some(Version::V2_06));
        assert_eq!(metadata.drm, Some(Drm::Steam));
    }
}
