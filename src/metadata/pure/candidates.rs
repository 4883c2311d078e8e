//! Built-in executable candidates

use super::executables::*;
use crate::metadata::types::{Candidate, CandidateGroup, Edition, GameMetadata, Language};

fn implies(edition: Edition, language: Option<Language>) -> GameMetadata {
    GameMetadata {
        edition: Some(edition),
        language,
        ..Default::default()
    }
}

fn group(name: &str, files: [(&str, GameMetadata); 4]) -> CandidateGroup {
    CandidateGroup {
        name: name.to_string(),
        candidates: files
            .into_iter()
            .map(|(path, metadata)| Candidate::new(path, metadata))
            .collect(),
    }
}

/// Primary executables first, translation-layer executables second
pub fn builtin_candidate_groups() -> Vec<CandidateGroup> {
    vec![
        group(
            "executables",
            [
                (GILDE_EXE_PATH, implies(Edition::Standard, Some(Language::German))),
                (GILDE_GOLD_EXE_PATH, implies(Edition::Gold, Some(Language::German))),
                (EUROPA1400_EXE_PATH, implies(Edition::Standard, None)),
                (EUROPA1400_GOLD_EXE_PATH, implies(Edition::Gold, None)),
            ],
        ),
        group(
            "tl_executables",
            [
                (GILDE_TL_EXE_PATH, implies(Edition::Standard, Some(Language::German))),
                (GILDE_GOLD_TL_EXE_PATH, implies(Edition::Gold, Some(Language::German))),
                (EUROPA1400_TL_EXE_PATH, implies(Edition::Standard, None)),
                (EUROPA1400_GOLD_TL_EXE_PATH, implies(Edition::Gold, None)),
            ],
        ),
    ]
}
