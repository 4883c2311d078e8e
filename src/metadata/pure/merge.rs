//! Field-level diff and merge of game metadata

use super::fields::FIELDS;
use crate::error::{Error, Result};
use crate::metadata::types::{Conflict, FieldValue, GameMetadata};

/// Fields where both sides are set and disagree.
///
/// A field unset on either side carries no information and is never a
/// conflict.
pub fn diff(current: &GameMetadata, incoming: &GameMetadata) -> Vec<Conflict> {
    FIELDS
        .iter()
        .filter_map(|access| {
            let current_value = (access.get)(current)?;
            let incoming_value = (access.get)(incoming)?;
            (current_value != incoming_value).then_some(Conflict {
                field: access.field,
                incoming: incoming_value,
                current: current_value,
            })
        })
        .collect()
}

/// Merge `incoming` into `current` field by field.
///
/// `decisions` holds the chosen value for each conflicting field. Unset
/// fields of `current` are filled from `incoming` without a decision, unset
/// fields of `incoming` leave `current` untouched. Fails with
/// [`Error::MissingDecision`] when both sides disagree and no chosen value is
/// given for that field; `current` is only written once every field resolved.
pub fn merge(current: &mut GameMetadata, incoming: &GameMetadata, decisions: &[FieldValue]) -> Result<()> {
    let mut updates = Vec::with_capacity(FIELDS.len());

    for access in FIELDS.iter() {
        let Some(incoming_value) = (access.get)(incoming) else {
            continue;
        };

        let chosen = match (access.get)(current) {
            None => incoming_value,
            Some(current_value) if current_value == incoming_value => continue,
            Some(_) => decisions
                .iter()
                .copied()
                .find(|d| d.field() == access.field)
                .ok_or(Error::MissingDecision(access.field))?,
        };

        updates.push((access, chosen));
    }

    for (access, chosen) in updates {
        (access.set)(current, chosen);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::types::{Distribution, Drm, Edition, Language, MetadataField, Version};

    fn full() -> GameMetadata {
        GameMetadata {
            edition: Some(Edition::Gold),
            version: Some(Version::V2_06),
            distribution: Some(Distribution::Steam),
            language: Some(Language::English),
            drm: Some(Drm::Steam),
        }
    }

    #[test]
    fn test_diff_unset_side_yields_no_conflicts() {
        assert!(diff(&GameMetadata::default(), &full()).is_empty());
        assert!(diff(&full(), &GameMetadata::default()).is_empty());
    }

    #[test]
    fn test_diff_reports_incoming_and_current() {
        let current = GameMetadata {
            edition: Some(Edition::Standard),
            language: Some(Language::German),
            ..Default::default()
        };
        let incoming = GameMetadata {
            edition: Some(Edition::Gold),
            language: Some(Language::German),
            drm: Some(Drm::None),
            ..Default::default()
        };

        let conflicts = diff(&current, &incoming);
        assert_eq!(
            conflicts,
            vec![Conflict {
                field: MetadataField::Edition,
                incoming: FieldValue::Edition(Edition::Gold),
                current: FieldValue::Edition(Edition::Standard),
            }]
        );
    }

    #[test]
    fn test_merge_fills_unset_fields_without_decisions() {
        let mut current = GameMetadata {
            edition: Some(Edition::Gold),
            ..Default::default()
        };
        let incoming = GameMetadata {
            language: Some(Language::German),
            ..Default::default()
        };

        merge(&mut current, &incoming, &[]).unwrap();
        assert_eq!(current.edition, Some(Edition::Gold));
        assert_eq!(current.language, Some(Language::German));
        assert_eq!(current.version, None);
    }

    #[test]
    fn test_merge_never_clears_set_field() {
        let mut current = full();
        merge(&mut current, &GameMetadata::default(), &[]).unwrap();
        assert_eq!(current, full());
    }

    #[test]
    fn test_merge_equal_values_needs_no_decision() {
        let mut current = full();
        merge(&mut current, &full(), &[]).unwrap();
        assert_eq!(current, full());
    }

    #[test]
    fn test_merge_conflict_without_decision_fails() {
        let mut current = full();
        let incoming = GameMetadata {
            edition: Some(Edition::Standard),
            ..Default::default()
        };

        let err = merge(&mut current, &incoming, &[FieldValue::Drm(Drm::None)]).unwrap_err();
        assert!(matches!(err, Error::MissingDecision(MetadataField::Edition)));
        assert_eq!(current.edition, Some(Edition::Gold));
    }

    #[test]
    fn test_failed_merge_leaves_current_unchanged() {
        let mut current = GameMetadata {
            drm: Some(Drm::Steam),
            ..Default::default()
        };
        let before = current.clone();
        let incoming = GameMetadata {
            edition: Some(Edition::Gold),
            drm: Some(Drm::None),
            ..Default::default()
        };

        let err = merge(&mut current, &incoming, &[]).unwrap_err();
        assert!(matches!(err, Error::MissingDecision(MetadataField::Drm)));
        assert_eq!(current, before);
    }

    #[test]
    fn test_merge_applies_chosen_value() {
        let mut current = full();
        let incoming = GameMetadata {
            edition: Some(Edition::Standard),
            drm: Some(Drm::Securom4),
            ..Default::default()
        };

        // Keep the current edition, adopt the incoming DRM
        let decisions = [FieldValue::Edition(Edition::Gold), FieldValue::Drm(Drm::Securom4)];
        merge(&mut current, &incoming, &decisions).unwrap();

        assert_eq!(current.edition, Some(Edition::Gold));
        assert_eq!(current.drm, Some(Drm::Securom4));
        assert_eq!(current.version, Some(Version::V2_06));
    }
}
