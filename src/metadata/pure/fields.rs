//! Accessor table over the metadata fields

use crate::metadata::types::{FieldValue, GameMetadata, MetadataField};

/// Reads and writes one field of [`GameMetadata`] as a [`FieldValue`]
pub struct FieldAccess {
    pub field: MetadataField,
    pub get: fn(&GameMetadata) -> Option<FieldValue>,
    /// Ignores values tagged with a different field
    pub set: fn(&mut GameMetadata, FieldValue),
}

macro_rules! access {
    ($variant:ident, $field:ident) => {
        FieldAccess {
            field: MetadataField::$variant,
            get: |m| m.$field.map(FieldValue::$variant),
            set: |m, v| {
                if let FieldValue::$variant(value) = v {
                    m.$field = Some(value);
                }
            },
        }
    };
}

/// All fields in declaration order
pub const FIELDS: [FieldAccess; 5] = [
    access!(Edition, edition),
    access!(Version, version),
    access!(Distribution, distribution),
    access!(Language, language),
    access!(Drm, drm),
];
