//! Metadata type definitions

use crate::error::{Error, Result};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Declares a categorical value with a stable string id.
///
/// The id is used for (de)serialization, `Display` and `FromStr`.
macro_rules! id_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| Error::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let id = String::deserialize(deserializer)?;
                id.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

id_enum!(
    /// Retail edition of the game
    Edition, "edition" {
        Standard => "standard",
        Gold => "gold",
    }
);

id_enum!(
    Language, "language" {
        English => "en",
        German => "de",
        Russian => "ru",
    }
);

id_enum!(
    /// Patch level reported by the game
    Version, "version" {
        V1_01 => "v1.01",
        V1_02 => "v1.02",
        V1_03b => "v1.03b",
        V1_04 => "v1.04",
        V1_05b => "v1.05b",
        V2_01 => "v2.01",
        V2_02 => "v2.02",
        V2_03 => "v2.03",
        V2_04 => "v2.04",
        V2_05 => "v2.05",
        V2_06 => "v2.06",
    }
);

id_enum!(
    Distribution, "distribution" {
        Steam => "steam",
        Gog => "gog",
        Retail => "retail",
    }
);

id_enum!(
    /// Copy protection shipped with the executable
    Drm, "drm" {
        None => "none",
        Steam => "steam",
        Securom4 => "securom4",
    }
);

/// Detected (or partially detected) game variant.
///
/// Every field starts unset. A field that is unset means "no information",
/// never "known to be absent".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<Edition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drm: Option<Drm>,
}

#[cfg(test)]
impl GameMetadata {
    pub fn is_empty(&self) -> bool {
        *self == GameMetadata::default()
    }
}

/// Names one of the five metadata fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Edition,
    Version,
    Distribution,
    Language,
    Drm,
}

impl MetadataField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataField::Edition => "edition",
            MetadataField::Version => "version",
            MetadataField::Distribution => "distribution",
            MetadataField::Language => "language",
            MetadataField::Drm => "drm",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value of any metadata field, tagged with the field it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Edition(Edition),
    Version(Version),
    Distribution(Distribution),
    Language(Language),
    Drm(Drm),
}

impl FieldValue {
    pub fn field(&self) -> MetadataField {
        match self {
            FieldValue::Edition(_) => MetadataField::Edition,
            FieldValue::Version(_) => MetadataField::Version,
            FieldValue::Distribution(_) => MetadataField::Distribution,
            FieldValue::Language(_) => MetadataField::Language,
            FieldValue::Drm(_) => MetadataField::Drm,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Edition(v) => v.fmt(f),
            FieldValue::Version(v) => v.fmt(f),
            FieldValue::Distribution(v) => v.fmt(f),
            FieldValue::Language(v) => v.fmt(f),
            FieldValue::Drm(v) => v.fmt(f),
        }
    }
}

/// Disagreement on one field between known and newly detected metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub field: MetadataField,
    pub incoming: FieldValue,
    pub current: FieldValue,
}

/// A file whose presence implies part of the game metadata
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Path relative to the game directory
    pub path: PathBuf,
    /// Second file that must exist next to `path` for the candidate to match
    pub companion: Option<PathBuf>,
    pub metadata: GameMetadata,
}

impl Candidate {
    pub fn new(path: impl Into<PathBuf>, metadata: GameMetadata) -> Self {
        Self {
            path: path.into(),
            companion: None,
            metadata,
        }
    }

    pub fn with_companion(mut self, companion: impl Into<PathBuf>) -> Self {
        self.companion = Some(companion.into());
        self
    }
}

/// Ordered set of candidates tried together
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateGroup {
    pub name: String,
    pub candidates: Vec<Candidate>,
}
