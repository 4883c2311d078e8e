//! Database table definitions

use crate::error::{Error, Result};
use crate::metadata::{Candidate, CandidateGroup, GameMetadata};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub const ENV_DATABASE_REPOSITORY_URL: &str = "DATABASE_REPOSITORY_URL";
pub const ENV_DATABASE_BRANCH: &str = "DATABASE_BRANCH";
pub const ENV_DATABASE_BASE_PATH: &str = "DATABASE_BASE_PATH";

pub const DEFAULT_DATABASE_REPOSITORY_URL: &str =
    "https://raw.githubusercontent.com/europa1400-community/europa1400-database";
pub const DEFAULT_DATABASE_BRANCH: &str = "main";
pub const DEFAULT_DATABASE_BASE_PATH: &str = "database";

/// Where the table files are published
#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseSource {
    pub repository_url: String,
    pub branch: String,
    pub base_path: String,
}

impl Default for DatabaseSource {
    fn default() -> Self {
        Self {
            repository_url: DEFAULT_DATABASE_REPOSITORY_URL.to_string(),
            branch: DEFAULT_DATABASE_BRANCH.to_string(),
            base_path: DEFAULT_DATABASE_BASE_PATH.to_string(),
        }
    }
}

impl DatabaseSource {
    pub fn from_env() -> Self {
        let read = |name: &str, default: &str| env::var(name).unwrap_or_else(|_| default.to_string());
        Self {
            repository_url: read(ENV_DATABASE_REPOSITORY_URL, DEFAULT_DATABASE_REPOSITORY_URL),
            branch: read(ENV_DATABASE_BRANCH, DEFAULT_DATABASE_BRANCH),
            base_path: read(ENV_DATABASE_BASE_PATH, DEFAULT_DATABASE_BASE_PATH),
        }
    }

    pub fn table_url(&self, file_name: &str) -> String {
        let mut url = format!("{}/{}", self.repository_url.trim_end_matches('/'), self.branch);
        let base_path = self.base_path.trim_matches('/');
        if !base_path.is_empty() {
            url.push('/');
            url.push_str(base_path);
        }
        url.push('/');
        url.push_str(file_name);
        url
    }
}

/// Anything stored in a table
pub trait Element {
    fn id(&self) -> &str;
}

/// Plain id/name record used by the enum tables
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NamedElement {
    pub id: String,
    pub name: String,
}

impl Element for NamedElement {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GameExecutable {
    pub id: String,
    pub path: String,
    pub tl_path: String,
}

impl Element for GameExecutable {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Metadata expressed as table ids
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MetadataIds {
    pub edition: Option<String>,
    pub version: Option<String>,
    pub distribution: Option<String>,
    pub language: Option<String>,
    pub drm: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ExecutableToMetadata {
    pub id: String,
    pub executable: String,
    pub metadata: MetadataIds,
}

impl Element for ExecutableToMetadata {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One table file
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(bound = "T: DeserializeOwned")]
pub struct Table<T> {
    pub id: String,
    pub name: String,
    pub elements: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            elements: Vec::new(),
        }
    }
}

impl<T: Element> Table<T> {
    pub fn element(&self, id: &str) -> Result<&T> {
        self.elements
            .iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| Error::ElementNotFound {
                id: id.to_string(),
                table: self.id.clone(),
            })
    }

    /// Look `id` up in this table and parse it into the matching value
    fn resolve<V: FromStr<Err = Error>>(&self, id: Option<&String>) -> Result<Option<V>> {
        match id {
            Some(id) => {
                self.element(id)?;
                Ok(Some(id.parse()?))
            }
            None => Ok(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tables {
    pub languages: Table<NamedElement>,
    pub editions: Table<NamedElement>,
    pub versions: Table<NamedElement>,
    pub distributions: Table<NamedElement>,
    pub drms: Table<NamedElement>,
    pub executables: Table<GameExecutable>,
    pub executable_to_metadata: Table<ExecutableToMetadata>,
}

impl Tables {
    pub fn resolve_metadata(&self, ids: &MetadataIds) -> Result<GameMetadata> {
        Ok(GameMetadata {
            edition: self.editions.resolve(ids.edition.as_ref())?,
            version: self.versions.resolve(ids.version.as_ref())?,
            distribution: self.distributions.resolve(ids.distribution.as_ref())?,
            language: self.languages.resolve(ids.language.as_ref())?,
            drm: self.drms.resolve(ids.drm.as_ref())?,
        })
    }

    /// One candidate per mapping, in table order. The executable must be
    /// present together with its translation-layer executable.
    pub fn candidate_group(&self) -> Result<CandidateGroup> {
        let candidates = self
            .executable_to_metadata
            .elements
            .iter()
            .map(|mapping| {
                let executable = self.executables.element(&mapping.executable)?;
                let metadata = self.resolve_metadata(&mapping.metadata)?;
                Ok(Candidate::new(&executable.path, metadata).with_companion(&executable.tl_path))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CandidateGroup {
            name: self.executable_to_metadata.id.clone(),
            candidates,
        })
    }
}
