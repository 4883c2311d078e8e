//! Table fetching

use super::types::{DatabaseSource, Table, Tables};
use crate::error::Result;
use crate::util::fetch;

use serde::de::DeserializeOwned;

pub fn fetch_table<T: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    source: &DatabaseSource,
    file_name: &str,
) -> Result<Table<T>> {
    let url = source.table_url(file_name);
    log::debug!("Fetching table {}", url);

    let text = fetch(client, &url)?.text()?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Tables that fail to load are logged and left empty
fn fetch_or_empty<T: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    source: &DatabaseSource,
    file_name: &str,
) -> Table<T> {
    fetch_table(client, source, file_name).unwrap_or_else(|e| {
        log::warn!("Failed to fetch table {}: {}", file_name, e);
        Table::default()
    })
}

pub fn fetch_tables(client: &reqwest::blocking::Client, source: &DatabaseSource) -> Tables {
    Tables {
        languages: fetch_or_empty(client, source, "language.yml"),
        editions: fetch_or_empty(client, source, "edition.yml"),
        versions: fetch_or_empty(client, source, "version.yml"),
        distributions: fetch_or_empty(client, source, "distribution.yml"),
        drms: fetch_or_empty(client, source, "drm.yml"),
        executables: fetch_or_empty(client, source, "executable.yml"),
        executable_to_metadata: fetch_or_empty(client, source, "executable_to_metadata.yml"),
    }
}
