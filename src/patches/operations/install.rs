use crate::error::{Error, Result};
use crate::util::{download_file, extract_zip, find_file, move_file};

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Download a zip archive and install the file called `artifact_name` from
/// it to `dest`.
///
/// All intermediate files live in a temporary directory that is removed on
/// return, whether the install succeeded or not.
pub fn install_zip_artifact(
    client: &reqwest::blocking::Client,
    url: &str,
    artifact_name: &str,
    dest: &Path,
) -> Result<()> {
    let staging = TempDir::new()?;
    let zip_path = staging.path().join("download.zip");

    download_file(client, url, &zip_path)?;
    install_from_archive(&zip_path, staging.path(), artifact_name, dest)
}

/// Extract `zip_path` below `staging`, locate `artifact_name` anywhere in it
/// and move it to `dest`
pub fn install_from_archive(zip_path: &Path, staging: &Path, artifact_name: &str, dest: &Path) -> Result<()> {
    let extract_dir = staging.join("extracted");
    extract_zip(zip_path, &extract_dir)?;

    let src = find_file(&extract_dir, artifact_name)?.ok_or_else(|| Error::ArtifactNotFound {
        name: artifact_name.to_string(),
        dir: extract_dir.clone(),
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    move_file(&src, dest)?;

    log::info!("Installed {} to {}", artifact_name, dest.display());
    Ok(())
}

/// Delete an installed file. Returns whether there was anything to delete.
pub fn remove_artifact(dest: &Path) -> Result<bool> {
    match fs::remove_file(dest) {
        Ok(()) => {
            log::info!("Removed {}", dest.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
