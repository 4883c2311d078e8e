use crate::error::{Error, Result};

use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const USER_AGENT: &str = concat!("europa1400-manager/", env!("CARGO_PKG_VERSION"));

/// SHA-256 of a file as lowercase hex
pub fn checksum(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// First file called `name` anywhere below `dir`
pub fn find_file(dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    for entry in walkdir::WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == name {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}

pub fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET a URL, failing on any non-success status
pub fn fetch(client: &reqwest::blocking::Client, url: &str) -> Result<reqwest::blocking::Response> {
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(Error::DownloadStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

/// Download a file from URL to local path
pub fn download_file(client: &reqwest::blocking::Client, url: &str, dest: &Path) -> Result<()> {
    log::info!("Downloading {}", url);

    let bytes = fetch(client, url)?.bytes()?;
    let mut file = File::create(dest)?;
    file.write_all(&bytes)?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(())
}

/// Extract a zip archive to destination directory
pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let outpath = match file.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => continue,
        };

        if file.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            io::copy(&mut file, &mut outfile)?;
        }
    }

    Ok(())
}

/// Move a file into place.
///
/// Across file systems the file is copied next to `dest` first and renamed
/// afterwards, so `dest` never holds a partial copy.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    let mut partial = dest.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    if let Err(e) = fs::copy(src, &partial).and_then(|_| fs::rename(&partial, dest)) {
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }
    fs::remove_file(src)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_checksum_of_known_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.exe");
        fs::write(&path, b"").unwrap();
        assert_eq!(
            checksum(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        fs::write(&path, b"abc").unwrap();
        assert_eq!(
            checksum(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_find_file_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("ddraw.dll"), b"dll").unwrap();

        assert_eq!(find_file(dir.path(), "ddraw.dll").unwrap(), Some(nested.join("ddraw.dll")));
        assert_eq!(find_file(dir.path(), "missing.dll").unwrap(), None);
    }

    #[test]
    fn test_extract_zip_keeps_structure() {
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("archive.zip");
        testing::write_zip(&zip_path, &[("readme.txt", "hi"), ("bin/ddraw.dll", "dll")]);

        let out = dir.path().join("out");
        extract_zip(&zip_path, &out).unwrap();

        assert_eq!(fs::read(out.join("readme.txt")).unwrap(), b"hi");
        assert_eq!(fs::read(out.join("bin/ddraw.dll")).unwrap(), b"dll");
    }

    #[test]
    fn test_move_file() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.bin");
        let dest = dir.path().join("dest.bin");
        fs::write(&src, b"payload").unwrap();

        move_file(&src, &dest).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"payload");
    }
}
