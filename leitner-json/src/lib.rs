use chrono::{DateTime, Utc};
use leitner_core::{CoreError, Deck, Persistence};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub mod corpus;
pub mod paths;

const FILE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct FileImage {
    version: u32,
    updated_at: DateTime<Utc>,
    deck: Deck,
}

/// Progress file on disk. Every save rewrites the file atomically and drops a
/// timestamped copy into the backups directory.
pub struct JsonFileBackend {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
}

impl JsonFileBackend {
    pub fn open_with(path: PathBuf, backups_dir: PathBuf, max_backups: usize) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
        })
    }

    pub fn open_in(paths: &paths::DataPaths, max_backups: usize) -> Result<Self, CoreError> {
        Self::open_with(paths.progress.clone(), paths.backups.clone(), max_backups)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFileBackend {
    fn load(&self) -> Result<Option<Deck>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let buf = fs::read_to_string(&self.path)
            .map_err(|e| CoreError::PersistenceRead(format!("{}: {e}", self.path.display())))?;
        let img: FileImage = serde_json::from_str(&buf)
            .map_err(|e| CoreError::PersistenceRead(format!("{}: {e}", self.path.display())))?;
        if img.version != FILE_VERSION {
            return Err(CoreError::PersistenceRead(format!(
                "unsupported progress file version {}",
                img.version
            )));
        }
        Ok(Some(img.deck))
    }

    fn save(&mut self, deck: &Deck) -> Result<(), CoreError> {
        let img = FileImage {
            version: FILE_VERSION,
            updated_at: Utc::now(),
            deck: deck.clone(),
        };
        let json = serde_json::to_vec_pretty(&img).map_err(|e| CoreError::Storage(e.to_string()))?;
        write_with_backup(&self.path, &self.backups_dir, self.max_backups, &json)
            .map_err(|e| CoreError::Storage(format!("{}: {e}", self.path.display())))?;
        tracing::debug!(path = %self.path.display(), records = deck.len(), "progress saved");
        Ok(())
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), CoreError> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| CoreError::Storage(format!("{}: {e}", path.display())))
}

/// Temp file in the target directory, then rename over the target.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_with_backup(path: &Path, backups_dir: &Path, max_backups: usize, json: &[u8]) -> Result<(), std::io::Error> {
    write_atomic(path, json)?;

    // Backup rotation
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
    let backup_path = backups_dir.join(format!("progress-{ts}.json"));
    write_atomic(&backup_path, json)?;

    rotate_backups(backups_dir, max_backups)
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    // names carry the timestamp, so lexical order is age order
    entries.sort();
    if entries.len() > keep {
        for p in &entries[0..entries.len() - keep] {
            let _ = fs::remove_file(p);
        }
    }
    Ok(())
}
