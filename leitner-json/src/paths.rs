use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub fn data_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "leitner", "Leitner") {
        pd.data_dir().to_path_buf()
    } else {
        // Fallback: current dir
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Files the app keeps under one data directory.
#[derive(Clone, Debug)]
pub struct DataPaths {
    pub progress: PathBuf,
    pub corpus: PathBuf,
    pub backups: PathBuf,
}

impl DataPaths {
    pub fn under(root: &Path) -> Self {
        Self {
            progress: root.join("progress.json"),
            corpus: root.join("corpus.json"),
            backups: root.join("backups"),
        }
    }
}
