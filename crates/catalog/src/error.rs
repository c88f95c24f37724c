use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("skills directory not found: {}", path.display())]
    SkillsDirNotFound { path: PathBuf },

    #[error("no skills with a SKILL.md found in {}", path.display())]
    NoSkillsFound { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is missing or out of date", path.display())]
    Stale { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn skills_dir_not_found(path: &Path) -> Self {
        Self::SkillsDirNotFound {
            path: path.to_path_buf(),
        }
    }

    #[must_use]
    pub fn no_skills_found(path: &Path) -> Self {
        Self::NoSkillsFound {
            path: path.to_path_buf(),
        }
    }

    #[must_use]
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
