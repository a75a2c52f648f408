//! The JSON manifest handed from the session to the viewer process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One panel of the comparison grid, referenced by its staged image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub path: PathBuf,
    pub title: String,
}

/// Ordered list of panels for one presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub panels: Vec<PanelEntry>,
}

impl Manifest {
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::ManifestFormat {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| Error::ManifestFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}
