//! The display capability: present the comparison grid and block until the
//! user dismisses it.

use std::path::PathBuf;
use std::process::Command;

use image::RgbImage;

use crate::error::{Error, Result};
use crate::manifest::{Manifest, PanelEntry};

const VIEWER_BIN: &str = "tonelab-viewer";

/// One row of the comparison grid.
pub struct Panel {
    pub image: RgbImage,
    pub title: String,
}

/// Capability to present the comparison grid, blocking until the user
/// dismisses it. The session loop only depends on this trait, so tests can
/// substitute a double that dismisses immediately.
pub trait Present {
    fn present(&mut self, panels: &[Panel]) -> Result<()>;
}

/// Presents panels by handing them to the `tonelab-viewer` binary and
/// waiting for it to exit.
///
/// A native window event loop cannot be torn down and recreated within one
/// process, so the viewer lives in a child process. Panels travel through a
/// temporary directory as PNG files plus a JSON manifest; the directory is
/// removed once the viewer exits.
#[derive(Debug, Default)]
pub struct ViewerProcess;

impl ViewerProcess {
    // The viewer ships next to the session binary; fall back to a PATH
    // lookup when the sibling is missing.
    fn command() -> Command {
        let sibling = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(VIEWER_BIN)));
        match sibling {
            Some(path) if path.is_file() => Command::new(path),
            _ => Command::new(VIEWER_BIN),
        }
    }

    fn stage(panels: &[Panel], dir: &std::path::Path) -> Result<PathBuf> {
        let mut entries = Vec::with_capacity(panels.len());
        for (index, panel) in panels.iter().enumerate() {
            let path = dir.join(format!("panel_{index}.png"));
            panel.image.save(&path).map_err(|source| Error::ImageSave {
                path: path.clone(),
                source,
            })?;
            entries.push(PanelEntry {
                path,
                title: panel.title.clone(),
            });
        }

        let manifest_path = dir.join("panels.json");
        Manifest { panels: entries }.save(&manifest_path)?;
        Ok(manifest_path)
    }
}

impl Present for ViewerProcess {
    fn present(&mut self, panels: &[Panel]) -> Result<()> {
        let staging = tempfile::tempdir()?;
        let manifest_path = Self::stage(panels, staging.path())?;

        log::debug!("launching {VIEWER_BIN} with {}", manifest_path.display());
        let status = Self::command()
            .arg("--manifest")
            .arg(&manifest_path)
            .status()
            .map_err(|source| Error::ViewerLaunch { source })?;

        if !status.success() {
            return Err(Error::ViewerExit { status });
        }
        Ok(())
    }
}
