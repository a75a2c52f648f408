use clap::{Arg, Command};
use std::error::Error;
use std::path::PathBuf;

use tonelab::manifest::Manifest;
use tonelab::viewer::{self, PanelData};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let matches = Command::new("tonelab-viewer")
        .about("Comparison-grid viewer spawned by the tonelab session")
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("FILE")
                .help("Panel manifest written by the tonelab session")
                .required(true),
        )
        .get_matches();

    let manifest_path = PathBuf::from(matches.get_one::<String>("manifest").unwrap());
    let manifest = Manifest::load(&manifest_path)?;
    log::debug!(
        "presenting {} panels from {}",
        manifest.panels.len(),
        manifest_path.display()
    );

    let mut panels = Vec::with_capacity(manifest.panels.len());
    for entry in manifest.panels {
        let image = image::open(&entry.path)
            .map_err(|source| tonelab::Error::ImageLoad {
                path: entry.path.clone(),
                source,
            })?
            .to_rgb8();
        panels.push(PanelData::new(entry.title, image));
    }

    viewer::run("Tonelab Comparison", panels)?;
    Ok(())
}
