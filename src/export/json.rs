use super::ExportError;
use crate::noise_map::{NoiseMap, NoiseMapConfig};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// On-disk document: the seed and configuration alongside the finished grid.
#[derive(Serialize)]
struct MapDocument<'a> {
    seed: u32,
    config: &'a NoiseMapConfig,
    map: &'a NoiseMap,
}

pub fn export_json(
    seed: u32,
    config: &NoiseMapConfig,
    map: &NoiseMap,
    path: &Path,
) -> Result<(), ExportError> {
    let doc = MapDocument { seed, config, map };
    let json = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    log::info!("wrote {}", path.display());
    Ok(())
}
