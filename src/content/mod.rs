//! Content domain: data-driven tuning loaded from `assets/data`.

mod data;
mod loader;


pub use data::Tuning;
pub use loader::{ContentLoadError, load_tuning};

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use std::path::PathBuf;

const DATA_DIR: &str = "data";

/// Directory the asset server reads from, resolved the same way its file
/// reader resolves it.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join(AssetPlugin::default().file_path)
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded synchronously so every later plugin and startup system sees it.
        let data_dir = asset_root().join(DATA_DIR);
        let tuning = match load_tuning(&data_dir) {
            Ok(tuning) => {
                info!("Loaded tuning from {}", data_dir.display());
                tuning
            }
            Err(e) => {
                warn!("{}; using built-in tuning", e);
                Tuning::default()
            }
        };

        app.insert_resource(tuning.sensor.clone())
            .insert_resource(tuning);
    }
}
