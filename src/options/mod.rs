//! Centralized camera configuration with TOML preset support.
//!
//! All tweakable settings (initial pose, tuning parameters, movement key
//! bindings) are consolidated here. Options serialize to/from TOML for
//! presets stored wherever the caller keeps them.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera pose and control parameters.
    pub camera: CameraOptions,
    /// Movement key bindings.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FlycamError::Io`] if the file cannot be read and
    /// [`FlycamError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        // The reverse lookup map is serde(skip); rebuild it here.
        opts.keybindings.rebuild_reverse_map();
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`FlycamError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)?;
        log::debug!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Movement;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 7.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 7.5);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.camera.yaw, -90.0);
        assert_eq!(opts.camera.world_up, [0.0, 1.0, 0.0]);
        assert!(opts.camera.constrain_pitch);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(Movement::Forward));
        assert_eq!(opts.keybindings.lookup("KeyS"), Some(Movement::Backward));
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(Movement::Left));
        assert_eq!(opts.keybindings.lookup("KeyD"), Some(Movement::Right));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_bindings_survive_a_round_trip() {
        let mut opts = Options::default();
        let _ = opts
            .keybindings
            .bindings
            .insert(Movement::Forward, "ArrowUp".into());
        opts.keybindings.rebuild_reverse_map();

        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(parsed.keybindings.lookup("ArrowUp"), Some(Movement::Forward));
        assert_eq!(parsed.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("flycam-options-test");
        let path = dir.join("preset.toml");

        let mut opts = Options::default();
        opts.camera.position = [1.0, 2.0, 3.0];
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("KeyW"), Some(Movement::Forward));

        let presets = Options::list_presets(&dir);
        assert!(presets.contains(&"preset".to_owned()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/preset.toml"))
            .unwrap_err();
        assert!(matches!(err, FlycamError::Io(_)));
    }

    #[test]
    fn load_malformed_toml_is_a_parse_error() {
        let dir = std::env::temp_dir().join("flycam-options-bad-toml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
