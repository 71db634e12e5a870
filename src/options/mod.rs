//! Runtime configuration with TOML file support.
//!
//! All tweakable settings (window size, camera placement and gains, key
//! bindings) are consolidated here. Every struct carries
//! `#[serde(default)]` so a partial TOML file overriding a single section
//! works.

mod bindings;
mod camera;
mod window;

use std::path::Path;

pub use bindings::BindingOptions;
pub use camera::CameraOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::GlintError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window creation parameters.
    pub window: WindowOptions,
    /// Camera placement, projection, and control parameters.
    pub camera: CameraOptions,
    /// Movement key bindings.
    pub bindings: BindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Io`] if the file cannot be read and
    /// [`GlintError::OptionsParse`] for malformed TOML.
    pub fn load(path: &Path) -> Result<Self, GlintError> {
        let content = std::fs::read_to_string(path).map_err(GlintError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GlintError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::OptionsParse`] if serialization fails and
    /// [`GlintError::Io`] for filesystem failures.
    pub fn save(&self, path: &Path) -> Result<(), GlintError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlintError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlintError::Io)?;
        }
        std::fs::write(path, content).map_err(GlintError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::Options;
    use crate::camera::MoveDirection;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 2.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 2.5);
        // Everything else should be default
        assert_eq!(opts.camera.yaw, -90.0);
        assert_eq!(opts.camera.fov, 45.0);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.window.height, 600);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut opts = Options::default();
        opts.camera.movement_speed = 4.0;
        opts.window.width = 1024;

        let path =
            std::env::temp_dir().join("glint_options_round_trip.toml");
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, loaded);
    }

    #[test]
    fn binding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.bindings.lookup("KeyW"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(
            opts.bindings.lookup("KeyD"),
            Some(MoveDirection::Right)
        );
        assert_eq!(opts.bindings.lookup("KeyZ"), None);
    }

    #[test]
    fn bindings_survive_rebinding_in_toml() {
        let toml_str = r#"
[bindings.movement]
forward = "ArrowUp"
backward = "ArrowDown"
left = "ArrowLeft"
right = "ArrowRight"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.bindings.lookup("ArrowUp"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(opts.bindings.lookup("KeyW"), None);
    }
}
