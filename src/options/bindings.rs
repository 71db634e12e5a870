use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable movement key bindings.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format so TOML
/// files stay readable:
/// ```toml
/// [bindings.movement]
/// forward = "ArrowUp"
/// ```
pub struct BindingOptions {
    /// Maps direction → key string (e.g. `forward` → `"KeyW"`).
    pub movement: HashMap<MoveDirection, String>,
}

impl Default for BindingOptions {
    fn default() -> Self {
        let movement = HashMap::from([
            (MoveDirection::Forward, "KeyW".into()),
            (MoveDirection::Backward, "KeyS".into()),
            (MoveDirection::Left, "KeyA".into()),
            (MoveDirection::Right, "KeyD".into()),
        ]);
        Self { movement }
    }
}

impl BindingOptions {
    /// Look up the movement direction bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveDirection> {
        self.movement
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(direction, _)| *direction)
    }
}
