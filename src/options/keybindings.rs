use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::Movement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement directions to key codes.
pub struct KeybindingOptions {
    /// Maps direction → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<Movement, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_movement: HashMap<String, Movement>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (Movement::Forward, "KeyW".into()),
            (Movement::Backward, "KeyS".into()),
            (Movement::Left, "KeyA".into()),
            (Movement::Right, "KeyD".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_movement: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → direction).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_movement.clear();
        for (direction, key) in &self.bindings {
            let _ = self.key_to_movement.insert(key.clone(), *direction);
        }
    }

    /// Look up the movement direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Movement> {
        self.key_to_movement.get(key).copied()
    }
}
