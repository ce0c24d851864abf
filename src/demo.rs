//! Built-in demo managers for the CLI.
//!
//! Each config component name maps to one concrete manager type attached to
//! the demo root object.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use locus_config::{ROOT_COMPONENTS, normalize_component_name};
use locus_core::{GameManager, GameObject};
use locus_protocols::manager::Manager;

pub(crate) struct AudioManager {
    master_volume: f32,
}

impl Manager for AudioManager {
    fn loaded(&self) {
        info!("Loaded: {} (master volume {:.2})", self.manager_name(), self.master_volume);
    }
}

pub(crate) struct InputManager;

impl Manager for InputManager {}

pub(crate) struct SceneManager {
    active_scene: RwLock<String>,
}

impl SceneManager {
    pub(crate) fn active_scene(&self) -> String {
        self.active_scene.read().clone()
    }
}

impl Manager for SceneManager {
    fn loaded(&self) {
        info!("Loaded: {} (scene '{}')", self.manager_name(), self.active_scene());
    }
}

pub(crate) struct SaveManager;

impl Manager for SaveManager {}

/// Build the demo root object with the named components attached.
///
/// The root bootstrapper is attached first, the way it sits on the same
/// object as the managers in an engine scene.
pub(crate) fn build_root(
    name: &str,
    root: &Arc<GameManager>,
    components: &[String],
) -> Result<GameObject, String> {
    let object = GameObject::new(name);
    object.attach(root.clone());

    for component in components {
        match normalize_component_name(component).as_str() {
            "audio" => object.attach(Arc::new(AudioManager { master_volume: 0.8 })),
            "input" => object.attach(Arc::new(InputManager)),
            "scene" => object.attach(Arc::new(SceneManager {
                active_scene: RwLock::new("Main".to_string()),
            })),
            "save" => object.attach(Arc::new(SaveManager)),
            other => {
                return Err(format!(
                    "unknown component '{}', expected one of: {}",
                    other,
                    ROOT_COMPONENTS.join(", ")
                ));
            }
        }
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core::{AwakeOutcome, BootstrapOptions, GameContext};
    use locus_protocols::host::ComponentHost;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_root_attaches_root_first() {
        let root = Arc::new(GameManager::new(BootstrapOptions::default()));
        let object = build_root("Root", &root, &names(&["audio", "scene"])).unwrap();

        let managers = object.managers();
        assert_eq!(managers.len(), 3);
        assert!(managers[0].key().is::<GameManager>());
        assert!(managers[1].key().is::<AudioManager>());
        assert!(managers[2].key().is::<SceneManager>());
    }

    #[test]
    fn test_build_root_unknown_component() {
        let root = Arc::new(GameManager::new(BootstrapOptions::default()));
        let err = build_root("Root", &root, &names(&["physics"])).err().unwrap();
        assert!(err.contains("physics"));
    }

    #[test]
    fn test_build_root_names_are_case_insensitive() {
        let root = Arc::new(GameManager::new(BootstrapOptions::default()));
        let object = build_root("Root", &root, &names(&[" Audio ", "SAVE"])).unwrap();
        assert_eq!(object.component_count(), 3);
    }

    #[test]
    fn test_demo_bootstrap() {
        let ctx = GameContext::new();
        let root = Arc::new(GameManager::new(BootstrapOptions::default()));
        let object = build_root("Root", &root, &names(ROOT_COMPONENTS)).unwrap();

        let outcome = root.awake(&ctx, &object).unwrap();

        assert_eq!(
            outcome,
            AwakeOutcome::Initialized {
                registered: vec!["AudioManager", "InputManager", "SceneManager", "SaveManager"]
            }
        );
        let scene = ctx.locator().get::<SceneManager>().unwrap();
        assert_eq!(scene.active_scene(), "Main");
    }
}
