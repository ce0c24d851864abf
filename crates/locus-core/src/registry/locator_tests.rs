use super::*;
use std::sync::Barrier;
use std::thread;

use locus_protocols::manager::Manager;

#[derive(Debug)]
struct AudioManager {
    volume: u8,
}

impl Manager for AudioManager {}

struct InputManager;

impl Manager for InputManager {}

#[derive(Debug)]
struct SceneManager;

#[test]
fn test_locator_new() {
    let locator = ManagerLocator::new();
    assert!(locator.is_empty());
    assert_eq!(locator.len(), 0);
}

#[test]
fn test_locator_default() {
    let locator = ManagerLocator::default();
    assert!(locator.is_empty());
}

#[test]
fn test_register_then_get_returns_same_instance() {
    let locator = ManagerLocator::new();
    let audio = Arc::new(AudioManager { volume: 3 });

    locator.register(audio.clone()).unwrap();

    let found = locator.get::<AudioManager>().unwrap();
    assert!(Arc::ptr_eq(&found, &audio));
    assert_eq!(found.volume, 3);
    assert_eq!(locator.len(), 1);
}

#[test]
fn test_register_duplicate_keeps_first() {
    let locator = ManagerLocator::new();
    let first = Arc::new(AudioManager { volume: 1 });
    let second = Arc::new(AudioManager { volume: 2 });

    locator.register(first.clone()).unwrap();
    let result = locator.register(second);

    assert!(matches!(result, Err(LocatorError::DuplicateRegistration(_))));
    assert_eq!(locator.len(), 1);
    let found = locator.get::<AudioManager>().unwrap();
    assert!(Arc::ptr_eq(&found, &first));
}

#[test]
fn test_register_none_is_null_argument() {
    let locator = ManagerLocator::new();

    let result = locator.register_optional::<AudioManager>(None);

    match result {
        Err(LocatorError::NullArgument(name)) => assert!(name.ends_with("AudioManager")),
        other => panic!("expected NullArgument, got {:?}", other),
    }
    assert!(locator.is_empty());
}

#[test]
fn test_register_optional_some() {
    let locator = ManagerLocator::new();
    locator
        .register_optional(Some(Arc::new(AudioManager { volume: 0 })))
        .unwrap();
    assert!(locator.contains::<AudioManager>());
}

#[test]
fn test_get_unregistered() {
    let locator = ManagerLocator::new();
    let result = locator.get::<AudioManager>();
    assert!(matches!(result, Err(LocatorError::NotRegistered(_))));
}

#[test]
fn test_get_is_exact_type() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(AudioManager { volume: 0 })).unwrap();

    assert!(locator.get::<InputManager>().is_err());
    assert!(locator.get::<SceneManager>().is_err());
}

#[test]
fn test_non_manager_types_can_be_registered() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(SceneManager)).unwrap();
    assert!(locator.get::<SceneManager>().is_ok());
}

#[test]
fn test_deregister() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(AudioManager { volume: 0 })).unwrap();

    assert!(locator.deregister::<AudioManager>());
    assert!(matches!(
        locator.get::<AudioManager>(),
        Err(LocatorError::NotRegistered(_))
    ));
    assert!(!locator.deregister::<AudioManager>());
}

#[test]
fn test_deregister_nonexistent() {
    let locator = ManagerLocator::new();
    assert!(!locator.deregister::<InputManager>());
}

#[test]
fn test_register_after_deregister() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(AudioManager { volume: 1 })).unwrap();
    locator.deregister::<AudioManager>();

    let replacement = Arc::new(AudioManager { volume: 9 });
    locator.register(replacement.clone()).unwrap();
    assert!(Arc::ptr_eq(&locator.get::<AudioManager>().unwrap(), &replacement));
}

#[test]
fn test_clear_all() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(AudioManager { volume: 0 })).unwrap();
    locator.register(Arc::new(InputManager)).unwrap();
    locator.register(Arc::new(SceneManager)).unwrap();

    locator.clear_all();

    assert!(locator.is_empty());
    assert!(locator.get::<AudioManager>().is_err());
    assert!(locator.get::<InputManager>().is_err());
    assert!(locator.get::<SceneManager>().is_err());
}

#[test]
fn test_clear_all_empty() {
    let locator = ManagerLocator::new();
    locator.clear_all();
    assert!(locator.is_empty());
}

#[test]
fn test_contains() {
    let locator = ManagerLocator::new();
    assert!(!locator.contains::<InputManager>());
    locator.register(Arc::new(InputManager)).unwrap();
    assert!(locator.contains::<InputManager>());
}

#[test]
fn test_registered_types() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(InputManager)).unwrap();
    locator.register(Arc::new(AudioManager { volume: 0 })).unwrap();

    let names = locator.registered_types();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|n| n.ends_with("::AudioManager")));
    assert!(names.iter().any(|n| n.ends_with("::InputManager")));
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_register_component() {
    let locator = ManagerLocator::new();
    let audio = Arc::new(AudioManager { volume: 5 });
    let component = ManagerComponent::new(audio.clone());

    locator.register_component(&component).unwrap();

    let found = locator.get::<AudioManager>().unwrap();
    assert!(Arc::ptr_eq(&found, &audio));
}

#[test]
fn test_register_component_duplicate() {
    let locator = ManagerLocator::new();
    locator.register(Arc::new(InputManager)).unwrap();

    let component = ManagerComponent::new(Arc::new(InputManager));
    let result = locator.register_component(&component);
    assert!(matches!(result, Err(LocatorError::DuplicateRegistration(_))));
}

#[test]
fn test_concurrent_register_once() {
    let locator = Arc::new(ManagerLocator::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let locator = locator.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                locator.register(Arc::new(AudioManager { volume: i })).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(locator.len(), 1);
}

#[test]
fn test_concurrent_readers_see_registered_instance() {
    let locator = Arc::new(ManagerLocator::new());
    let audio = Arc::new(AudioManager { volume: 4 });
    locator.register(audio.clone()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let locator = locator.clone();
            thread::spawn(move || locator.get::<AudioManager>().unwrap().volume)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
}
