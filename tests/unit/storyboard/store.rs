use super::*;

use crate::storyboard::model::{CharacterAppearance, TransitionSpec};

fn board(scene_ids: &[&str]) -> Storyboard {
    Storyboard {
        style: Style::Noir,
        characters: vec![
            Character {
                id: "det".to_string(),
                name: "The Detective".to_string(),
                color: 13,
            },
            Character {
                id: "witness".to_string(),
                name: "The Witness".to_string(),
                color: 99,
            },
        ],
        environments: vec![Environment {
            id: "office".to_string(),
            name: "Rain-streaked office".to_string(),
        }],
        scenes: scene_ids
            .iter()
            .map(|id| Scene {
                id: id.to_string(),
                title: format!("Scene {id}"),
                description: "…".to_string(),
                environment_id: "office".to_string(),
                transition: TransitionSpec::default(),
                characters: vec![CharacterAppearance {
                    character_id: "det".to_string(),
                    emotion: Some("tired".to_string()),
                    dialogue: None,
                }],
            })
            .collect(),
    }
}

#[test]
fn empty_store_yields_defined_empty_results() {
    let store = SceneStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.style(), None);
    assert!(store.scene_at(SceneIndex(0)).is_none());
    assert!(store.find_character("det").is_none());
    assert!(store.find_environment("office").is_none());
}

#[test]
fn install_builds_order_and_lookups() {
    let mut store = SceneStore::new();
    store.install(board(&["a", "b", "c"]));

    assert_eq!(store.len(), 3);
    assert_eq!(store.style(), Some(Style::Noir));
    assert_eq!(store.scene_at(SceneIndex(0)).unwrap().id, "a");
    assert_eq!(store.scene_at(SceneIndex(2)).unwrap().id, "c");
    assert!(store.scene_at(SceneIndex(3)).is_none());

    assert_eq!(store.find_character("det").unwrap().name, "The Detective");
    assert_eq!(
        store.find_environment("office").unwrap().name,
        "Rain-streaked office"
    );
}

#[test]
fn missing_references_are_explicit_not_found() {
    let mut store = SceneStore::new();
    store.install(board(&["a"]));

    assert!(store.find_character("nobody").is_none());
    assert!(store.find_environment("nowhere").is_none());
}

#[test]
fn install_replaces_previous_result_atomically() {
    let mut store = SceneStore::new();
    store.install(board(&["a", "b"]));

    let mut replacement = board(&["x"]);
    replacement.characters = vec![Character {
        id: "captain".to_string(),
        name: "The Captain".to_string(),
        color: 1,
    }];
    store.install(replacement);

    // Only the new result is observable: old scenes and roster are gone.
    assert_eq!(store.len(), 1);
    assert_eq!(store.scene_at(SceneIndex(0)).unwrap().id, "x");
    assert!(store.find_character("det").is_none());
    assert_eq!(store.find_character("captain").unwrap().name, "The Captain");
}

#[test]
fn clear_returns_to_empty_state() {
    let mut store = SceneStore::new();
    store.install(board(&["a"]));
    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.style(), None);
    assert!(store.find_character("det").is_none());
}
