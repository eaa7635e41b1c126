use super::*;

fn scene(id: &str) -> Scene {
    Scene {
        id: id.to_string(),
        title: format!("Scene {id}"),
        description: "Something happens.".to_string(),
        environment_id: "env-1".to_string(),
        transition: TransitionSpec {
            kind: "crossfade".to_string(),
            duration_secs: Some(0.8),
        },
        characters: vec![],
    }
}

fn board() -> Storyboard {
    Storyboard {
        style: Style::Storybook,
        characters: vec![Character {
            id: "char-1".to_string(),
            name: "Mara".to_string(),
            color: 42,
        }],
        environments: vec![Environment {
            id: "env-1".to_string(),
            name: "Lighthouse".to_string(),
        }],
        scenes: vec![scene("s1"), scene("s2")],
    }
}

#[test]
fn wire_format_round_trips_preserving_scene_order() {
    let json = r#"{
        "style": "sci-fi",
        "characters": [{"id": "c1", "name": "Iris", "color": 7}],
        "environments": [{"id": "e1", "name": "Orbital dock"}],
        "scenes": [
            {
                "id": "s1",
                "title": "Arrival",
                "description": "The shuttle docks.",
                "environmentId": "e1",
                "transition": {"type": "dolly", "duration": 1.2},
                "characters": [{"id": "c1", "emotion": "wary", "dialogue": "We made it."}]
            },
            {
                "id": "s2",
                "title": "Departure",
                "description": "The shuttle leaves.",
                "environmentId": "e1",
                "transition": {"type": "wipe"}
            }
        ]
    }"#;

    let board: Storyboard = serde_json::from_str(json).unwrap();
    assert_eq!(board.style, Style::SciFi);
    assert_eq!(board.scenes.len(), 2);
    assert_eq!(board.scenes[0].id, "s1");
    assert_eq!(board.scenes[1].id, "s2");
    assert_eq!(board.scenes[0].environment_id, "e1");
    assert_eq!(board.scenes[0].transition.kind, "dolly");
    assert_eq!(board.scenes[0].transition.duration_secs, Some(1.2));
    assert_eq!(board.scenes[1].transition.duration_secs, None);
    assert_eq!(board.scenes[0].characters[0].character_id, "c1");
    assert_eq!(board.scenes[0].characters[0].emotion.as_deref(), Some("wary"));

    let back = serde_json::to_value(&board).unwrap();
    assert_eq!(back["style"], "sci-fi");
    assert_eq!(back["scenes"][0]["environmentId"], "e1");
    assert_eq!(back["scenes"][0]["transition"]["type"], "dolly");
    assert_eq!(back["scenes"][0]["characters"][0]["id"], "c1");
}

#[test]
fn validate_accepts_well_formed_board() {
    assert!(board().validate().is_ok());
}

#[test]
fn validate_rejects_empty_scene_id() {
    let mut b = board();
    b.scenes[0].id = "  ".to_string();
    assert!(b.validate().is_err());
}

#[test]
fn validate_rejects_duplicate_scene_ids() {
    let mut b = board();
    b.scenes[1].id = "s1".to_string();
    let err = b.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate scene id"));
}

#[test]
fn validate_rejects_nonpositive_transition_duration() {
    let mut b = board();
    b.scenes[0].transition.duration_secs = Some(0.0);
    assert!(b.validate().is_err());

    b.scenes[0].transition.duration_secs = Some(f64::NAN);
    assert!(b.validate().is_err());
}

#[test]
fn validate_allows_dangling_references() {
    // Dangling environment/character ids degrade to not-found lookups;
    // they must not reject the whole storyboard.
    let mut b = board();
    b.scenes[0].environment_id = "env-unknown".to_string();
    b.scenes[0].characters.push(CharacterAppearance {
        character_id: "char-unknown".to_string(),
        emotion: None,
        dialogue: None,
    });
    assert!(b.validate().is_ok());
}

#[test]
fn transition_duration_defaults_to_800ms() {
    let spec = TransitionSpec::default();
    assert_eq!(spec.duration_ms(), DEFAULT_TRANSITION_MS);
    assert_eq!(spec.duration_ms(), Millis(800));

    let spec = TransitionSpec {
        kind: "pan".to_string(),
        duration_secs: Some(1.2),
    };
    assert_eq!(spec.duration_ms(), Millis(1200));
}

#[test]
fn pacing_base_dwell_is_monotonic() {
    assert_eq!(Pacing::Slow.base_dwell_ms(), Millis(4000));
    assert_eq!(Pacing::Normal.base_dwell_ms(), Millis(2800));
    assert_eq!(Pacing::Fast.base_dwell_ms(), Millis(1800));
    assert!(Pacing::Slow.base_dwell_ms() > Pacing::Normal.base_dwell_ms());
    assert!(Pacing::Normal.base_dwell_ms() > Pacing::Fast.base_dwell_ms());
}

#[test]
fn style_and_pacing_wire_names_are_lowercase() {
    assert_eq!(serde_json::to_value(Style::Storybook).unwrap(), "storybook");
    assert_eq!(serde_json::to_value(Style::SciFi).unwrap(), "sci-fi");
    assert_eq!(serde_json::to_value(Pacing::Fast).unwrap(), "fast");
    let pacing: Pacing = serde_json::from_str("\"slow\"").unwrap();
    assert_eq!(pacing, Pacing::Slow);
}
