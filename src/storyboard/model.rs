use crate::{
    foundation::core::Millis,
    foundation::error::{StoryreelError, StoryreelResult},
};

/// Transition duration applied when a scene does not declare one.
pub const DEFAULT_TRANSITION_MS: Millis = Millis(800);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual style tag of one generation result.
pub enum Style {
    /// Soft illustrated storybook look.
    Storybook,
    /// High-contrast noir look.
    Noir,
    /// Science-fiction look.
    #[serde(rename = "sci-fi")]
    SciFi,
    /// Washed watercolor look.
    Watercolor,
    /// Anime look.
    Anime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Coarse dwell-time control for auto-advance.
pub enum Pacing {
    /// Long per-scene dwell.
    Slow,
    /// Default per-scene dwell.
    #[default]
    Normal,
    /// Short per-scene dwell.
    Fast,
}

impl Pacing {
    /// Base dwell time per scene, before the transition duration is added.
    pub fn base_dwell_ms(self) -> Millis {
        match self {
            Self::Slow => Millis(4000),
            Self::Normal => Millis(2800),
            Self::Fast => Millis(1800),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A character in the roster of one generation result.
pub struct Character {
    /// Stable character id referenced by scene appearances.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Numeric color seed, consumed by presentation only.
    #[serde(default)]
    pub color: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An environment in the roster of one generation result.
pub struct Environment {
    /// Stable environment id referenced by scenes.
    pub id: String,
    /// Display name.
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One character's appearance within a scene.
pub struct CharacterAppearance {
    /// Referenced character id; resolved defensively at lookup time.
    #[serde(rename = "id")]
    pub character_id: String,
    /// Optional emotion label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Optional dialogue line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Raw transition descriptor attached to a scene.
///
/// The kind is an open wire string; it is narrowed to the closed
/// [`crate::TransitionKind`] enum when a motion profile is resolved.
pub struct TransitionSpec {
    /// Transition kind identifier.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Transition duration in seconds; [`DEFAULT_TRANSITION_MS`] when absent.
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

impl TransitionSpec {
    /// Declared duration in whole milliseconds, defaulting when unspecified.
    pub fn duration_ms(&self) -> Millis {
        match self.duration_secs {
            Some(secs) => Millis::from_secs_f64(secs),
            None => DEFAULT_TRANSITION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One unit of the narrative sequence.
///
/// Scenes are immutable once received; ownership belongs to the
/// [`crate::SceneStore`] for the lifetime of one generation result.
pub struct Scene {
    /// Unique scene id within the storyboard.
    pub id: String,
    /// Scene title.
    pub title: String,
    /// Free-text scene description.
    pub description: String,
    /// Referenced environment id; resolved defensively at lookup time.
    #[serde(rename = "environmentId")]
    pub environment_id: String,
    /// Transition applied when this scene enters.
    #[serde(default)]
    pub transition: TransitionSpec,
    /// Ordered character appearances within the scene.
    #[serde(default)]
    pub characters: Vec<CharacterAppearance>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One complete generation result: roster plus the ordered scene sequence.
///
/// Scene insertion order defines playback order and is preserved exactly
/// as received from the generation backend.
pub struct Storyboard {
    /// Visual style the result was generated with.
    pub style: Style,
    /// Character roster.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Environment roster.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// Ordered scene sequence.
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    /// Validate structural invariants of one generation result.
    ///
    /// Cross-references (scene -> environment, appearance -> character) are
    /// intentionally not checked here: generation output is untrusted, and
    /// dangling ids degrade to a not-found lookup rather than rejecting the
    /// whole storyboard.
    pub fn validate(&self) -> StoryreelResult<()> {
        let mut seen = std::collections::BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(StoryreelError::validation("scene id must be non-empty"));
            }
            if !seen.insert(scene.id.as_str()) {
                return Err(StoryreelError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            if scene.environment_id.trim().is_empty() {
                return Err(StoryreelError::validation(format!(
                    "scene '{}' environmentId must be non-empty",
                    scene.id
                )));
            }
            if let Some(secs) = scene.transition.duration_secs
                && (!secs.is_finite() || secs <= 0.0)
            {
                return Err(StoryreelError::validation(format!(
                    "scene '{}' transition duration must be finite and > 0 when set",
                    scene.id
                )));
            }
            for appearance in &scene.characters {
                if appearance.character_id.trim().is_empty() {
                    return Err(StoryreelError::validation(format!(
                        "scene '{}' has a character appearance with an empty id",
                        scene.id
                    )));
                }
            }
        }

        for character in &self.characters {
            if character.id.trim().is_empty() {
                return Err(StoryreelError::validation("character id must be non-empty"));
            }
        }
        for environment in &self.environments {
            if environment.id.trim().is_empty() {
                return Err(StoryreelError::validation(
                    "environment id must be non-empty",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/model.rs"]
mod tests;
