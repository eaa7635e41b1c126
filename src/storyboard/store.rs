use std::collections::BTreeMap;

use crate::{
    foundation::core::SceneIndex,
    storyboard::model::{Character, Environment, Scene, Storyboard, Style},
};

#[derive(Clone, Debug, Default)]
/// Scene Sequence Store: the ordered, immutable scene list of the last
/// installed generation result, plus id-keyed roster lookups.
///
/// The store holds data and lookups only; cursor bounds and scheduling are
/// the [`crate::PlaybackController`]'s job. Lookup maps are rebuilt once per
/// install; a reference missing from the roster resolves to `None`.
pub struct SceneStore {
    style: Option<Style>,
    scenes: Vec<Scene>,
    characters: BTreeMap<String, Character>,
    environments: BTreeMap<String, Environment>,
}

impl SceneStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current sequence and roster with one generation result.
    ///
    /// The swap is atomic from the caller's perspective: lookups and scene
    /// order are fully rebuilt before this returns, so readers observe
    /// either the old result or the new one, never a mix.
    pub fn install(&mut self, board: Storyboard) {
        let Storyboard {
            style,
            characters,
            environments,
            scenes,
        } = board;

        self.style = Some(style);
        self.scenes = scenes;
        self.characters = characters.into_iter().map(|c| (c.id.clone(), c)).collect();
        self.environments = environments.into_iter().map(|e| (e.id.clone(), e)).collect();
    }

    /// Drop the current result, returning the store to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of scenes in the installed sequence.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether no sequence is installed (or the installed one is empty).
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Style of the installed result, if any.
    pub fn style(&self) -> Option<Style> {
        self.style
    }

    /// Scene at `cursor`; `None` is the defined empty / out-of-range result.
    pub fn scene_at(&self, cursor: SceneIndex) -> Option<&Scene> {
        self.scenes.get(cursor.0)
    }

    /// All scenes in playback order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Character lookup by id; `None` when absent from the roster.
    pub fn find_character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Environment lookup by id; `None` when absent from the roster.
    pub fn find_environment(&self, id: &str) -> Option<&Environment> {
        self.environments.get(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/store.rs"]
mod tests;
