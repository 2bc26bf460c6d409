//! Keyframe sequence kept sorted by frame.

use std::sync::Arc;

use cinemap_models::{Keyframe, KeyframeId, KeyframePatch};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Ordered keyframe collection.
///
/// Always sorted ascending by `frame`. Sorting is stable, so keyframes that
/// share a frame keep their insertion order; frames are not required to be
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct KeyframeSequence {
    keyframes: Vec<Keyframe>,
}

impl KeyframeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from keyframes in any order.
    pub fn from_keyframes(keyframes: Vec<Keyframe>) -> Self {
        let mut sequence = Self { keyframes };
        sequence.sort();
        sequence
    }

    /// Add a keyframe and restore ordering.
    pub fn insert(&mut self, keyframe: Keyframe) {
        debug!(keyframe_id = %keyframe.id, frame = keyframe.frame, "Inserting keyframe");
        self.keyframes.push(keyframe);
        self.sort();
    }

    /// Apply a partial update to the keyframe with `id`.
    pub fn update(&mut self, id: &KeyframeId, patch: KeyframePatch) -> CoreResult<()> {
        let keyframe = self
            .keyframes
            .iter_mut()
            .find(|k| &k.id == id)
            .ok_or_else(|| CoreError::KeyframeNotFound(id.clone()))?;
        debug!(keyframe_id = %id, ?patch, "Updating keyframe");
        keyframe.apply_patch(patch);
        self.sort();
        Ok(())
    }

    /// Remove the keyframe with `id`. Missing ids are a no-op.
    pub fn remove(&mut self, id: &KeyframeId) -> Option<Keyframe> {
        let pos = self.keyframes.iter().position(|k| &k.id == id)?;
        debug!(keyframe_id = %id, "Removing keyframe");
        Some(self.keyframes.remove(pos))
    }

    /// Immutable ordered view for the interpolation engine.
    pub fn snapshot(&self) -> Arc<[Keyframe]> {
        Arc::from(self.keyframes.as_slice())
    }

    pub fn get(&self, id: &KeyframeId) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| &k.id == id)
    }

    pub fn as_slice(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn first_frame(&self) -> Option<i64> {
        self.keyframes.first().map(|k| k.frame)
    }

    pub fn last_frame(&self) -> Option<i64> {
        self.keyframes.last().map(|k| k.frame)
    }

    pub fn into_vec(self) -> Vec<Keyframe> {
        self.keyframes
    }

    fn sort(&mut self) {
        self.keyframes.sort_by_key(|k| k.frame);
    }
}

impl From<Vec<Keyframe>> for KeyframeSequence {
    fn from(keyframes: Vec<Keyframe>) -> Self {
        Self::from_keyframes(keyframes)
    }
}

impl From<KeyframeSequence> for Vec<Keyframe> {
    fn from(sequence: KeyframeSequence) -> Self {
        sequence.keyframes
    }
}

impl<'a> IntoIterator for &'a KeyframeSequence {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}
