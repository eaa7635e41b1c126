#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
/// Index of one scene within the installed sequence.
pub struct SceneIndex(pub usize);

impl SceneIndex {
    /// Clamp into `[0, len-1]`. Degenerates to index 0 for an empty sequence.
    pub fn clamp_to(self, len: usize) -> Self {
        if len == 0 {
            return Self(0);
        }
        Self(self.0.min(len - 1))
    }

    /// Step forward by one, clamped to the last valid index.
    pub fn forward(self, len: usize) -> Self {
        Self(self.0.saturating_add(1)).clamp_to(len)
    }

    /// Step back by one, clamped to the first index.
    pub fn back(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Whether this is the last valid index of a sequence of `len` scenes.
    pub fn is_last(self, len: usize) -> bool {
        len > 0 && self.0 == len - 1
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Whole milliseconds of wall-clock delay.
pub struct Millis(pub u64);

impl Millis {
    /// Convert seconds to whole milliseconds, rounding to nearest.
    ///
    /// Non-finite and negative inputs clamp to zero; storyboard data is
    /// external and untrusted.
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self(0);
        }
        Self((secs * 1000.0).round().max(0.0) as u64)
    }

    /// Saturating addition of two delays.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}
