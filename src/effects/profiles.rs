use kurbo::Vec2;

use crate::{foundation::core::Millis, storyboard::model::TransitionSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Closed set of supported transition kinds.
pub enum TransitionKind {
    /// Opacity crossfade between scenes.
    Crossfade,
    /// Horizontal wipe at full opacity.
    Wipe,
    /// Lateral pan with a fade at both ends.
    Pan,
    /// Camera push: scale settles in, recedes out.
    Dolly,
    /// Fade fully out through black before the next scene fades in.
    FadeThroughBlack,
}

impl TransitionKind {
    /// Parse a wire kind string. Total: unrecognized or empty kinds fall
    /// back to [`TransitionKind::Crossfade`] rather than failing playback.
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "crossfade" => Self::Crossfade,
            "wipe" => Self::Wipe,
            "pan" => Self::Pan,
            "dolly" => Self::Dolly,
            "fade-through-black" | "fade_through_black" => Self::FadeThroughBlack,
            _ => Self::Crossfade,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Visual state of a scene at one named point of its transition.
pub struct MotionPhase {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation offset in canvas-relative pixels.
    pub offset: Vec2,
    /// Uniform scale factor, 1.0 = resting size.
    pub scale: f64,
}

impl MotionPhase {
    /// Resting phase: fully visible, no offset, unit scale.
    pub fn resting() -> Self {
        Self {
            opacity: 1.0,
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    fn faded() -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Declarative motion preset for one scene entry/exit.
///
/// Pure data for the rendering layer: `initial` is the pre-entry state,
/// `animate` the resting state reached over `duration`, and `exit` the
/// state transitioned to when the scene is replaced.
pub struct MotionProfile {
    /// Resolved transition kind.
    pub kind: TransitionKind,
    /// Pre-entry visual state.
    pub initial: MotionPhase,
    /// Resting state reached over the transition duration.
    pub animate: MotionPhase,
    /// State transitioned to when the scene is replaced.
    pub exit: MotionPhase,
    /// Transition duration in milliseconds.
    pub duration: Millis,
}

/// Resolve the motion profile for a scene's transition descriptor.
///
/// Pure and stateless: a function of the descriptor's kind and duration
/// only. An unrecognized kind takes the crossfade preset with the scene's
/// own duration.
pub fn motion_profile(spec: &TransitionSpec) -> MotionProfile {
    let kind = TransitionKind::parse(&spec.kind);
    let duration = spec.duration_ms();
    let (initial, animate, exit) = match kind {
        TransitionKind::Crossfade => (
            MotionPhase::faded(),
            MotionPhase::resting(),
            MotionPhase::faded(),
        ),
        TransitionKind::Wipe => (
            MotionPhase {
                opacity: 1.0,
                offset: Vec2::new(160.0, 0.0),
                scale: 1.0,
            },
            MotionPhase::resting(),
            MotionPhase {
                opacity: 1.0,
                offset: Vec2::new(-160.0, 0.0),
                scale: 1.0,
            },
        ),
        TransitionKind::Pan => (
            MotionPhase {
                opacity: 0.0,
                offset: Vec2::new(60.0, 0.0),
                scale: 1.0,
            },
            MotionPhase::resting(),
            MotionPhase {
                opacity: 0.0,
                offset: Vec2::new(-60.0, 0.0),
                scale: 1.0,
            },
        ),
        TransitionKind::Dolly => (
            MotionPhase {
                opacity: 0.0,
                offset: Vec2::ZERO,
                scale: 1.12,
            },
            MotionPhase::resting(),
            MotionPhase {
                opacity: 0.0,
                offset: Vec2::ZERO,
                scale: 0.96,
            },
        ),
        // The renderer routes this kind through an opaque black backdrop;
        // the phases themselves are a plain fade with no overlap.
        TransitionKind::FadeThroughBlack => (
            MotionPhase::faded(),
            MotionPhase::resting(),
            MotionPhase::faded(),
        ),
    };

    MotionProfile {
        kind,
        initial,
        animate,
        exit,
        duration,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/profiles.rs"]
mod tests;
