//! Storyreel is a scene playback engine for generated narrative slideshows.
//!
//! Storyreel turns the storyboard returned by a scene-generation backend
//! (characters, environments, ordered scenes with transition descriptors)
//! into a controllable, time-driven presentation: it decides when to
//! advance, how long to hold each scene, and which transition motion
//! profile applies, while staying agnostic of how scenes are rendered.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: generation response body -> validated [`Storyboard`]
//! 2. **Install**: `Storyboard + Pacing -> PlaybackController` (cursor reset, lookups built)
//! 3. **Drive**: the host arms one single-shot timer per [`ScheduledAdvance`]
//!    and feeds firings back via [`PlaybackController::tick`]
//! 4. **Read**: the rendering layer reads the current scene, cursor, and
//!    the [`MotionProfile`] resolved from the scene's transition
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: delay and motion-profile computation are
//!   pure functions of the installed data and pacing.
//! - **No timers inside the engine**: scheduling is expressed as data
//!   ([`ScheduledAdvance`]), so cancellation is synchronous and testable.
//! - **Untrusted input**: storyboards come from an external generator;
//!   dangling references degrade to explicit not-found lookups, never
//!   panics.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod effects;
mod foundation;
mod generate;
mod playback;
mod storyboard;

pub use effects::profiles::{MotionPhase, MotionProfile, TransitionKind, motion_profile};
pub use foundation::core::{Millis, SceneIndex};
pub use foundation::error::{StoryreelError, StoryreelResult};
pub use generate::api::{GenerateRequest, backend_failure, decode_error_detail, decode_storyboard};
pub use playback::controller::{
    PlaybackController, PlaybackState, ScheduledAdvance, TickOutcome, TickToken,
};
pub use storyboard::model::{
    Character, CharacterAppearance, DEFAULT_TRANSITION_MS, Environment, Pacing, Scene, Storyboard,
    Style, TransitionSpec,
};
pub use storyboard::store::SceneStore;
