use crate::{
    foundation::core::{Millis, SceneIndex},
    foundation::error::StoryreelResult,
    storyboard::model::{Pacing, Scene, Storyboard},
    storyboard::store::SceneStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Externally observable playback state.
pub enum PlaybackState {
    /// No sequence installed.
    Idle,
    /// Sequence present, auto-advance off.
    Paused,
    /// Sequence present, auto-advance on.
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identity of one scheduled advance.
///
/// Tokens are minted monotonically; only the most recently scheduled token
/// is ever valid. Superseding a schedule invalidates the old token, which
/// makes cancellation synchronous: a stale timer's [`PlaybackController::tick`]
/// is a no-op.
pub struct TickToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One pending auto-advance the embedding runtime should arm a single-shot
/// timer for.
pub struct ScheduledAdvance {
    /// Token to pass back via [`PlaybackController::tick`] when the timer fires.
    pub token: TickToken,
    /// Dwell delay before the advance: pacing base plus transition duration.
    pub delay: Millis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of delivering a timer firing to the controller.
pub enum TickOutcome {
    /// Cursor moved to the next scene; arm a timer for `next`.
    Advanced {
        /// New cursor position.
        cursor: SceneIndex,
        /// Freshly scheduled advance for the new current scene.
        next: ScheduledAdvance,
    },
    /// End of sequence reached: auto-advance stopped, cursor unchanged.
    Completed,
    /// The token was superseded or cancelled before the timer fired.
    Stale,
}

#[derive(Debug, Default)]
/// Playback Controller: a state machine driving a cursor over the installed
/// scene sequence.
///
/// The controller owns no real timer. Each scheduling step mints a fresh
/// [`TickToken`] exposed through [`Self::pending`]; the embedding runtime
/// arms one single-shot timer per [`ScheduledAdvance`] and calls
/// [`Self::tick`] when it fires. All operations are synchronous `&mut self`
/// calls that fully complete (including rescheduling) before the next can
/// run, so at most one pending advance exists after any operation.
pub struct PlaybackController {
    store: SceneStore,
    pacing: Pacing,
    cursor: SceneIndex,
    auto_advancing: bool,
    pending: Option<ScheduledAdvance>,
    next_token: u64,
}

impl PlaybackController {
    /// Create an idle controller with no sequence installed.
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self, board))]
    /// Install one generation result, replacing any current sequence.
    ///
    /// Validates the storyboard first; on error the previous sequence and
    /// playback state are left untouched. On success the pending advance is
    /// cancelled, the cursor returns to the first scene, and auto-advance is
    /// off regardless of prior state.
    pub fn install(&mut self, board: Storyboard, pacing: Pacing) -> StoryreelResult<()> {
        board.validate()?;

        self.cancel_pending();
        self.store.install(board);
        self.pacing = pacing;
        self.cursor = SceneIndex(0);
        self.auto_advancing = false;
        Ok(())
    }

    /// Drop the installed sequence and return to [`PlaybackState::Idle`].
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.store.clear();
        self.cursor = SceneIndex(0);
        self.auto_advancing = false;
    }

    /// Start auto-advance from the current scene.
    ///
    /// No-op on an empty sequence. At the last scene this schedules one
    /// final dwell, after which [`Self::tick`] stops auto-advance without
    /// moving the cursor. Calling while already playing keeps the existing
    /// schedule.
    pub fn play(&mut self) -> Option<ScheduledAdvance> {
        if self.store.is_empty() {
            return None;
        }
        if self.auto_advancing {
            return self.pending;
        }
        self.auto_advancing = true;
        Some(self.schedule())
    }

    /// Stop auto-advance, keeping the cursor where it is.
    pub fn pause(&mut self) {
        self.cancel_pending();
        self.auto_advancing = false;
    }

    /// Step to the next scene, clamped to the end of the sequence.
    ///
    /// While playing, the pending advance is cancelled and a fresh one is
    /// scheduled for the new scene: manual navigation restarts the hold
    /// clock instead of preserving partial elapsed time.
    pub fn next(&mut self) -> Option<ScheduledAdvance> {
        if self.store.is_empty() {
            return None;
        }
        self.cursor = self.cursor.forward(self.store.len());
        self.reschedule_if_playing()
    }

    /// Step to the previous scene, clamped to the start of the sequence.
    pub fn previous(&mut self) -> Option<ScheduledAdvance> {
        if self.store.is_empty() {
            return None;
        }
        self.cursor = self.cursor.back();
        self.reschedule_if_playing()
    }

    /// Return to the first scene and stop auto-advance.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.cursor = SceneIndex(0).clamp_to(self.store.len());
        self.auto_advancing = false;
    }

    #[tracing::instrument(skip(self))]
    /// Deliver a timer firing for a previously scheduled advance.
    ///
    /// A token that was superseded by any state-changing operation is
    /// reported as [`TickOutcome::Stale`] and mutates nothing. A valid
    /// token advances the cursor and reschedules, or stops auto-advance at
    /// the end of the sequence. The sequence does not loop.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        match self.pending {
            Some(pending) if pending.token == token && self.auto_advancing => {}
            _ => return TickOutcome::Stale,
        }
        self.pending = None;

        let next = SceneIndex(self.cursor.0 + 1);
        if next.0 < self.store.len() {
            self.cursor = next;
            TickOutcome::Advanced {
                cursor: self.cursor,
                next: self.schedule(),
            }
        } else {
            tracing::debug!(cursor = self.cursor.0, "sequence complete, auto-advance off");
            self.auto_advancing = false;
            TickOutcome::Completed
        }
    }

    /// Currently pending scheduled advance, if any.
    pub fn pending(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    /// Current cursor position.
    pub fn cursor(&self) -> SceneIndex {
        self.cursor
    }

    /// Number of scenes in the installed sequence.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no scenes are installed.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether auto-advance is active (for UI indicators).
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advancing
    }

    /// Externally observable state.
    pub fn state(&self) -> PlaybackState {
        if self.store.is_empty() {
            PlaybackState::Idle
        } else if self.auto_advancing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    /// Scene under the cursor; `None` when the sequence is empty.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.store.scene_at(self.cursor)
    }

    /// Read access to the sequence store (roster lookups, scene list).
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// Pacing adopted at install time.
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Dwell delay for the current scene: pacing base plus the scene's
    /// declared transition duration.
    pub fn advance_delay(&self) -> Millis {
        let transition = self
            .current_scene()
            .map(|scene| scene.transition.duration_ms())
            .unwrap_or(crate::storyboard::model::DEFAULT_TRANSITION_MS);
        self.pacing.base_dwell_ms().saturating_add(transition)
    }

    fn schedule(&mut self) -> ScheduledAdvance {
        // Minting a new token supersedes any in-flight timer.
        self.next_token += 1;
        let advance = ScheduledAdvance {
            token: TickToken(self.next_token),
            delay: self.advance_delay(),
        };
        self.pending = Some(advance);
        advance
    }

    fn reschedule_if_playing(&mut self) -> Option<ScheduledAdvance> {
        if !self.auto_advancing {
            return None;
        }
        self.cancel_pending();
        Some(self.schedule())
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
