use crate::{
    foundation::error::{StoryreelError, StoryreelResult},
    storyboard::model::{Pacing, Storyboard, Style},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Request body sent to the scene-generation backend.
///
/// The engine does not submit this itself; it defines the wire contract so
/// the embedding application and the backend agree on one shape.
pub struct GenerateRequest {
    /// Free-text story to turn into scenes.
    pub story: String,
    /// Requested visual style.
    pub style: Style,
    /// Requested pacing; also adopted by the controller at install time.
    pub pacing: Pacing,
}

/// Decode a successful generation response body into a validated
/// [`Storyboard`].
///
/// Callers install the result only on `Ok`, which keeps a failed
/// regeneration from disturbing the currently displayed sequence.
pub fn decode_storyboard(body: &str) -> StoryreelResult<Storyboard> {
    let board: Storyboard = serde_json::from_str(body)
        .map_err(|e| StoryreelError::serde(format!("failed to decode storyboard response: {e}")))?;
    board.validate()?;
    Ok(board)
}

/// Extract the human-readable `detail` message from an error response body.
///
/// Backends are expected to answer failures with `{"detail": "..."}`; any
/// other payload falls back to the trimmed raw body so the user still sees
/// something actionable.
pub fn decode_error_detail(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) if !err.detail.trim().is_empty() => err.detail,
        _ => body.trim().to_string(),
    }
}

/// Map a non-success generation response to the error surfaced to the user.
pub fn backend_failure(body: &str) -> StoryreelError {
    StoryreelError::backend(decode_error_detail(body))
}

#[cfg(test)]
#[path = "../../tests/unit/generate/api.rs"]
mod tests;
