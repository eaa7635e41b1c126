use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoryreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StoryreelError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        StoryreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        StoryreelError::backend("x")
            .to_string()
            .contains("backend error:")
    );
}

#[test]
fn backend_detail_is_surfaced_unchanged() {
    let err = StoryreelError::backend("generator quota exceeded");
    assert_eq!(err.to_string(), "backend error: generator quota exceeded");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoryreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
